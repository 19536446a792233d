//! # oxide-fields
//!
//! HTML form controls with composable per-field validation.
//!
//! This crate provides:
//! - Field kinds that render their own control, label and errors
//! - Validators that judge submitted data for a single field
//! - Forms that render as a table and validate all fields at once
//! - JSON form definitions for building a fresh form per request
//!
//! ## Quick Start
//!
//! ```rust
//! use oxide_fields::{Field, FormBuilder, FormData};
//! use oxide_fields::validation::EmailValidator;
//!
//! let mut form = FormBuilder::new()
//!     .field(
//!         Field::textbox("email", "Email")
//!             .required()
//!             .validator(EmailValidator),
//!     )
//!     .field(Field::dropdown("gender", "Gender", ["Female", "Male"]))
//!     .field(Field::button("send", "Sign Up"))
//!     .build()
//!     .unwrap();
//!
//! // First visit: render the empty form.
//! let html = format!(r#"<form action="" method="post">{}</form>"#, form.render());
//! assert!(html.contains("Sign Up"));
//!
//! // Submission: validate, then re-render with errors if needed.
//! let data = FormData::from_urlencoded("gender=Male");
//! assert!(!form.validate(&data));
//! assert_eq!(form.field("email").unwrap().errors(), ["Email field is required"]);
//! assert!(form.render().contains("Email field is required"));
//! ```
//!
//! ## Custom Rules
//!
//! Anything implementing [`validation::Validator`] can be attached to a
//! field, including closures wrapped with [`validation::validator_fn`].

pub mod data;
pub mod definition;
mod error;
pub mod fields;
mod form;
pub mod validation;
pub mod widgets;

pub use data::FormData;
pub use definition::{FieldDefinition, FieldType, FormDefinition};
pub use error::{FormError, Result, ValidationErrors};
pub use fields::{Field, FieldKind};
pub use form::{Form, FormBuilder};
