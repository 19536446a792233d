//! Declarative form definitions.
//!
//! A [`FormDefinition`] lists field specifications that can be loaded from
//! JSON and turned into a fresh [`Form`] for every request:
//!
//! ```rust
//! use oxide_fields::{FormData, FormDefinition};
//!
//! let definition = FormDefinition::from_json(r#"{
//!     "fields": [
//!         {"name": "email", "label": "Email", "kind": "textbox", "required": true, "email": true},
//!         {"name": "gender", "label": "Gender", "kind": "dropdown", "options": ["Female", "Male"]},
//!         {"name": "send", "label": "Sign Up", "kind": "button"}
//!     ]
//! }"#).unwrap();
//!
//! let mut form = definition.build().unwrap();
//! assert!(!form.validate(&FormData::new()));
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{FormError, Result};
use crate::fields::{Field, FieldKind};
use crate::form::Form;
use crate::validation::{
    EmailValidator, MaxLengthValidator, MinLengthValidator, OneOfValidator, PatternValidator,
};

/// Control kind as written in a definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Textbox,
    Password,
    Textarea,
    Dropdown,
    Radio,
    Checkbox,
    Hidden,
    File,
    Button,
}

/// Specification of a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Field name.
    pub name: String,
    /// Field label.
    #[serde(default)]
    pub label: String,
    /// Control kind.
    pub kind: FieldType,
    /// Options for dropdowns and radio groups.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    /// Whether a non-blank value must be submitted.
    #[serde(default)]
    pub required: bool,
    /// Whether the value must look like an email address.
    #[serde(default)]
    pub email: bool,
    /// Minimum length in characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    /// Maximum length in characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    /// Regular expression the value must match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl FieldDefinition {
    /// Builds the field with its validators.
    ///
    /// Validators are attached in a fixed order: required, email, minimum
    /// length, maximum length, pattern, then the option check that choice
    /// fields always carry.
    pub fn build(&self) -> Result<Field> {
        let kind = match self.kind {
            FieldType::Textbox => FieldKind::Textbox,
            FieldType::Password => FieldKind::Password,
            FieldType::Textarea => FieldKind::Textarea,
            FieldType::Dropdown => FieldKind::Dropdown {
                options: self.choices()?,
            },
            FieldType::Radio => FieldKind::Radio {
                options: self.choices()?,
            },
            FieldType::Checkbox => FieldKind::Checkbox,
            FieldType::Hidden => FieldKind::Hidden,
            FieldType::File => FieldKind::File,
            FieldType::Button => FieldKind::Button,
        };
        let is_choice = kind.is_choice();

        let mut field = Field::new(&self.name, &self.label, kind);
        if self.required {
            field = field.required();
        }
        if self.email {
            field = field.validator(EmailValidator);
        }
        if let Some(min) = self.min_length {
            field = field.validator(MinLengthValidator::new(min));
        }
        if let Some(max) = self.max_length {
            field = field.validator(MaxLengthValidator::new(max));
        }
        if let Some(pattern) = &self.pattern {
            field = field.validator(PatternValidator::new(pattern)?);
        }
        if is_choice {
            field = field.validator(OneOfValidator);
        }
        Ok(field)
    }

    fn choices(&self) -> Result<Vec<String>> {
        if self.options.is_empty() {
            return Err(FormError::MissingOptions(self.name.clone()));
        }
        Ok(self.options.clone())
    }
}

/// An ordered list of field specifications.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDefinition {
    /// Fields in render order.
    pub fields: Vec<FieldDefinition>,
}

impl FormDefinition {
    /// Parses a definition from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds a new form. Each call returns an independent form.
    pub fn build(&self) -> Result<Form> {
        let mut form = Form::new();
        for field in &self.fields {
            form.add_input(field.build()?)?;
        }
        Ok(form)
    }
}
