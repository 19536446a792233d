//! Field validators.
//!
//! A validator inspects the submitted values for the field it is attached to
//! and reports at most one message per call. Validators never touch field
//! state; [`Field::validate`](crate::Field::validate) collects the messages.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::data::FormData;
use crate::error::{FormError, Result};
use crate::fields::Field;

/// Trait for field validators.
pub trait Validator: Send + Sync {
    /// Checks the submitted data for `field`.
    ///
    /// Returns the failure message when the rule is violated.
    fn validate(&self, field: &Field, data: &FormData) -> std::result::Result<(), String>;
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Validator that requires a non-blank first value.
#[derive(Debug, Clone, Default)]
pub struct RequiredValidator {
    message: Option<String>,
}

impl RequiredValidator {
    /// Creates a new RequiredValidator with default message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new RequiredValidator with custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}

impl Validator for RequiredValidator {
    fn validate(&self, field: &Field, data: &FormData) -> std::result::Result<(), String> {
        if is_blank(data.first(field.name())) {
            Err(self
                .message
                .clone()
                .unwrap_or_else(|| format!("{} field is required", field.display_label())))
        } else {
            Ok(())
        }
    }
}

/// Validator using a custom regex pattern.
///
/// Fails when no value was submitted or when the first value does not match.
#[derive(Debug, Clone)]
pub struct PatternValidator {
    pattern: Regex,
    message: Option<String>,
}

impl PatternValidator {
    /// Compiles `pattern` into a new PatternValidator.
    pub fn new(pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|source| FormError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self::from_regex(pattern))
    }

    /// Creates a PatternValidator from an already compiled regex.
    pub fn from_regex(pattern: Regex) -> Self {
        Self {
            pattern,
            message: None,
        }
    }

    /// Overrides the failure message.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Returns the source of the compiled pattern.
    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Validator for PatternValidator {
    fn validate(&self, field: &Field, data: &FormData) -> std::result::Result<(), String> {
        match data.first(field.name()) {
            Some(value) if self.pattern.is_match(value) => Ok(()),
            _ => Err(self
                .message
                .clone()
                .unwrap_or_else(|| format!("{} is not valid", field.display_label()))),
        }
    }
}

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email regex compiles")
});

/// Validator for email addresses. Blank values pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidator;

impl Validator for EmailValidator {
    fn validate(&self, field: &Field, data: &FormData) -> std::result::Result<(), String> {
        let value = data.first(field.name());
        if is_blank(value) || value.is_some_and(|v| EMAIL_REGEX.is_match(v)) {
            Ok(())
        } else {
            Err(format!(
                "{} is not a valid email address",
                field.display_label()
            ))
        }
    }
}

/// Validator that enforces a minimum length in characters. Blank values pass.
#[derive(Debug, Clone, Copy)]
pub struct MinLengthValidator {
    min_length: usize,
}

impl MinLengthValidator {
    /// Creates a new MinLengthValidator.
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }
}

impl Validator for MinLengthValidator {
    fn validate(&self, field: &Field, data: &FormData) -> std::result::Result<(), String> {
        match data.first(field.name()) {
            Some(value) if !is_blank(Some(value)) && value.chars().count() < self.min_length => {
                Err(format!(
                    "{} must have at least {} characters",
                    field.display_label(),
                    self.min_length
                ))
            }
            _ => Ok(()),
        }
    }
}

/// Validator that enforces a maximum length in characters.
#[derive(Debug, Clone, Copy)]
pub struct MaxLengthValidator {
    max_length: usize,
}

impl MaxLengthValidator {
    /// Creates a new MaxLengthValidator.
    pub fn new(max_length: usize) -> Self {
        Self { max_length }
    }
}

impl Validator for MaxLengthValidator {
    fn validate(&self, field: &Field, data: &FormData) -> std::result::Result<(), String> {
        match data.first(field.name()) {
            Some(value) if value.chars().count() > self.max_length => Err(format!(
                "{} must have at most {} characters",
                field.display_label(),
                self.max_length
            )),
            _ => Ok(()),
        }
    }
}

/// Validator that only accepts one of the field's own options.
///
/// Blank values pass, so a radio group left unselected is only rejected
/// when a [`RequiredValidator`] is attached as well.
#[derive(Debug, Clone, Copy, Default)]
pub struct OneOfValidator;

impl Validator for OneOfValidator {
    fn validate(&self, field: &Field, data: &FormData) -> std::result::Result<(), String> {
        let value = data.first(field.name());
        if is_blank(value) || value.is_some_and(|v| field.options().iter().any(|o| o == v)) {
            Ok(())
        } else {
            Err(format!("{} is not one of the available choices", field.display_label()))
        }
    }
}

/// Validator backed by a closure, for custom business rules.
pub struct FnValidator<F> {
    check: F,
}

impl<F> fmt::Debug for FnValidator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnValidator").finish_non_exhaustive()
    }
}

impl<F> Validator for FnValidator<F>
where
    F: Fn(&Field, &FormData) -> std::result::Result<(), String> + Send + Sync,
{
    fn validate(&self, field: &Field, data: &FormData) -> std::result::Result<(), String> {
        (self.check)(field, data)
    }
}

/// Wraps a closure as a [`Validator`].
///
/// ```rust
/// use oxide_fields::validation::validator_fn;
/// use oxide_fields::{Field, FormData};
///
/// let taken = ["admin@example.com"];
/// let mut email = Field::textbox("email", "Email").validator(validator_fn(
///     move |field: &Field, data: &FormData| match data.first(field.name()) {
///         Some(v) if taken.contains(&v) => Err("Email is already registered".into()),
///         _ => Ok(()),
///     },
/// ));
///
/// let data = FormData::new().with("email", "admin@example.com");
/// assert!(!email.validate(&data));
/// ```
pub fn validator_fn<F>(check: F) -> FnValidator<F>
where
    F: Fn(&Field, &FormData) -> std::result::Result<(), String> + Send + Sync,
{
    FnValidator { check }
}
