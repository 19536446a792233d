//! Error types for forms.

use std::collections::BTreeMap;
use thiserror::Error;

/// Configuration errors raised while assembling a form.
///
/// Failed validation of submitted data is not an error: it is reported
/// through [`Field::errors`](crate::Field::errors) and the boolean returned
/// by [`Form::validate`](crate::Form::validate).
#[derive(Debug, Error)]
pub enum FormError {
    /// A field was added with an empty name.
    #[error("field name must not be empty")]
    EmptyName,

    /// Two fields in the same form share a name.
    #[error("duplicate field name: {0}")]
    DuplicateField(String),

    /// A choice field was defined without any options.
    #[error("field {0} requires at least one option")]
    MissingOptions(String),

    /// A pattern validator was given an invalid regular expression.
    #[error("invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A form definition could not be parsed.
    #[error("failed to parse form definition: {0}")]
    Definition(#[from] serde_json::Error),
}

/// Collection of validation errors by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    /// Errors keyed by field name.
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// Creates a new empty ValidationErrors.
    pub fn new() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }

    /// Adds an error for a field.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Returns whether there are any errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of fields with errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns errors for a specific field.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field).map(Vec::as_slice)
    }

    /// Returns all errors as a flat list, ordered by field name.
    pub fn all_errors(&self) -> Vec<(&str, &str)> {
        self.errors
            .iter()
            .flat_map(|(field, messages)| {
                messages
                    .iter()
                    .map(move |msg| (field.as_str(), msg.as_str()))
            })
            .collect()
    }
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;
