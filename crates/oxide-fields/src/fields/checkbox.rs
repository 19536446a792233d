//! Checkbox field type.

use super::{Field, FieldKind};

impl Field {
    /// Creates a boolean toggle.
    pub fn checkbox(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Checkbox)
    }
}
