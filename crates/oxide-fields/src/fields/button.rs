//! Submit button.

use super::{Field, FieldKind};

impl Field {
    /// Creates a submit button showing `label` as its text.
    pub fn button(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Button)
    }
}
