//! File upload field type.

use super::{Field, FieldKind};

impl Field {
    /// Creates a file upload field.
    pub fn file(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::File)
    }
}
