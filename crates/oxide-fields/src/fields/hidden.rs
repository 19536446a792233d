//! Hidden field type.

use super::{Field, FieldKind};

impl Field {
    /// Creates a hidden field. Hidden fields have no label.
    pub fn hidden(name: impl Into<String>) -> Self {
        Self::new(name, "", FieldKind::Hidden)
    }
}
