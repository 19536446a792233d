//! Choice field types.

use super::{Field, FieldKind};

fn collect_options<I, S>(options: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    options.into_iter().map(Into::into).collect()
}

impl Field {
    /// Creates a dropdown offering `options` in the given order.
    pub fn dropdown<I, S>(name: impl Into<String>, label: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            name,
            label,
            FieldKind::Dropdown {
                options: collect_options(options),
            },
        )
    }

    /// Creates a radio group with one button per option.
    pub fn radio<I, S>(name: impl Into<String>, label: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            name,
            label,
            FieldKind::Radio {
                options: collect_options(options),
            },
        )
    }
}
