//! Text field types.

use super::{Field, FieldKind};

impl Field {
    /// Creates a single-line text field.
    pub fn textbox(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Textbox)
    }

    /// Creates a masked password field.
    pub fn password(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Password)
    }

    /// Creates a multi-line text field.
    pub fn textarea(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Textarea)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_textbox() {
        let field = Field::textbox("email", "Email");
        assert_eq!(field.name(), "email");
        assert_eq!(
            field.render(),
            r#"<input type="text" name="email" id="id_email">"#
        );
        assert!(field.label_html().contains("id_email"));
    }

    #[test]
    fn test_password() {
        let field = Field::password("password", "Password");
        assert!(field.render().contains(r#"type="password""#));
        assert!(field.label_html().contains("Password"));
    }

    #[test]
    fn test_textarea() {
        let field = Field::textarea("message", "Message");
        assert_eq!(
            field.render(),
            r#"<textarea name="message" id="id_message"></textarea>"#
        );
    }
}
