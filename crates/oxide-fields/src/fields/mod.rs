//! Form field definitions.
//!
//! A [`Field`] pairs a control kind with its name, label, validators and the
//! errors found by the last validation pass. Constructors for each kind live
//! in the submodules.

mod button;
mod checkbox;
mod choice;
mod file;
mod hidden;
mod text;

use tracing::debug;

use crate::data::FormData;
use crate::validation::{RequiredValidator, Validator};
use crate::widgets;

/// The kind of control a field renders as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line text input.
    Textbox,
    /// Masked text input.
    Password,
    /// Multi-line text input.
    Textarea,
    /// Select element with one option per entry.
    Dropdown {
        /// Options in display order.
        options: Vec<String>,
    },
    /// One radio button per option, sharing the field name.
    Radio {
        /// Options in display order.
        options: Vec<String>,
    },
    /// Single boolean toggle.
    Checkbox,
    /// Non-interactive value carrier.
    Hidden,
    /// File upload.
    File,
    /// Submit button; the field label is its text.
    Button,
}

impl FieldKind {
    /// Returns the options of a choice kind, or an empty slice.
    pub fn options(&self) -> &[String] {
        match self {
            Self::Dropdown { options } | Self::Radio { options } => options,
            _ => &[],
        }
    }

    /// Returns whether this kind chooses among options.
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::Dropdown { .. } | Self::Radio { .. })
    }
}

/// A single form control with its label, validators and errors.
pub struct Field {
    name: String,
    label: String,
    kind: FieldKind,
    validators: Vec<Box<dyn Validator>>,
    errors: Vec<String>,
}

impl std::fmt::Debug for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("kind", &self.kind)
            .field("validators", &self.validators.len())
            .field("errors", &self.errors)
            .finish()
    }
}

impl Field {
    /// Creates a new field of the given kind with no validators.
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            validators: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Adds a validator. Validators run in the order they were added.
    #[must_use]
    pub fn validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Shorthand for adding a [`RequiredValidator`].
    #[must_use]
    pub fn required(self) -> Self {
        self.validator(RequiredValidator::new())
    }

    /// Field name, used as the request data key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Label text as given at construction.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The kind of control.
    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    /// Options of a choice field, empty otherwise.
    pub fn options(&self) -> &[String] {
        self.kind.options()
    }

    /// Number of attached validators.
    pub fn validator_count(&self) -> usize {
        self.validators.len()
    }

    /// Errors found by the last call to [`Field::validate`].
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Returns whether the last validation pass found errors.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Id of the rendered control, referenced by the label.
    pub fn id(&self) -> String {
        widgets::control_id(&self.name)
    }

    /// Text used in validation messages.
    ///
    /// The label, or the capitalized name with underscores turned into
    /// spaces when the label is empty.
    pub fn display_label(&self) -> String {
        if !self.label.is_empty() {
            return self.label.clone();
        }

        let spaced = self.name.replace('_', " ");
        let mut chars = spaced.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect()
        })
    }

    /// Renders the control.
    pub fn render(&self) -> String {
        match &self.kind {
            FieldKind::Textbox => widgets::input("text", &self.name),
            FieldKind::Password => widgets::input("password", &self.name),
            FieldKind::Textarea => widgets::textarea(&self.name),
            FieldKind::Dropdown { options } => widgets::select(&self.name, options),
            FieldKind::Radio { options } => widgets::radio_group(&self.name, options),
            FieldKind::Checkbox => widgets::input("checkbox", &self.name),
            FieldKind::Hidden => widgets::hidden_input(&self.name),
            FieldKind::File => widgets::input("file", &self.name),
            FieldKind::Button => widgets::submit_button(&self.name, &self.label),
        }
    }

    /// Renders the label.
    ///
    /// Hidden fields and buttons have none. A radio group has no single
    /// control to point at, so its label is plain text.
    pub fn label_html(&self) -> String {
        match self.kind {
            FieldKind::Hidden | FieldKind::Button => String::new(),
            _ if self.label.is_empty() => String::new(),
            FieldKind::Radio { .. } => widgets::html_escape(&self.label),
            _ => widgets::label(&self.id(), &self.label),
        }
    }

    /// Renders the current errors as a list, or an empty string.
    pub fn render_errors(&self) -> String {
        widgets::error_list(&self.errors)
    }

    /// Runs every validator against `data` without touching the field.
    ///
    /// All validators run; the result holds one message per failed rule.
    pub fn check(&self, data: &FormData) -> Vec<String> {
        self.validators
            .iter()
            .filter_map(|validator| validator.validate(self, data).err())
            .collect()
    }

    /// Validates `data`, replacing the errors of any previous pass.
    ///
    /// Returns `true` when every validator passed.
    pub fn validate(&mut self, data: &FormData) -> bool {
        self.errors = self.check(data);
        for error in &self.errors {
            debug!(field = %self.name, %error, "validation rule failed");
        }
        self.errors.is_empty()
    }

    /// Drops the errors of the last validation pass.
    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{validator_fn, PatternValidator};

    #[test]
    fn test_new_field_has_no_errors() {
        let field = Field::textbox("email", "Email").required();
        assert!(field.errors().is_empty());
        assert!(!field.has_errors());
        assert_eq!(field.validator_count(), 1);
    }

    #[test]
    fn test_required_textbox_missing() {
        let mut field = Field::textbox("email", "Email").required();
        assert!(!field.validate(&FormData::new()));
        assert_eq!(field.errors(), ["Email field is required"]);
    }

    #[test]
    fn test_required_textbox_present() {
        let mut field = Field::textbox("email", "Email").required();
        assert!(field.validate(&FormData::new().with("email", "a@b.com")));
        assert!(field.errors().is_empty());
    }

    #[test]
    fn test_all_validators_run() {
        let mut field = Field::textbox("code", "Code")
            .required()
            .validator(PatternValidator::new(r"^[A-Z]{3}$").unwrap());

        assert!(!field.validate(&FormData::new()));
        assert_eq!(field.errors(), ["Code field is required", "Code is not valid"]);
    }

    #[test]
    fn test_revalidation_replaces_errors() {
        let mut field = Field::textbox("email", "Email").required();
        assert!(!field.validate(&FormData::new()));
        assert!(!field.validate(&FormData::new()));
        assert_eq!(field.errors().len(), 1);

        assert!(field.validate(&FormData::new().with("email", "a@b.com")));
        assert!(field.errors().is_empty());
    }

    #[test]
    fn test_validators_see_their_field() {
        let mut field = Field::textbox("nickname", "Nickname").validator(validator_fn(
            |field: &Field, _: &FormData| Err(format!("{} rejected", field.name())),
        ));
        assert!(!field.validate(&FormData::new()));
        assert_eq!(field.errors(), ["nickname rejected"]);
    }

    #[test]
    fn test_check_does_not_mutate() {
        let field = Field::textbox("email", "Email").required();
        assert_eq!(field.check(&FormData::new()).len(), 1);
        assert!(field.errors().is_empty());
    }

    #[test]
    fn test_render_errors() {
        let mut field = Field::textbox("email", "Email").required();
        assert_eq!(field.render_errors(), "");

        field.validate(&FormData::new());
        let html = field.render_errors();
        assert!(html.contains("Email field is required"));

        field.clear_errors();
        assert_eq!(field.render_errors(), "");
    }

    #[test]
    fn test_render_is_pure() {
        let mut field = Field::textbox("email", "Email").required();
        field.validate(&FormData::new());
        let first = field.render();
        assert_eq!(first, field.render());
        assert_eq!(field.errors().len(), 1);
    }

    #[test]
    fn test_empty_label_is_suppressed() {
        let field = Field::textbox("q", "");
        assert_eq!(field.label_html(), "");
    }

    #[test]
    fn test_display_label() {
        assert_eq!(Field::textbox("email", "E-mail").display_label(), "E-mail");
        assert_eq!(Field::hidden("unit_price").display_label(), "Unit price");
    }

    #[test]
    fn test_name_appears_once_per_control() {
        let fields = [
            Field::textbox("f", "F"),
            Field::password("f", "F"),
            Field::textarea("f", "F"),
            Field::dropdown("f", "F", ["a", "b"]),
            Field::checkbox("f", "F"),
            Field::hidden("f"),
            Field::file("f", "F"),
        ];
        for field in &fields {
            assert_eq!(
                field.render().matches(r#"name="f""#).count(),
                1,
                "{:?}",
                field.kind()
            );
        }
    }

    #[test]
    fn test_labels_for_labelled_kinds() {
        let fields = [
            Field::textbox("f", "F"),
            Field::password("f", "F"),
            Field::textarea("f", "F"),
            Field::dropdown("f", "F", ["a"]),
            Field::radio("f", "F", ["a"]),
            Field::checkbox("f", "F"),
            Field::file("f", "F"),
        ];
        for field in &fields {
            assert!(!field.label_html().is_empty(), "{:?}", field.kind());
        }
    }
}
