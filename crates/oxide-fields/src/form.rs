//! Form assembly, rendering and validation.

use std::collections::HashSet;

use ironhtml::html;
use ironhtml_elements::{Td, Th, Tr};
use tracing::debug;

use crate::data::FormData;
use crate::error::{FormError, Result, ValidationErrors};
use crate::fields::Field;

/// An ordered collection of fields.
///
/// Fields render and validate in insertion order. The form does not emit
/// the surrounding `<form>` element; callers wrap [`Form::render`] in their
/// own.
#[derive(Debug, Default)]
pub struct Form {
    fields: Vec<Field>,
    names: HashSet<String>,
}

impl Form {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field.
    ///
    /// Fails when the name is empty or already used by another field.
    pub fn add_input(&mut self, field: Field) -> Result<()> {
        if field.name().is_empty() {
            return Err(FormError::EmptyName);
        }
        if !self.names.insert(field.name().to_string()) {
            return Err(FormError::DuplicateField(field.name().to_string()));
        }
        self.fields.push(field);
        Ok(())
    }

    /// Returns the fields in insertion order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns whether the form has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Renders the fields as a table, one row per field.
    ///
    /// Each row holds the label in a header cell, then the field's errors
    /// followed by its control.
    pub fn render(&self) -> String {
        let mut table = html! { table.class("form-table") };

        for field in &self.fields {
            let label = field.label_html();
            let body = format!("{}{}", field.render_errors(), field.render());
            table = table.child::<Tr, _>(|tr| {
                tr.child::<Th, _>(|th| th.raw(&label))
                    .child::<Td, _>(|td| td.raw(&body))
            });
        }

        table.render()
    }

    /// Validates every field against `data`.
    ///
    /// All fields are validated so each one carries its own errors for the
    /// next render. Returns `true` only when every field passed.
    pub fn validate(&mut self, data: &FormData) -> bool {
        let mut valid = true;
        for field in &mut self.fields {
            valid = field.validate(data) && valid;
        }
        debug!(valid, fields = self.fields.len(), "form validated");
        valid
    }

    /// Collects the errors of the last validation pass by field name.
    pub fn errors(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for field in &self.fields {
            for message in field.errors() {
                errors.add(field.name(), message.as_str());
            }
        }
        errors
    }
}

/// A form builder for creating forms programmatically.
#[derive(Debug, Default)]
pub struct FormBuilder {
    fields: Vec<Field>,
}

impl FormBuilder {
    /// Creates a new form builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field to the form.
    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Builds the form, checking field names.
    pub fn build(self) -> Result<Form> {
        let mut form = Form::new();
        for field in self.fields {
            form.add_input(field)?;
        }
        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::PatternValidator;

    fn signup_form() -> Form {
        FormBuilder::new()
            .field(Field::textbox("email", "Email").required())
            .field(
                Field::textbox("age", "Age")
                    .validator(PatternValidator::new(r"^\d+$").unwrap()),
            )
            .field(Field::button("send", "Sign Up"))
            .build()
            .unwrap()
    }

    #[test]
    fn test_add_input_keeps_order() {
        let form = signup_form();
        let names: Vec<_> = form.fields().iter().map(Field::name).collect();
        assert_eq!(names, ["email", "age", "send"]);
        assert_eq!(form.len(), 3);
    }

    #[test]
    fn test_add_input_rejects_empty_name() {
        let mut form = Form::new();
        let err = form.add_input(Field::textbox("", "Nameless")).unwrap_err();
        assert!(matches!(err, FormError::EmptyName));
        assert!(form.is_empty());
    }

    #[test]
    fn test_add_input_rejects_duplicate_name() {
        let mut form = Form::new();
        form.add_input(Field::textbox("email", "Email")).unwrap();
        let err = form.add_input(Field::password("email", "Email")).unwrap_err();
        assert!(matches!(err, FormError::DuplicateField(name) if name == "email"));
        assert_eq!(form.len(), 1);
    }

    #[test]
    fn test_render_empty_form() {
        let html = Form::new().render();
        assert!(html.starts_with("<table"));
        assert!(!html.contains("<tr"));
    }

    #[test]
    fn test_render_rows_in_order() {
        let html = signup_form().render();
        assert_eq!(html.matches("<tr").count(), 3);
        let email = html.find(r#"name="email""#).unwrap();
        let age = html.find(r#"name="age""#).unwrap();
        let send = html.find(r#"name="send""#).unwrap();
        assert!(email < age && age < send);
        assert!(!html.contains("<form"));
    }

    #[test]
    fn test_validate_aggregates_all_fields() {
        let mut form = signup_form();
        let data = FormData::new().with("age", "abc");

        assert!(!form.validate(&data));
        assert_eq!(
            form.field("email").unwrap().errors(),
            ["Email field is required"]
        );
        assert_eq!(form.field("age").unwrap().errors(), ["Age is not valid"]);
        assert!(form.field("send").unwrap().errors().is_empty());
        assert_eq!(
            form.errors().all_errors(),
            [("age", "Age is not valid"), ("email", "Email field is required")]
        );
    }

    #[test]
    fn test_validate_passes() {
        let mut form = signup_form();
        let data = FormData::new().with("email", "a@b.com").with("age", "42");
        assert!(form.validate(&data));
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_render_shows_errors_before_control() {
        let mut form = signup_form();
        form.validate(&FormData::new().with("age", "7"));

        let html = form.render();
        let error = html.find("Email field is required").unwrap();
        let control = html.find(r#"name="email""#).unwrap();
        assert!(error < control);
    }

    #[test]
    fn test_revalidation_is_idempotent() {
        let mut form = signup_form();
        let data = FormData::new();
        form.validate(&data);
        let first = form.errors();
        form.validate(&data);
        assert_eq!(form.errors(), first);
    }
}
