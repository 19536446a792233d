//! HTML fragments for the individual form controls.
//!
//! Every function here is pure: it formats its arguments and escapes any
//! user-supplied text.

use ironhtml::html;
use ironhtml::typed::Element;
use ironhtml_elements::Li;

/// Returns the element id used for a field's control and label.
pub fn control_id(name: &str) -> String {
    format!("id_{name}")
}

/// Renders a single `<input>` of the given type.
pub fn input(input_type: &str, name: &str) -> String {
    let name = html_escape(name);
    let id = control_id(&name);
    format!(r#"<input type="{input_type}" name="{name}" id="{id}">"#)
}

/// Renders a hidden input. Hidden inputs carry no id since nothing labels them.
pub fn hidden_input(name: &str) -> String {
    format!(r#"<input type="hidden" name="{}">"#, html_escape(name))
}

/// Renders an empty multi-line text input.
pub fn textarea(name: &str) -> String {
    let name = html_escape(name);
    let id = control_id(&name);
    format!(r#"<textarea name="{name}" id="{id}"></textarea>"#)
}

/// Renders a dropdown with one option per entry, in order.
pub fn select(name: &str, options: &[String]) -> String {
    let name = html_escape(name);
    let id = control_id(&name);

    let mut out = format!(r#"<select name="{name}" id="{id}">"#);
    for option in options {
        let option = html_escape(option);
        out.push_str(&format!(r#"<option value="{option}">{option}</option>"#));
    }
    out.push_str("</select>");
    out
}

/// Renders one radio button per option, each wrapped in its own label.
pub fn radio_group(name: &str, options: &[String]) -> String {
    let name = html_escape(name);
    options
        .iter()
        .map(|option| {
            let option = html_escape(option);
            format!(
                r#"<label><input type="radio" name="{name}" value="{option}"> {option}</label>"#
            )
        })
        .collect()
}

/// Renders a submit button whose visible text is `text`.
pub fn submit_button(name: &str, text: &str) -> String {
    format!(
        r#"<button type="submit" name="{}">{}</button>"#,
        html_escape(name),
        html_escape(text)
    )
}

/// Renders a `<label>` bound to the control with the given id.
pub fn label(id: &str, text: &str) -> String {
    html! {
        label.for_(#id) { #text }
    }
    .render()
}

/// Renders error messages as a list, or nothing when there are none.
pub fn error_list(errors: &[String]) -> String {
    if errors.is_empty() {
        return String::new();
    }

    html! { ul.class("errorlist") }
        .children(errors, |error, li: Element<Li>| li.text(error))
        .render()
}

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
