//! Submitted form data.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Parsed form submission: each field name maps to the values sent for it.
///
/// Mirrors what a standard `application/x-www-form-urlencoded` or multipart
/// parser produces. Repeated keys accumulate values in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormData {
    values: HashMap<String, Vec<String>>,
}

impl FormData {
    /// Creates empty form data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses an urlencoded body or query string.
    ///
    /// `+` decodes to a space and `%XX` escapes are decoded as UTF-8.
    /// Pairs without `=` are kept with an empty value.
    pub fn from_urlencoded(body: &str) -> Self {
        let mut data = Self::new();
        for pair in body.split('&').filter(|p| !p.is_empty()) {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next().unwrap_or_default();
            let value = parts.next().unwrap_or("");
            data.append(urlencoding_decode(key), urlencoding_decode(value));
        }
        data
    }

    /// Replaces the values of a field with a single value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), vec![value.into()]);
    }

    /// Appends a value to a field.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.entry(key.into()).or_default().push(value.into());
    }

    /// Builder method to append a value.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.append(key, value);
        self
    }

    /// Returns all values sent for a field.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.values.get(key).map(Vec::as_slice)
    }

    /// Returns the first value sent for a field.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns whether the field was submitted at all.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Returns the number of submitted field names.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns whether nothing was submitted.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns an iterator over field names and their values.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.values
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl From<HashMap<String, Vec<String>>> for FormData {
    fn from(values: HashMap<String, Vec<String>>) -> Self {
        Self { values }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut data = Self::new();
        for (key, value) in iter {
            data.append(key, value);
        }
        data
    }
}

fn urlencoding_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' => out.push(b' '),
            b'%' if i + 2 < bytes.len() => {
                match std::str::from_utf8(&bytes[i + 1..i + 3])
                    .ok()
                    .and_then(|hex| u8::from_str_radix(hex, 16).ok())
                {
                    Some(byte) => {
                        out.push(byte);
                        i += 3;
                        continue;
                    }
                    None => out.push(b'%'),
                }
            }
            b => out.push(b),
        }
        i += 1;
    }

    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urlencoded_parsing() {
        let data = FormData::from_urlencoded("name=John+Doe&city=New%20York&note=caf%C3%A9");
        assert_eq!(data.first("name"), Some("John Doe"));
        assert_eq!(data.first("city"), Some("New York"));
        assert_eq!(data.first("note"), Some("café"));
    }

    #[test]
    fn test_repeated_keys_accumulate() {
        let data = FormData::from_urlencoded("tag=a&tag=b&empty=&flag");
        assert_eq!(
            data.get("tag"),
            Some(&["a".to_string(), "b".to_string()][..])
        );
        assert_eq!(data.first("empty"), Some(""));
        assert_eq!(data.first("flag"), Some(""));
        assert_eq!(data.len(), 3);
    }

    #[test]
    fn test_malformed_escape_is_kept() {
        let data = FormData::from_urlencoded("a=100%&b=%zz");
        assert_eq!(data.first("a"), Some("100%"));
        assert_eq!(data.first("b"), Some("%zz"));
    }

    #[test]
    fn test_insert_replaces_values() {
        let mut data = FormData::new().with("email", "a@b.com").with("email", "c@d.com");
        assert_eq!(data.get("email").map(<[String]>::len), Some(2));

        data.insert("email", "x@y.com");
        assert_eq!(data.get("email"), Some(&["x@y.com".to_string()][..]));
        assert!(data.contains_key("email"));
        assert!(!data.contains_key("name"));
    }

    #[test]
    fn test_deserialize_from_json() {
        let data: FormData = serde_json::from_str(r#"{"email": ["a@b.com"]}"#).unwrap();
        assert_eq!(data.first("email"), Some("a@b.com"));
    }
}
