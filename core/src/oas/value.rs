#![deny(missing_docs)]

//! # Raw Value Access
//!
//! Tolerant accessors over the decoded `serde_json::Value` tree.
//!
//! Swagger documents in the wild are frequently partial, so every accessor
//! here treats a missing or mistyped field as absent rather than failing.

use serde_json::Value;

/// Returns the string stored under `key`, if the value is a string.
pub(crate) fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

/// Returns the string under `key` unless it is missing or blank.
pub(crate) fn non_blank_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    str_field(value, key).filter(|s| !s.trim().is_empty())
}

/// Returns the first element of the array under `key`.
pub(crate) fn first_element<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.get(key).and_then(Value::as_array).and_then(|a| a.first())
}

/// Renders an optional value as text.
///
/// Absent values and `null` render as the literal `"null"`, strings are used
/// verbatim and anything else renders as compact JSON.
pub(crate) fn text_or_null(value: Option<&Value>) -> String {
    value.map(plain_text).unwrap_or_else(|| "null".to_string())
}

/// Renders a value as text: strings verbatim, everything else as JSON.
pub(crate) fn plain_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Builds a type tag from a schema's `type` and `format`.
///
/// A missing or blank `type` defaults to `object`; a `format` is appended
/// in parentheses, e.g. `integer(int64)`.
pub(crate) fn type_tag(schema: &Value) -> String {
    let base = non_blank_field(schema, "type").unwrap_or("object");
    match schema.get("format").filter(|f| !f.is_null()) {
        Some(format) => format!("{}({})", base, plain_text(format)),
        None => base.to_string(),
    }
}
