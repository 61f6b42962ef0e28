#![deny(missing_docs)]

//! # Request Example Builder
//!
//! Assembles a shell-style example invocation from resolved parameters:
//!
//! ```text
//! <query string> --header 'k:v'--header 'k2:v2' -d '<body>'
//! ```
//!
//! Header tokens are concatenated without a separator. A JSON body wins over
//! form data; form data containing a file field switches to `-F` tokens.

use crate::oas::models::{ParameterLocation, ParameterRecord};
use crate::oas::samples::{synthesize, BINARY_SAMPLE};
use crate::oas::value::plain_text;
use serde_json::{Map, Value};
use url::form_urlencoded::byte_serialize;

#[derive(Default)]
struct Buckets {
    header: Map<String, Value>,
    query: Map<String, Value>,
    form: Map<String, Value>,
    body: Map<String, Value>,
}

impl Buckets {
    fn partition(params: &[ParameterRecord]) -> Self {
        let mut buckets = Buckets::default();
        for param in params {
            let bucket = match param.location {
                ParameterLocation::Header => &mut buckets.header,
                ParameterLocation::Query => &mut buckets.query,
                ParameterLocation::FormData => &mut buckets.form,
                ParameterLocation::Body => &mut buckets.body,
                ParameterLocation::Path | ParameterLocation::Other(_) => continue,
            };
            let value = synthesize(
                &param.type_tag,
                param.example.as_deref(),
                param.schema.as_ref(),
            );
            bucket.insert(param.name.clone(), value);
        }
        buckets
    }
}

/// Builds the example invocation string for a parameter list.
pub fn build_request_example(params: &[ParameterRecord]) -> String {
    let buckets = Buckets::partition(params);
    let mut out = String::new();

    if !buckets.query.is_empty() {
        out.push_str(&url_params(&buckets.query));
    }
    if !buckets.header.is_empty() {
        out.push(' ');
        out.push_str(&header_tokens(&buckets.header));
    }

    if !buckets.body.is_empty() {
        let payload = if buckets.body.len() == 1 {
            buckets.body.values().next().cloned().unwrap_or_default()
        } else {
            Value::Object(buckets.body)
        };
        out.push_str(&format!(" -d '{}'", payload));
    } else if !buckets.form.is_empty() {
        out.push_str(&form_segment(&buckets.form));
    }

    out
}

/// Encodes a mapping as `k=v&k2=v2` with form-urlencoded values.
pub fn url_params(map: &Map<String, Value>) -> String {
    map.iter()
        .map(|(key, value)| format!("{}={}", key, url_encode_value(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// One `--header 'key:value'` token per entry, with no separator.
pub fn header_tokens(map: &Map<String, Value>) -> String {
    map.iter()
        .map(|(key, value)| format!("--header '{}:{}'", key, plain_text(value)))
        .collect()
}

fn form_segment(form: &Map<String, Value>) -> String {
    let has_file = form.values().any(is_binary);
    if !has_file {
        return format!(" -d '{}'", url_params(form));
    }

    form.iter()
        .map(|(name, value)| {
            if is_binary(value) {
                format!(" -F '{}=@file'", name)
            } else {
                format!(" -F '{}={}'", name, url_encode_value(value))
            }
        })
        .collect()
}

/// Lists are represented by their first element.
fn first_scalar(value: &Value) -> Option<&Value> {
    match value {
        Value::Array(items) => items.first(),
        other => Some(other),
    }
}

fn is_binary(value: &Value) -> bool {
    first_scalar(value).and_then(Value::as_str) == Some(BINARY_SAMPLE)
}

fn url_encode_value(value: &Value) -> String {
    match first_scalar(value) {
        None | Some(Value::Null) => String::new(),
        Some(scalar) => byte_serialize(plain_text(scalar).as_bytes()).collect(),
    }
}
