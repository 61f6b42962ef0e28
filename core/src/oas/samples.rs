#![deny(missing_docs)]

//! # Example Value Synthesis
//!
//! Fabricates representative example values from a type tag and an optional
//! resolved schema. The recursion follows `SchemaNode::properties`, which is
//! finite once definitions have been resolved.

use crate::oas::models::SchemaNode;
use serde_json::{Map, Value};

/// Sample used for plain strings without an explicit example.
pub const STRING_SAMPLE: &str = "string";

/// Sample used for `string(date-time)`.
pub const DATE_TIME_SAMPLE: &str = "2020/01/01 00:00:00";

/// Sample used for `file` values; also marks multipart file fields.
pub const BINARY_SAMPLE: &str = "(binary)";

/// Synthesizes an example value.
///
/// `type_tag` is split on its first `:` into the base type and an optional
/// item type (or reference name). Unknown base types yield `Value::Null`.
///
/// # Arguments
///
/// * `type_tag` - e.g. `string`, `integer(int64)`, `array:string`, `object:Pet`.
/// * `example` - Literal override, only honoured for plain `string`.
/// * `schema` - Resolved schema whose properties shape objects and arrays.
pub fn synthesize(type_tag: &str, example: Option<&str>, schema: Option<&SchemaNode>) -> Value {
    let (base, item_type) = type_tag.split_once(':').unwrap_or((type_tag, ""));

    match base {
        "string" => Value::String(example.unwrap_or(STRING_SAMPLE).to_string()),
        "string(date-time)" => Value::String(DATE_TIME_SAMPLE.to_string()),
        "integer" | "integer(int32)" | "integer(int64)" => Value::from(0),
        "number" => Value::from(0.0),
        "boolean" => Value::Bool(true),
        "file" => Value::String(BINARY_SAMPLE.to_string()),
        "array" => {
            let element = match schema.filter(|s| !s.properties.is_empty()) {
                Some(schema) => Some(Value::Object(synthesize_properties(schema))),
                None if !item_type.is_empty() => Some(synthesize(item_type, None, None)),
                None => None,
            };
            Value::Array(element.into_iter().collect())
        }
        "object" => Value::Object(schema.map(synthesize_properties).unwrap_or_default()),
        _ => Value::Null,
    }
}

/// Builds a property-name -> example mapping from a schema's properties.
pub fn synthesize_properties(schema: &SchemaNode) -> Map<String, Value> {
    schema
        .properties
        .iter()
        .map(|prop| {
            (
                prop.name.clone(),
                synthesize(&prop.type_tag, None, Some(prop)),
            )
        })
        .collect()
}
