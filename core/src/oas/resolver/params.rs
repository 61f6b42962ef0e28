#![deny(missing_docs)]

//! # Parameter Resolution
//!
//! Maps the raw `parameters` array of an operation into `ParameterRecord`s.
//!
//! Parameters without a description are treated as undocumented and are not
//! surfaced. Body parameters resolve their schema reference against the
//! definition map; the attached schema is filtered one level deep only.

use crate::oas::definitions::DefinitionMap;
use crate::oas::models::{ParameterLocation, ParameterRecord, SchemaNode};
use crate::oas::refs::{definition_name, items_ref};
use crate::oas::value::{non_blank_field, plain_text, str_field, text_or_null, type_tag};
use serde_json::Value;

/// Resolves the documented parameters of an operation, in declaration order.
///
/// A missing or non-array `parameters` value yields an empty list.
pub fn resolve_parameters(
    parameters: Option<&Value>,
    definitions: &DefinitionMap,
) -> Vec<ParameterRecord> {
    parameters
        .and_then(Value::as_array)
        .map(|raw| {
            raw.iter()
                .filter_map(|param| resolve_parameter(param, definitions))
                .collect()
        })
        .unwrap_or_default()
}

/// Resolves a single parameter; `None` when it has no description.
pub fn resolve_parameter(param: &Value, definitions: &DefinitionMap) -> Option<ParameterRecord> {
    let remark = non_blank_field(param, "description")?.to_string();
    let location = ParameterLocation::from(text_or_null(param.get("in")).as_str());

    let (type_tag, schema) = match location {
        ParameterLocation::Body => resolve_body_schema(param, definitions),
        _ => (scalar_type_tag(param), None),
    };

    Some(ParameterRecord {
        name: text_or_null(param.get("name")),
        type_tag,
        location,
        required: param
            .get("required")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        example: param
            .get("x-example")
            .filter(|v| !v.is_null())
            .map(plain_text),
        remark,
        schema,
    })
}

/// Type tag of a non-body parameter, `array:<itemType>` for typed arrays.
fn scalar_type_tag(param: &Value) -> String {
    let tag = type_tag(param);
    if tag != "array" {
        return tag;
    }
    match param.get("items").and_then(|items| str_field(items, "type")) {
        Some(item_type) => format!("array:{}", item_type),
        None => tag,
    }
}

/// Type tag and filtered schema of a body parameter.
///
/// For `schema.type == "array"` the reference is read from `schema.items`
/// and the tag becomes `array`; otherwise `schema.$ref` is used.
fn resolve_body_schema(
    param: &Value,
    definitions: &DefinitionMap,
) -> (String, Option<SchemaNode>) {
    let mut tag = type_tag(param);
    let Some(schema) = param.get("schema") else {
        return (tag, None);
    };

    let reference = if str_field(schema, "type") == Some("array") {
        tag = "array".to_string();
        items_ref(schema)
    } else {
        str_field(schema, "$ref")
    };

    let Some(reference) = reference else {
        return (tag, None);
    };

    let tag = format!("{}:{}", tag, definition_name(reference));
    let resolved = definitions
        .get(reference)
        .map(SchemaNode::with_described_properties);
    if resolved.is_none() {
        tracing::warn!(reference, "body parameter references an undefined definition");
    }
    (tag, resolved)
}
