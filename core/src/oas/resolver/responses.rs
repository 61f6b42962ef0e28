#![deny(missing_docs)]

//! # Response Resolution
//!
//! Logic for resolving the `responses` of an operation.
//!
//! Only the `200` response is documented. Its schema is resolved against the
//! definition map and filtered of undescribed properties at every depth.

use crate::oas::definitions::DefinitionMap;
use crate::oas::models::{ResponseCodeRecord, SchemaNode};
use crate::oas::refs::items_ref;
use crate::oas::samples::synthesize_properties;
use crate::oas::value::{plain_text, str_field, text_or_null};
use serde_json::Value;

/// The only status code kept in the documentation.
pub const SUCCESS_STATUS: &str = "200";

/// Returns the raw `200` response object, if any.
pub fn success_response(responses: Option<&Value>) -> Option<&Value> {
    responses
        .and_then(|r| r.get(SUCCESS_STATUS))
        .filter(|r| r.is_object())
}

/// Lists the documented response codes (the `200` entry only).
pub fn response_codes(responses: Option<&Value>) -> Vec<ResponseCodeRecord> {
    let Some(entries) = responses.and_then(Value::as_object) else {
        return Vec::new();
    };

    entries
        .iter()
        .filter(|(code, _)| code.as_str() == SUCCESS_STATUS)
        .map(|(code, info)| ResponseCodeRecord {
            status_code: code.clone(),
            description: text_or_null(info.get("description")),
            schema_ref: info
                .get("schema")
                .and_then(|schema| schema.get("originalRef"))
                .map(plain_text)
                .unwrap_or_default(),
        })
        .collect()
}

/// Resolves the schema of the `200` response.
///
/// Returns `None` when the response has no `schema`. When the schema
/// references a known definition, the result carries that definition's
/// metadata and its properties filtered at every depth; otherwise only the
/// raw `type` is kept.
///
/// In both cases the node's `type` is the raw `schema.type` of the response
/// (empty when absent), never the definition's own tag. See "Response schema
/// type" in DESIGN.md.
pub fn response_schema(
    success: Option<&Value>,
    definitions: &DefinitionMap,
) -> Option<SchemaNode> {
    let schema = success?.get("schema").filter(|s| !s.is_null())?;
    let type_tag = str_field(schema, "type").unwrap_or_default().to_string();

    let resolved = response_reference(schema)
        .filter(|r| !r.trim().is_empty())
        .and_then(|reference| definitions.get(reference));

    Some(match resolved {
        Some(definition) => SchemaNode {
            type_tag,
            ..definition.described_tree()
        },
        None => SchemaNode {
            type_tag,
            ..Default::default()
        },
    })
}

/// Builds the example response payload from the resolved response schema.
///
/// Returns compact JSON of a property -> example mapping, or an empty string
/// when the schema has no documented properties.
pub fn response_example(schema: Option<&SchemaNode>) -> String {
    match schema.filter(|s| !s.properties.is_empty()) {
        Some(schema) => Value::Object(synthesize_properties(schema)).to_string(),
        None => String::new(),
    }
}

/// `schema.$ref` wins over `schema.items.$ref` for array schemas.
fn response_reference(schema: &Value) -> Option<&str> {
    let direct = str_field(schema, "$ref");
    if direct.is_some() {
        return direct;
    }
    if str_field(schema, "type") == Some("array") {
        return items_ref(schema);
    }
    None
}
