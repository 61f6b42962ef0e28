#![deny(missing_docs)]

//! # Operation Extraction
//!
//! Walks the `paths` section and builds one `OperationRecord` per path.
//!
//! Every declared HTTP method is listed in `http_methods`, but only the first
//! declared method's operation object is parsed. The record is composed from
//! small independent steps, each reading the raw operation and the shared,
//! read-only definition map.

use crate::oas::definitions::DefinitionMap;
use crate::oas::invocation::build_request_example;
use crate::oas::models::OperationRecord;
use crate::oas::resolver::{
    resolve_parameters, response_codes, response_example, response_schema, success_response,
};
use crate::oas::value::{first_element, plain_text, text_or_null};
use serde_json::Value;

/// Path item keys that declare an operation.
const HTTP_METHODS: [&str; 7] = ["get", "put", "post", "delete", "options", "head", "patch"];

fn is_http_method(key: &str) -> bool {
    HTTP_METHODS.iter().any(|m| m.eq_ignore_ascii_case(key))
}

/// Extracts one record per path, in path declaration order.
///
/// A missing or non-object `paths` section yields no records.
pub fn extract_operations(paths: Option<&Value>, definitions: &DefinitionMap) -> Vec<OperationRecord> {
    let Some(paths) = paths.and_then(Value::as_object) else {
        return Vec::new();
    };

    let mut records = Vec::with_capacity(paths.len());
    for (url, item) in paths {
        let Some(item) = item.as_object() else {
            tracing::warn!(path = %url, "path item is not an object, skipping");
            continue;
        };

        let methods: Vec<&str> = item
            .keys()
            .map(String::as_str)
            .filter(|k| is_http_method(k))
            .collect();
        let Some(operation) = methods.first().and_then(|m| item.get(*m)) else {
            tracing::warn!(path = %url, "path declares no operation, skipping");
            continue;
        };

        records.push(build_record(url, &methods.join(","), operation, definitions));
    }
    records
}

/// Builds the record of one operation object.
pub fn build_record(
    url: &str,
    http_methods: &str,
    operation: &Value,
    definitions: &DefinitionMap,
) -> OperationRecord {
    let summary = text_or_null(operation.get("summary"));
    let responses = operation.get("responses");
    let success = success_response(responses);

    let request_parameters = resolve_parameters(operation.get("parameters"), definitions);
    let response_schema = response_schema(success, definitions);

    OperationRecord {
        title: operation_title(operation),
        url: url.to_string(),
        method_summary: summary.clone(),
        description: summary,
        http_methods: http_methods.to_string(),
        request_content_type: first_media_type(operation, "consumes"),
        response_content_type: first_media_type(operation, "produces"),
        request_example: build_request_example(&request_parameters),
        response_example: response_example(response_schema.as_ref()),
        request_parameters,
        response_codes: response_codes(responses),
        response_schema,
    }
}

/// First entry of `tags`, or `"null"` for untagged operations.
pub fn operation_title(operation: &Value) -> String {
    text_or_null(first_element(operation, "tags"))
}

/// First entry of `consumes` / `produces`, or empty.
fn first_media_type(operation: &Value, key: &str) -> String {
    first_element(operation, key)
        .map(plain_text)
        .unwrap_or_default()
}
