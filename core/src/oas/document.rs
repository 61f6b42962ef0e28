#![deny(missing_docs)]

//! # Swagger Document Parsing
//!
//! Entry points turning a raw Swagger 2.0 document into a `TableResult`:
//!
//! 1. decode the document into a generic JSON value,
//! 2. resolve `definitions` into the shared reference map,
//! 3. extract one record per path,
//! 4. group the records by title.

use crate::error::AppResult;
use crate::oas::definitions::resolve_definitions;
use crate::oas::models::TableResult;
use crate::oas::routes::extract_operations;
use crate::oas::tables::group_by_title;
use serde_json::Value;

/// Serialization format of the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentFormat {
    /// JSON (the Swagger 2.0 canonical form).
    #[default]
    Json,
    /// YAML, decoded into the same JSON value model.
    Yaml,
}

impl DocumentFormat {
    /// Guesses the format from a file extension (`yaml`/`yml` -> YAML).
    pub fn from_extension(ext: &str) -> Self {
        if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") {
            DocumentFormat::Yaml
        } else {
            DocumentFormat::Json
        }
    }
}

/// Parses a JSON Swagger document into grouped tables.
///
/// # Arguments
///
/// * `content` - The raw JSON document.
///
/// # Returns
///
/// * `TableResult` - Operations grouped by tag plus the document `info`.
pub fn parse_swagger_document(content: &str) -> AppResult<TableResult> {
    parse_swagger_document_with_format(content, DocumentFormat::Json)
}

/// Parses a Swagger document of the given format into grouped tables.
pub fn parse_swagger_document_with_format(
    content: &str,
    format: DocumentFormat,
) -> AppResult<TableResult> {
    let document: Value = match format {
        DocumentFormat::Json => serde_json::from_str(content)?,
        DocumentFormat::Yaml => serde_yaml::from_str(content)?,
    };
    Ok(tables_from_value(&document))
}

/// Parses a JSON document, logging and returning an empty result on failure.
pub fn parse_swagger_document_lenient(content: &str) -> TableResult {
    match parse_swagger_document(content) {
        Ok(result) => result,
        Err(e) => {
            tracing::error!(error = %e, "parse error");
            TableResult::default()
        }
    }
}

/// Runs the pipeline over an already decoded document.
///
/// Missing sections are treated as empty; a non-object root yields an empty
/// result with a `null` info.
pub fn tables_from_value(document: &Value) -> TableResult {
    let definitions = resolve_definitions(document);
    let records = extract_operations(document.get("paths"), &definitions);
    let operation_count = records.len();

    let result = TableResult {
        table_map: group_by_title(records),
        info: document.get("info").cloned().unwrap_or(Value::Null),
    };

    tracing::debug!(
        definitions = definitions.len(),
        operations = operation_count,
        groups = result.table_map.len(),
        "converted swagger document"
    );
    if tracing::enabled!(tracing::Level::TRACE) {
        if let Ok(json) = serde_json::to_string(&result) {
            tracing::trace!(result = %json);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use serde_json::json;

    #[test]
    fn test_invalid_json_is_an_error() {
        let err = parse_swagger_document("{ not json").unwrap_err();
        assert!(matches!(err, AppError::Json(_)));
    }

    #[test]
    fn test_lenient_returns_empty_result() {
        let result = parse_swagger_document_lenient("garbage");
        assert_eq!(result, TableResult::default());
    }

    #[test]
    fn test_non_object_root() {
        let result = tables_from_value(&json!([1, 2, 3]));
        assert!(result.table_map.is_empty());
        assert_eq!(result.info, Value::Null);
    }

    #[test]
    fn test_info_passthrough() {
        let info = json!({"title": "Petstore", "version": "1.0", "x-logo": {"url": "l.png"}});
        let result = tables_from_value(&json!({"swagger": "2.0", "info": info.clone()}));
        assert_eq!(result.info, info);
        assert!(result.table_map.is_empty());
    }

    #[test]
    fn test_yaml_document() {
        let yaml = r#"
swagger: "2.0"
info: {title: T, version: "1"}
paths:
  /ping:
    get:
      tags: [Health]
      summary: ping
"#;
        let result = parse_swagger_document_with_format(yaml, DocumentFormat::Yaml).unwrap();
        assert_eq!(result.table_map["Health"][0].url, "/ping");
        assert_eq!(result.info["title"], "T");
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(DocumentFormat::from_extension("YML"), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_extension("json"), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_extension(""), DocumentFormat::Json);
    }
}
