#![deny(missing_docs)]

//! # Swagdoc Core
//!
//! Converts a Swagger 2.0 document into a browsable table model: one record
//! per operation, grouped by tag, with resolved schemas, synthesized example
//! values and example request invocations.

/// Shared error types.
pub mod error;

/// Swagger parsing, resolution and example synthesis.
pub mod oas;

pub use error::{AppError, AppResult};
pub use oas::{
    build_request_example, extract_operations, group_by_title, parse_swagger_document,
    parse_swagger_document_lenient, parse_swagger_document_with_format, resolve_definitions,
    synthesize, tables_from_value, DefinitionMap, DefinitionResolver, DocumentFormat,
    OperationRecord, ParameterLocation, ParameterRecord, ResponseCodeRecord, SchemaNode,
    TableResult,
};
