#![deny(missing_docs)]

//! # Swagger Parsing Module
//!
//! - **models**: The table model (`SchemaNode`, `OperationRecord`, ...).
//! - **definitions**: Cycle-safe expansion of `definitions`.
//! - **samples**: Example value synthesis.
//! - **resolver**: Parameter and response resolution.
//! - **invocation**: Example request assembly.
//! - **routes**: Per-path operation extraction.
//! - **tables**: Grouping by title.
//! - **document**: Document-level entry points.

pub mod definitions;
pub mod document;
pub mod invocation;
pub mod models;
pub mod refs;
pub mod resolver;
pub mod routes;
pub mod samples;
pub mod tables;

mod value;

pub use definitions::{resolve_definitions, DefinitionMap, DefinitionResolver};
pub use document::{
    parse_swagger_document, parse_swagger_document_lenient, parse_swagger_document_with_format,
    tables_from_value, DocumentFormat,
};
pub use invocation::build_request_example;
pub use models::{
    OperationRecord, ParameterLocation, ParameterRecord, ResponseCodeRecord, SchemaNode,
    TableResult,
};
pub use routes::extract_operations;
pub use samples::synthesize;
pub use tables::group_by_title;
