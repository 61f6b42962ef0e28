#![deny(missing_docs)]

//! # Resolver Module
//!
//! Logic for resolving the per-operation pieces of a Swagger 2.0 document.
//!
//! Handles:
//! - Parameter resolution, including body schemas (single-level filtering).
//! - The `200` response code, schema (full-depth filtering) and example.

pub mod params;
pub mod responses;

pub use params::{resolve_parameter, resolve_parameters};
pub use responses::{
    response_codes, response_example, response_schema, success_response, SUCCESS_STATUS,
};
