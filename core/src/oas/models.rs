#![deny(missing_docs)]

//! # Table Models
//!
//! The normalized, browsable representation produced from a Swagger 2.0
//! document: one `OperationRecord` per path, grouped by tag in a `TableResult`.
//!
//! All models serialize with camelCase keys so the output can be handed to a
//! template or UI layer as-is.

use serde::{Serialize, Serializer};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

/// Already filtered property lists, keyed by the list they were built from.
type FilteredLists = HashMap<*const Vec<SchemaNode>, Arc<Vec<SchemaNode>>>;

/// One named schema definition, or one property within a schema.
///
/// A top-level definition has an empty `name`; its children carry the
/// property name. `type_tag` follows the grammar `base[(format)][:RefName]`,
/// e.g. `integer(int64)`, `object:Pet`, `array:Tag`.
///
/// Property lists are shared: every property referencing the same definition
/// holds a handle to that definition's list rather than a copy of it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaNode {
    /// Property name (empty for a top-level definition).
    pub name: String,
    /// The definition `title`.
    pub class_name: String,
    /// Human-readable description.
    pub description: String,
    /// Type tag.
    #[serde(rename = "type")]
    pub type_tag: String,
    /// Expanded child properties, in declaration order.
    pub properties: Arc<Vec<SchemaNode>>,
}

impl SchemaNode {
    /// Whether the node carries a non-blank description.
    pub fn is_described(&self) -> bool {
        !self.description.trim().is_empty()
    }

    /// Copy of the node keeping only immediate properties with a description.
    ///
    /// Kept properties retain their full, unfiltered subtrees.
    pub fn with_described_properties(&self) -> SchemaNode {
        SchemaNode {
            properties: Arc::new(
                self.properties
                    .iter()
                    .filter(|p| p.is_described())
                    .cloned()
                    .collect(),
            ),
            ..self.metadata()
        }
    }

    /// Copy of the node dropping undescribed properties at every depth.
    ///
    /// Each shared property list is filtered once; nodes that shared a list
    /// share its filtered copy.
    pub fn described_tree(&self) -> SchemaNode {
        self.described_tree_with(&mut FilteredLists::new())
    }

    fn described_tree_with(&self, filtered: &mut FilteredLists) -> SchemaNode {
        let key = Arc::as_ptr(&self.properties);
        let properties = match filtered.get(&key) {
            Some(done) => Arc::clone(done),
            None => {
                let done = Arc::new(
                    self.properties
                        .iter()
                        .filter(|p| p.is_described())
                        .map(|p| p.described_tree_with(filtered))
                        .collect::<Vec<_>>(),
                );
                filtered.insert(key, Arc::clone(&done));
                done
            }
        };
        SchemaNode {
            properties,
            ..self.metadata()
        }
    }

    fn metadata(&self) -> SchemaNode {
        SchemaNode {
            name: self.name.clone(),
            class_name: self.class_name.clone(),
            description: self.description.clone(),
            type_tag: self.type_tag.clone(),
            properties: Arc::default(),
        }
    }
}

/// Where a request parameter is carried.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParameterLocation {
    /// `in: header`
    Header,
    /// `in: query`
    Query,
    /// `in: path`
    Path,
    /// `in: formData`
    FormData,
    /// `in: body`
    Body,
    /// Any other (or missing) location, kept verbatim.
    Other(String),
}

impl ParameterLocation {
    /// Returns the Swagger spelling of the location.
    pub fn as_str(&self) -> &str {
        match self {
            ParameterLocation::Header => "header",
            ParameterLocation::Query => "query",
            ParameterLocation::Path => "path",
            ParameterLocation::FormData => "formData",
            ParameterLocation::Body => "body",
            ParameterLocation::Other(raw) => raw,
        }
    }
}

impl From<&str> for ParameterLocation {
    fn from(raw: &str) -> Self {
        match raw {
            "header" => ParameterLocation::Header,
            "query" => ParameterLocation::Query,
            "path" => ParameterLocation::Path,
            "formData" => ParameterLocation::FormData,
            "body" => ParameterLocation::Body,
            other => ParameterLocation::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ParameterLocation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A documented request parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterRecord {
    /// Parameter name.
    pub name: String,
    /// Type tag (same grammar as `SchemaNode::type_tag`).
    #[serde(rename = "type")]
    pub type_tag: String,
    /// Location of the parameter.
    pub location: ParameterLocation,
    /// Whether the parameter is required.
    pub required: bool,
    /// Literal example override (`x-example`).
    pub example: Option<String>,
    /// The parameter description.
    pub remark: String,
    /// Resolved body schema (body parameters only).
    pub schema: Option<SchemaNode>,
}

/// A documented response status code.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseCodeRecord {
    /// Status code, e.g. "200".
    pub status_code: String,
    /// Response description.
    pub description: String,
    /// The `originalRef` of the response schema, if any.
    pub schema_ref: String,
}

/// One documented API operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationRecord {
    /// Grouping tag (first entry of `tags`).
    pub title: String,
    /// The path, e.g. "/pets/{id}".
    pub url: String,
    /// The operation summary.
    pub method_summary: String,
    /// The operation description (also taken from `summary`).
    pub description: String,
    /// Comma-joined methods declared for the path.
    pub http_methods: String,
    /// First `consumes` entry, or empty.
    pub request_content_type: String,
    /// First `produces` entry, or empty.
    pub response_content_type: String,
    /// Documented request parameters, in declaration order.
    pub request_parameters: Vec<ParameterRecord>,
    /// Documented response codes.
    pub response_codes: Vec<ResponseCodeRecord>,
    /// Resolved schema of the 200 response.
    pub response_schema: Option<SchemaNode>,
    /// Example request invocation (query string, headers, body).
    pub request_example: String,
    /// Example response payload as compact JSON.
    pub response_example: String,
}

/// Operations grouped by title, plus the document's own `info` object.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableResult {
    /// Title -> operations, titles in lexicographic order.
    pub table_map: BTreeMap<String, Vec<OperationRecord>>,
    /// Passthrough of the document's `info` object.
    pub info: Value,
}

impl TableResult {
    /// Total number of operations across all groups.
    pub fn operation_count(&self) -> usize {
        self.table_map.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(name: &str, description: &str, properties: Vec<SchemaNode>) -> SchemaNode {
        SchemaNode {
            name: name.into(),
            description: description.into(),
            type_tag: "object".into(),
            properties: properties.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_single_level_filter_keeps_nested_depth() {
        let inner = node("inner", "", vec![]);
        let kept = node("kept", "described", vec![inner.clone()]);
        let dropped = node("dropped", "  ", vec![]);
        let root = node("", "root", vec![kept, dropped]);

        let filtered = root.with_described_properties();
        assert_eq!(filtered.properties.len(), 1);
        assert_eq!(filtered.properties[0].name, "kept");
        assert_eq!(*filtered.properties[0].properties, vec![inner]);
    }

    #[test]
    fn test_full_depth_filter() {
        let inner = node("inner", "", vec![]);
        let kept = node("kept", "described", vec![inner]);
        let root = node("", "root", vec![kept]);

        let filtered = root.described_tree();
        assert_eq!(filtered.properties.len(), 1);
        assert!(filtered.properties[0].properties.is_empty());
    }

    #[test]
    fn test_full_depth_filter_keeps_lists_shared() {
        let leaf = node("leaf", "", vec![]);
        let shared = node("", "", vec![node("kept", "x", vec![]), leaf]);
        let left = SchemaNode {
            name: "l".into(),
            description: "left".into(),
            ..shared.clone()
        };
        let right = SchemaNode {
            name: "r".into(),
            description: "right".into(),
            ..shared
        };
        let root = node("", "root", vec![left, right]);

        let filtered = root.described_tree();
        let (l, r) = (&filtered.properties[0], &filtered.properties[1]);
        assert_eq!(l.properties.len(), 1);
        assert!(Arc::ptr_eq(&l.properties, &r.properties));
    }

    #[test]
    fn test_location_round_trip() {
        for raw in ["header", "query", "path", "formData", "body"] {
            assert_eq!(ParameterLocation::from(raw).as_str(), raw);
        }
        assert_eq!(
            ParameterLocation::from("cookie"),
            ParameterLocation::Other("cookie".into())
        );
    }

    #[test]
    fn test_serialized_keys_are_camel_case() {
        let value = serde_json::to_value(TableResult::default()).unwrap();
        assert!(value.get("tableMap").is_some());
        assert_eq!(value.get("info"), Some(&Value::Null));

        let param = ParameterRecord {
            name: "id".into(),
            type_tag: "integer".into(),
            location: ParameterLocation::Query,
            required: true,
            example: None,
            remark: "identifier".into(),
            schema: None,
        };
        let value = serde_json::to_value(param).unwrap();
        assert_eq!(value["type"], "integer");
        assert_eq!(value["location"], "query");
    }
}
