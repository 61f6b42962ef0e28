#![deny(missing_docs)]

//! # Reference Resolution
//!
//! Helpers for Swagger 2.0 `#/definitions/...` references.

use serde_json::Value;

/// Prefix of every local definition reference.
pub const DEFINITIONS_PREFIX: &str = "#/definitions/";

/// Builds the reference key of a definition name.
/// e.g. `Pet` -> `#/definitions/Pet`
pub fn reference_key(name: &str) -> String {
    format!("{}{}", DEFINITIONS_PREFIX, name)
}

/// Extracts the bare definition name from a reference string.
///
/// The prefix is removed by length, so a reference with a different prefix of
/// the same length still yields its trailing segment.
/// e.g. `#/definitions/Pet` -> `Pet`
pub fn definition_name(reference: &str) -> &str {
    reference
        .strip_prefix(DEFINITIONS_PREFIX)
        .or_else(|| reference.get(DEFINITIONS_PREFIX.len()..))
        .unwrap_or("")
}

/// Returns the `$ref` of a schema, or of its `items` for array schemas.
pub(crate) fn schema_or_items_ref(schema: &Value) -> Option<&str> {
    schema
        .get("$ref")
        .and_then(Value::as_str)
        .or_else(|| items_ref(schema))
}

/// Returns `items.$ref` of a schema.
pub(crate) fn items_ref(schema: &Value) -> Option<&str> {
    schema
        .get("items")
        .and_then(|items| items.get("$ref"))
        .and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_definition_name() {
        assert_eq!(definition_name("#/definitions/Pet"), "Pet");
        assert_eq!(definition_name("#/definitions/"), "");
        assert_eq!(definition_name("$/definitions/Pet"), "Pet");
        assert_eq!(definition_name("short"), "");
    }

    #[test]
    fn test_reference_key() {
        assert_eq!(reference_key("Order"), "#/definitions/Order");
    }

    #[test]
    fn test_schema_or_items_ref() {
        let direct = json!({"$ref": "#/definitions/A"});
        let array = json!({"type": "array", "items": {"$ref": "#/definitions/B"}});
        let scalar = json!({"type": "string"});
        assert_eq!(schema_or_items_ref(&direct), Some("#/definitions/A"));
        assert_eq!(schema_or_items_ref(&array), Some("#/definitions/B"));
        assert_eq!(schema_or_items_ref(&scalar), None);
    }
}
