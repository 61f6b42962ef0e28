#![deny(missing_docs)]

//! # Definition Resolution
//!
//! Expands the `definitions` section of a Swagger 2.0 document into fully
//! resolved `SchemaNode` trees, keyed by their reference (`#/definitions/Name`).
//!
//! The definitions graph may contain self references (`Node.children -> Node`)
//! and mutual references (`A -> B -> A`). Expansion is memoized with a
//! tri-state slot per definition:
//!
//! - **absent**: not visited yet.
//! - **`Slot::Expanding`**: currently being expanded further up the stack.
//!   Re-entering it yields an empty property list instead of descending again,
//!   so the referencing property stops the cycle at that depth.
//! - **`Slot::Resolved`**: finished; lookups reuse the stored node.
//!
//! Every definition is therefore expanded exactly once and the depth of any
//! resolved tree is bounded by the number of distinct names on its cycle.
//! A resolved definition's property list is shared with every property that
//! references it, so resolution stays linear in the size of the section.

use crate::oas::models::SchemaNode;
use crate::oas::refs::{definition_name, reference_key, schema_or_items_ref};
use crate::oas::value::{str_field, type_tag};
use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Resolved definitions keyed by reference (`#/definitions/Name`).
///
/// Built once per document and read-only afterwards.
pub type DefinitionMap = IndexMap<String, SchemaNode>;

enum Slot {
    Expanding,
    Resolved(SchemaNode),
}

/// Memoizing resolver over a raw `definitions` object.
pub struct DefinitionResolver<'a> {
    raw: &'a Map<String, Value>,
    slots: IndexMap<String, Slot>,
}

impl<'a> DefinitionResolver<'a> {
    /// Creates a resolver over the raw `definitions` mapping.
    pub fn new(raw: &'a Map<String, Value>) -> Self {
        Self {
            raw,
            slots: IndexMap::with_capacity(raw.len()),
        }
    }

    /// Resolves every definition and returns the reference map.
    pub fn resolve_all(mut self) -> DefinitionMap {
        let raw = self.raw;
        for name in raw.keys() {
            self.resolve_one(name);
        }

        self.slots
            .into_iter()
            .filter_map(|(key, slot)| match slot {
                Slot::Resolved(node) => Some((key, node)),
                Slot::Expanding => None,
            })
            .collect()
    }

    /// Resolves one definition by bare name and returns its properties.
    ///
    /// Returns `None` when no definition of that name exists.
    fn resolve_one(&mut self, name: &str) -> Option<Arc<Vec<SchemaNode>>> {
        let key = reference_key(name);
        match self.slots.get(&key) {
            Some(Slot::Resolved(node)) => return Some(Arc::clone(&node.properties)),
            Some(Slot::Expanding) => {
                tracing::trace!(definition = name, "cyclic reference, not descending");
                return Some(Arc::default());
            }
            None => {}
        }

        let definitions = self.raw;
        let Some(raw) = definitions.get(name) else {
            tracing::warn!(definition = name, "reference to undefined definition");
            return None;
        };

        self.slots.insert(key.clone(), Slot::Expanding);

        let mut properties = Vec::new();
        if let Some(raw_props) = raw.get("properties").and_then(Value::as_object) {
            for (prop_name, prop) in raw_props {
                properties.push(self.resolve_property(prop_name, prop));
            }
        }

        let properties = Arc::new(properties);
        let node = SchemaNode {
            name: String::new(),
            class_name: str_field(raw, "title").unwrap_or_default().to_string(),
            description: str_field(raw, "description")
                .unwrap_or_default()
                .to_string(),
            type_tag: String::new(),
            properties: Arc::clone(&properties),
        };
        self.slots.insert(key, Slot::Resolved(node));
        Some(properties)
    }

    fn resolve_property(&mut self, name: &str, prop: &Value) -> SchemaNode {
        let mut child = SchemaNode {
            name: name.to_string(),
            description: str_field(prop, "description")
                .unwrap_or_default()
                .to_string(),
            type_tag: type_tag(prop),
            ..Default::default()
        };

        if let Some(reference) = schema_or_items_ref(prop) {
            let target = definition_name(reference);
            if let Some(properties) = self.resolve_one(target) {
                child.properties = properties;
                child.type_tag = format!("{}:{}", child.type_tag, target);
            }
        }

        child
    }
}

/// Resolves the `definitions` section of a document.
///
/// A missing or non-object section yields an empty map.
pub fn resolve_definitions(document: &Value) -> DefinitionMap {
    match document.get("definitions").and_then(Value::as_object) {
        Some(raw) => DefinitionResolver::new(raw).resolve_all(),
        None => DefinitionMap::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn depth(node: &SchemaNode) -> usize {
        1 + node.properties.iter().map(depth).max().unwrap_or(0)
    }

    #[test]
    fn test_resolves_flat_definition() {
        let doc = json!({
            "definitions": {
                "Pet": {
                    "title": "Pet model",
                    "description": "A pet",
                    "properties": {
                        "name": {"type": "string", "description": "pet name"},
                        "id": {"type": "integer", "format": "int64"}
                    }
                }
            }
        });
        let defs = resolve_definitions(&doc);
        let pet = &defs["#/definitions/Pet"];
        assert_eq!(pet.class_name, "Pet model");
        assert_eq!(pet.description, "A pet");
        assert_eq!(pet.properties.len(), 2);
        assert_eq!(pet.properties[0].name, "name");
        assert_eq!(pet.properties[0].type_tag, "string");
        assert_eq!(pet.properties[1].type_tag, "integer(int64)");
        assert_eq!(pet.properties[1].description, "");
    }

    #[test]
    fn test_ref_and_array_ref_expand_children() {
        let doc = json!({
            "definitions": {
                "Order": {
                    "properties": {
                        "pet": {"$ref": "#/definitions/Pet", "description": "the pet"},
                        "tags": {"type": "array", "items": {"$ref": "#/definitions/Tag"}}
                    }
                },
                "Pet": {"properties": {"name": {"type": "string"}}},
                "Tag": {"properties": {"label": {"type": "string"}}}
            }
        });
        let defs = resolve_definitions(&doc);
        let order = &defs["#/definitions/Order"];
        assert_eq!(order.properties[0].type_tag, "object:Pet");
        assert_eq!(order.properties[0].properties[0].name, "name");
        assert_eq!(order.properties[1].type_tag, "array:Tag");
        assert_eq!(order.properties[1].properties[0].name, "label");
    }

    #[test]
    fn test_self_reference_terminates() {
        let doc = json!({
            "definitions": {
                "Node": {
                    "properties": {
                        "value": {"type": "string"},
                        "next": {"$ref": "#/definitions/Node"},
                        "children": {"type": "array", "items": {"$ref": "#/definitions/Node"}}
                    }
                }
            }
        });
        let defs = resolve_definitions(&doc);
        let node = &defs["#/definitions/Node"];
        assert_eq!(node.properties.len(), 3);
        assert_eq!(node.properties[1].type_tag, "object:Node");
        assert!(node.properties[1].properties.is_empty());
        assert_eq!(node.properties[2].type_tag, "array:Node");
        assert!(depth(node) <= 2);
    }

    #[test]
    fn test_mutual_reference_terminates() {
        let doc = json!({
            "definitions": {
                "A": {"properties": {"b": {"$ref": "#/definitions/B"}}},
                "B": {"properties": {"a": {"$ref": "#/definitions/A"}}}
            }
        });
        let defs = resolve_definitions(&doc);
        let a = &defs["#/definitions/A"];
        let b = &defs["#/definitions/B"];

        assert_eq!(a.properties[0].type_tag, "object:B");
        assert_eq!(a.properties[0].properties[0].type_tag, "object:A");
        assert!(a.properties[0].properties[0].properties.is_empty());
        assert_eq!(b.properties[0].type_tag, "object:A");
        assert!(b.properties[0].properties.is_empty());
        assert!(depth(a) <= 3);
    }

    #[test]
    fn test_diamond_chain_shares_expanded_lists() {
        const DEPTH: usize = 64;
        let mut definitions = serde_json::Map::new();
        for i in 0..DEPTH {
            let next = format!("#/definitions/D{}", i + 1);
            definitions.insert(
                format!("D{}", i),
                json!({"properties": {
                    "l": {"$ref": next.as_str(), "description": "left"},
                    "r": {"$ref": next.as_str(), "description": "right"}
                }}),
            );
        }
        definitions.insert(
            format!("D{}", DEPTH),
            json!({"properties": {"leaf": {"type": "string"}}}),
        );

        let defs = resolve_definitions(&json!({ "definitions": definitions }));
        assert_eq!(defs.len(), DEPTH + 1);

        let mut node = &defs["#/definitions/D0"];
        for _ in 0..DEPTH {
            let (l, r) = (&node.properties[0], &node.properties[1]);
            assert!(Arc::ptr_eq(&l.properties, &r.properties));
            node = l;
        }
        assert_eq!(node.properties[0].name, "leaf");
        assert!(Arc::ptr_eq(
            &defs["#/definitions/D1"].properties,
            &defs["#/definitions/D0"].properties[0].properties
        ));
    }

    #[test]
    fn test_undefined_reference_keeps_base_type() {
        let doc = json!({
            "definitions": {
                "Holder": {"properties": {"ghost": {"$ref": "#/definitions/Missing"}}}
            }
        });
        let defs = resolve_definitions(&doc);
        let ghost = &defs["#/definitions/Holder"].properties[0];
        assert_eq!(ghost.type_tag, "object");
        assert!(ghost.properties.is_empty());
        assert!(!defs.contains_key("#/definitions/Missing"));
    }

    #[test]
    fn test_definition_without_properties() {
        let doc = json!({"definitions": {"Empty": {"type": "object", "title": "E"}}});
        let defs = resolve_definitions(&doc);
        assert_eq!(defs["#/definitions/Empty"].class_name, "E");
        assert!(defs["#/definitions/Empty"].properties.is_empty());
    }

    #[test]
    fn test_missing_definitions_section() {
        assert!(resolve_definitions(&json!({"paths": {}})).is_empty());
        assert!(resolve_definitions(&json!({"definitions": []})).is_empty());
    }
}
