use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::model::Inventory;

/// The request body the audit endpoint expects.
///
/// Both maps carry the same key set: `requires` maps each dependency name to
/// its version string, `dependencies` maps it to a `{"version": ...}` object.
/// Entries keep the inventory's insertion order.
#[derive(Debug, Serialize)]
pub struct AuditRequest {
    pub dependencies: Map<String, Value>,
    pub requires: Map<String, Value>,
}

impl AuditRequest {
    /// Builds the request from a collected inventory. Deterministic: no
    /// filtering, no deduplication beyond what the inventory already
    /// guarantees.
    pub fn from_inventory(inventory: &Inventory) -> Self {
        let mut dependencies = Map::new();
        let mut requires = Map::new();

        for dependency in inventory.iter() {
            requires.insert(
                dependency.name.clone(),
                Value::String(dependency.version.clone()),
            );
            dependencies.insert(
                dependency.name.clone(),
                json!({ "version": dependency.version }),
            );
        }

        Self {
            dependencies,
            requires,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_inventory() -> Inventory {
        let mut inventory = Inventory::new();
        inventory.insert("jquery", "3.6.0");
        inventory.insert("@babel/core", "7.20.0");
        inventory.insert("left-pad", "1.3.0");
        inventory
    }

    #[test]
    fn test_key_sets_match_inventory() {
        let inventory = sample_inventory();
        let request = AuditRequest::from_inventory(&inventory);

        let require_keys: Vec<&str> = request.requires.keys().map(String::as_str).collect();
        let dependency_keys: Vec<&str> = request.dependencies.keys().map(String::as_str).collect();

        assert_eq!(require_keys, dependency_keys);
        assert_eq!(require_keys, inventory.names());
    }

    #[test]
    fn test_serialized_shape() {
        let mut inventory = Inventory::new();
        inventory.insert("jquery", "3.6.0");

        let request = AuditRequest::from_inventory(&inventory);
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["requires"]["jquery"], "3.6.0");
        assert_eq!(body["dependencies"]["jquery"]["version"], "3.6.0");
    }

    #[test]
    fn test_empty_inventory_builds_empty_maps() {
        let request = AuditRequest::from_inventory(&Inventory::new());
        assert!(request.requires.is_empty());
        assert!(request.dependencies.is_empty());
    }
}
