use serde::{Deserialize, Serialize};

/// An installed npm package with its original (un-mangled) name and the
/// version resolved from the host registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedDependency {
    pub name: String,
    pub version: String,
}

impl NormalizedDependency {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// The collected set of normalized dependencies, keyed by name.
///
/// Preserves insertion order. Inserting a name that is already present
/// replaces the stored version in place (last write wins).
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    entries: Vec<NormalizedDependency>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a dependency. Duplicate names keep their original position
    /// and take the newer version.
    pub fn insert(&mut self, name: impl Into<String>, version: impl Into<String>) {
        let name = name.into();
        let version = version.into();

        if let Some(entry) = self.entries.iter_mut().find(|e| e.name == name) {
            entry.version = version;
        } else {
            self.entries.push(NormalizedDependency::new(name, version));
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NormalizedDependency> {
        self.entries.iter()
    }

    /// Dependency names in insertion order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_preserves_order() {
        let mut inventory = Inventory::new();
        inventory.insert("jquery", "3.6.0");
        inventory.insert("@babel/core", "7.20.0");
        inventory.insert("lodash", "4.17.21");

        assert_eq!(inventory.names(), vec!["jquery", "@babel/core", "lodash"]);
    }

    #[test]
    fn test_insert_last_write_wins() {
        let mut inventory = Inventory::new();
        inventory.insert("jquery", "3.5.0");
        inventory.insert("lodash", "4.17.21");
        inventory.insert("jquery", "3.6.0");

        assert_eq!(inventory.len(), 2);
        assert_eq!(inventory.names(), vec!["jquery", "lodash"]);

        let jquery = inventory.iter().find(|e| e.name == "jquery").unwrap();
        assert_eq!(jquery.version, "3.6.0");
    }

    #[test]
    fn test_empty_inventory() {
        let inventory = Inventory::new();
        assert!(inventory.is_empty());
        assert_eq!(inventory.len(), 0);
    }
}
