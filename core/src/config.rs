//! Config types for building a tree from a serialized route table.
//!
//! These types mirror the runtime tree but are serde-deserializable, so a
//! route table can be authored in YAML or JSON and loaded at startup:
//!
//! ```yaml
//! routes:
//!   - path: /users
//!     payload: list_users
//!   - path: /users/:id
//!     payload: get_user
//! ```
//!
//! Building is total: any deserialized table produces a tree. Duplicate
//! paths follow [`PathTree::add`] overwrite semantics (the last entry wins),
//! so the only failure mode a caller handles is the deserializer's own
//! parse error.

use crate::PathTree;
use serde::Deserialize;

/// One route: a template path and the payload it stores.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "P: Deserialize<'de>"))]
pub struct RouteConfig<P> {
    /// Template path (`/users/:id` style).
    pub path: String,
    /// Payload registered for this template.
    pub payload: P,
}

/// A deserializable set of routes.
///
/// # Example
///
/// ```
/// use trellis::RouteSetConfig;
///
/// let yaml = "
/// routes:
///   - path: /users/:id
///     payload: get_user
/// ";
/// let config: RouteSetConfig<String> = serde_yaml::from_str(yaml).unwrap();
/// let tree = config.build();
///
/// assert_eq!(tree.len(), 1);
/// assert_eq!(tree.search("/users/toto").len(), 1);
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "P: Deserialize<'de>"))]
pub struct RouteSetConfig<P> {
    /// Routes registered in order; later entries overwrite earlier ones
    /// with the same path.
    pub routes: Vec<RouteConfig<P>>,
}

impl<P> RouteSetConfig<P> {
    /// Build the runtime tree from this table.
    #[must_use]
    pub fn build(self) -> PathTree<P> {
        let mut tree = PathTree::new();
        for route in self.routes {
            tree.add(&route.path, route.payload);
        }
        tree
    }
}

impl<P> From<RouteSetConfig<P>> for PathTree<P> {
    fn from(config: RouteSetConfig<P>) -> Self {
        config.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaml_table_builds_a_tree() {
        let yaml = "
routes:
  - path: /users
    payload: list
  - path: /users/:id
    payload: by_id
";
        let config: RouteSetConfig<String> = serde_yaml::from_str(yaml).unwrap();
        let tree = config.build();

        assert_eq!(tree.len(), 2);
        let results = tree.search("/users/toto");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].params.get("id"), Some("toto"));
    }

    #[test]
    fn json_table_builds_a_tree() {
        let json = r#"{
            "routes": [
                { "path": "/pets/:pet_id", "payload": 42 }
            ]
        }"#;
        let config: RouteSetConfig<u32> = serde_json::from_str(json).unwrap();
        let tree: PathTree<u32> = config.into();

        assert_eq!(*tree.search("/pets/7").remove(0).payload, 42);
    }

    #[test]
    fn duplicate_paths_last_entry_wins() {
        let yaml = "
routes:
  - path: /users
    payload: old
  - path: /users
    payload: new
";
        let config: RouteSetConfig<String> = serde_yaml::from_str(yaml).unwrap();
        let tree = config.build();

        assert_eq!(tree.len(), 1);
        assert_eq!(*tree.search("/users")[0].payload, "new".to_string());
    }

    #[test]
    fn empty_table_builds_an_empty_tree() {
        let config: RouteSetConfig<String> = serde_yaml::from_str("routes: []").unwrap();
        assert!(config.build().is_empty());
    }
}
