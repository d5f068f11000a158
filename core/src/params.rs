//! `Params` — wildcard bindings captured during one search descent.
//!
//! Each wildcard branch taken during a search binds the wildcard's name to
//! the path segment it consumed. Bindings accumulate as the search descends;
//! every branch into a wildcard child works on its own copy, so sibling
//! wildcard branches never see each other's bindings.

use std::collections::HashMap;

/// Wildcard name → captured path segment, for one matched template.
///
/// Produced by [`PathTree::search`](crate::PathTree::search); never stored in
/// the tree itself. Captured values are the raw segments, uninterpreted.
///
/// # Example
///
/// ```
/// use trellis::PathTree;
///
/// let mut tree = PathTree::new();
/// tree.add("/users/:id", "user");
///
/// let results = tree.search("/users/toto");
/// assert_eq!(results[0].params.get("id"), Some("toto"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Params {
    values: HashMap<String, String>,
}

impl Params {
    /// Create an empty bindings map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the segment captured by the named wildcard.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Returns `true` if the named wildcard captured a segment.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no wildcard was involved in the match.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(name, captured segment)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub(crate) fn insert(&mut self, name: String, value: String) {
        self.values.insert(name, value);
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_and_contains() {
        let params: Params = [("id", "toto")].into_iter().collect();

        assert_eq!(params.get("id"), Some("toto"));
        assert!(params.contains("id"));
        assert_eq!(params.get("missing"), None);
        assert!(!params.contains("missing"));
    }

    #[test]
    fn empty_params() {
        let params = Params::new();
        assert!(params.is_empty());
        assert_eq!(params.len(), 0);
        assert_eq!(params.iter().count(), 0);
    }

    #[test]
    fn iter_yields_all_bindings() {
        let params: Params = [("user_id", "1"), ("pet_id", "2")].into_iter().collect();

        let mut pairs: Vec<_> = params.iter().collect();
        pairs.sort_unstable();
        assert_eq!(pairs, vec![("pet_id", "2"), ("user_id", "1")]);
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let a: Params = [("x", "1"), ("y", "2")].into_iter().collect();
        let b: Params = [("y", "2"), ("x", "1")].into_iter().collect();
        assert_eq!(a, b);
    }
}
