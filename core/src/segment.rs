//! Path segmentation — the normalization applied before every tree operation.
//!
//! A path is an ordered sequence of non-empty components separated by
//! [`SEPARATOR`]. Leading, trailing, and consecutive separators contribute
//! nothing: `""`, `"/"`, and `"///"` all segment to the empty sequence, and
//! `"/users//toto/"` segments to `["users", "toto"]`. Insertion and search
//! normalize identically, so separator noise never affects matching.

/// The path component separator.
pub const SEPARATOR: char = '/';

/// The marker that prefixes a wildcard component in a template.
///
/// `"/users/:id"` declares a wildcard named `"id"` at the second level.
/// Only a marker at the start of a component is significant.
pub const WILDCARD: char = ':';

/// Split a raw path into its non-empty components.
pub(crate) fn segments(path: &str) -> Vec<&str> {
    path.split(SEPARATOR).filter(|c| !c.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_inputs_have_no_segments() {
        assert!(segments("").is_empty());
        assert!(segments("/").is_empty());
        assert!(segments("///").is_empty());
    }

    #[test]
    fn separators_are_discarded() {
        assert_eq!(segments("/users//toto/"), vec!["users", "toto"]);
        assert_eq!(segments("users/toto"), vec!["users", "toto"]);
        assert_eq!(segments("//a///b//"), vec!["a", "b"]);
    }

    #[test]
    fn single_component() {
        assert_eq!(segments("nowhere"), vec!["nowhere"]);
        assert_eq!(segments("/nowhere"), vec!["nowhere"]);
    }

    #[test]
    fn wildcard_marker_is_kept_in_segments() {
        // Segmentation does not interpret the marker; the tree does.
        assert_eq!(segments("/users/:id"), vec!["users", ":id"]);
    }
}
