//! `PathTree` — multi-match template tree over slash-delimited paths.
//!
//! Templates mix literal components with named wildcards ([`WILDCARD`]
//! prefix). Each template stores one payload. Searching a concrete path
//! returns *every* template that matches, together with the segments the
//! wildcards captured.

use crate::params::Params;
use crate::segment::{segments, WILDCARD};
use std::collections::{BTreeMap, HashMap};

/// A tree of path templates, searchable by concrete path.
///
/// Each inserted template terminates at exactly one node, which holds its
/// payload. A search walks the tree one path component per level; at every
/// node the literal child is tried before any wildcard child, so results for
/// more-literal templates always precede results for more-wildcard templates.
///
/// # Performance
///
/// - Insert: O(k) where k is the number of components
/// - Search: O(k) per candidate branch; each wildcard branch taken clones
///   the accumulated bindings map, so paths crossing many ambiguous wildcard
///   branch points pay one map copy per branch
///
/// # Wildcard order
///
/// When several wildcards coexist at one node, their branches are tried in
/// lexical order of wildcard name.
///
/// # Concurrency
///
/// [`search`](Self::search) takes `&self` and never mutates; any number of
/// concurrent searches are safe once building is done. [`add`](Self::add)
/// takes `&mut self`, so the borrow checker enforces exclusive access during
/// building — there is no internal locking.
///
/// # Example
///
/// ```
/// use trellis::PathTree;
///
/// let mut tree = PathTree::new();
/// tree.add("/users", "List users");
/// tree.add("/users/:id", "Get a user by id");
/// tree.add("/users/self", "Get the current user");
///
/// // Literal match precedes wildcard match.
/// let results = tree.search("/users/self");
/// assert_eq!(*results[0].payload, "Get the current user");
/// assert_eq!(*results[1].payload, "Get a user by id");
/// assert_eq!(results[1].params.get("id"), Some("self"));
/// ```
#[derive(Debug, Clone)]
pub struct PathTree<P> {
    root: Node<P>,
    templates: usize,
}

#[derive(Debug, Clone)]
struct Node<P> {
    /// Present iff some template terminates exactly here.
    payload: Option<P>,
    /// Children reached by an identical path segment.
    literals: HashMap<String, Node<P>>,
    /// Children reached by any path segment, keyed by wildcard name.
    /// BTreeMap keeps branch order deterministic (lexical by name).
    wildcards: BTreeMap<String, Node<P>>,
}

/// One search result: a matched template's payload and the wildcard bindings
/// accumulated along the path that reached it.
#[derive(Debug, PartialEq)]
pub struct Match<'a, P> {
    /// Payload of the matched template.
    pub payload: &'a P,
    /// Segments captured by the template's wildcards.
    pub params: Params,
}

// Manual impl: the payload is borrowed, so cloning a Match must not
// require P: Clone.
impl<P> Clone for Match<'_, P> {
    fn clone(&self) -> Self {
        Self {
            payload: self.payload,
            params: self.params.clone(),
        }
    }
}

impl<P> Default for PathTree<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> PathTree<P> {
    /// Create an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: Node::new(),
            templates: 0,
        }
    }

    /// Number of registered templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates
    }

    /// Returns `true` if no template has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates == 0
    }

    /// Register a template path and its payload.
    ///
    /// Components are separated by [`SEPARATOR`](crate::SEPARATOR); a
    /// component starting with [`WILDCARD`](crate::WILDCARD) declares a
    /// wildcard under the name that follows the marker. Registering a
    /// template that already exists replaces its payload and returns the
    /// previous one.
    ///
    /// Insertion never fails. Degenerate inputs are accepted: `""`, `"/"`,
    /// and `"///"` all register the root template, and a bare `":"`
    /// component registers a wildcard named `""`.
    ///
    /// # Example
    ///
    /// ```
    /// use trellis::PathTree;
    ///
    /// let mut tree = PathTree::new();
    /// assert_eq!(tree.add("/users/:id", 1), None);
    /// assert_eq!(tree.add("/users/:id", 2), Some(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn add(&mut self, template: &str, payload: P) -> Option<P> {
        let mut node = &mut self.root;
        for component in segments(template) {
            node = match component.strip_prefix(WILDCARD) {
                Some(name) => node.wildcards.entry(name.to_string()).or_default(),
                None => node.literals.entry(component.to_string()).or_default(),
            };
        }

        let replaced = node.payload.replace(payload);
        if replaced.is_none() {
            self.templates += 1;
        }
        replaced
    }

    /// Find every template matching the given path.
    ///
    /// The path is segmented exactly like templates are, so leading,
    /// trailing, and duplicate separators never affect the outcome.
    ///
    /// # Result order
    ///
    /// At every level of the tree the literal branch is explored before any
    /// wildcard branch, and wildcard branches in lexical order of wildcard
    /// name. Results are appended in traversal order, so a more-literal
    /// match always precedes a more-wildcard match.
    ///
    /// No match yields an empty vector, never an error. The same payload may
    /// appear more than once when a template set matches one path through
    /// several tree positions; each occurrence carries its own bindings.
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
    /// assert_eq!(results.len(), 1);
    /// assert_eq!(results[0].params.get("id"), Some("toto"));
    ///
    /// assert!(tree.search("/nowhere").is_empty());
    /// ```
    #[must_use]
    pub fn search(&self, path: &str) -> Vec<Match<'_, P>> {
        let mut results = Vec::new();
        self.root
            .search(&segments(path), &Params::new(), &mut results);
        results
    }
}

impl<P> Default for Node<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Node<P> {
    fn new() -> Self {
        Self {
            payload: None,
            literals: HashMap::new(),
            wildcards: BTreeMap::new(),
        }
    }

    /// Depth-first descent consuming one component per call.
    ///
    /// The literal child reuses the caller's bindings untouched; every
    /// wildcard branch extends its own copy, keeping sibling branches
    /// independent.
    fn search<'a>(&'a self, path: &[&str], params: &Params, results: &mut Vec<Match<'a, P>>) {
        let Some((head, rest)) = path.split_first() else {
            if let Some(payload) = &self.payload {
                results.push(Match {
                    payload,
                    params: params.clone(),
                });
            }
            return;
        };

        if let Some(child) = self.literals.get(*head) {
            child.search(rest, params, results);
        }

        for (name, child) in &self.wildcards {
            let mut branch = params.clone();
            branch.insert(name.clone(), (*head).to_string());
            child.search(rest, &branch, results);
        }
    }
}
