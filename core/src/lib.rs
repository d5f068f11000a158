//! trellis - multi-match path-template tree
//!
//! A tree of slash-delimited path templates. Template components are either
//! literal (`users`) or wildcards (`:id`); each template stores a payload.
//! Searching a concrete path returns **every** matching template together
//! with the segments its wildcards captured — this is deliberately not a
//! longest-prefix or single-match router.
//!
//! # Matching semantics
//!
//! - One path component is consumed per tree level; a literal child matches
//!   only an identical segment, a wildcard child matches any segment and
//!   binds it under the wildcard's name.
//! - At every branch point the literal child is explored before any wildcard
//!   child, so more-literal matches always precede more-wildcard matches in
//!   the result order.
//! - Paths are normalized before both insertion and search: leading,
//!   trailing, and duplicate [`SEPARATOR`]s are ignored, so `""`, `"/"`, and
//!   `"///"` are the same path.
//! - Both operations are total. Inserting a duplicate template overwrites
//!   its payload; searching with no match returns an empty vector. Nothing
//!   here returns `Result`.
//!
//! # Example
//!
//! ```
//! use trellis::PathTree;
//!
//! let mut tree = PathTree::new();
//! tree.add("/users", "List users");
//! tree.add("/users/:id", "Get a user by id");
//! tree.add("/users/self", "Get the current user");
//!
//! // A single match, with the wildcard bound:
//! let results = tree.search("/users/toto");
//! assert_eq!(*results[0].payload, "Get a user by id");
//! assert_eq!(results[0].params.get("id"), Some("toto"));
//!
//! // Two matches, literal first:
//! let results = tree.search("/users/self");
//! assert_eq!(*results[0].payload, "Get the current user");
//! assert_eq!(*results[1].payload, "Get a user by id");
//!
//! // No match is a normal outcome:
//! assert!(tree.search("nowhere").is_empty());
//! ```
//!
//! # Features
//!
//! - `serde` — `Serialize` for [`Params`]
//! - `config` — route tables deserializable from YAML/JSON
//!   ([`RouteSetConfig`]), implies `serde`

// ═══════════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════════

mod params;
mod segment;
mod tree;

#[cfg(feature = "config")]
mod config;

// ═══════════════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════════════

pub use params::Params;
pub use segment::{SEPARATOR, WILDCARD};
pub use tree::{Match, PathTree};

// Config (feature-gated)
#[cfg(feature = "config")]
pub use config::{RouteConfig, RouteSetConfig};

// ═══════════════════════════════════════════════════════════════════════════════
// Prelude
// ═══════════════════════════════════════════════════════════════════════════════

/// Prelude module for convenient imports.
///
/// ```
/// use trellis::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{Match, Params, PathTree, SEPARATOR, WILDCARD};
}
