//! Flattening a token tree into namespaced variable entries.
//!
//! The flattener is a pure depth-first walk: every terminal value in the
//! tree becomes exactly one [`FlatEntry`], in the tree's own declaration
//! order. Nothing is sorted, cached, or interpreted along the way.
//!
//! # Naming
//!
//! The name of an entry is the joined path from the root to the terminal.
//! Segments are joined with `-`, except at the very first join: the root
//! marker is glued directly to the first segment. Flattening
//! `{ x: { y: "5px" } }` against the default marker `$` therefore yields
//! `$x-y`, not `$-x-y`. Consumers of the generated stylesheet rely on this
//! convention, so it is preserved exactly.

use std::collections::HashSet;

use crate::token::{Group, Scalar, TokenNode, TokenTreeError};

/// The prefix glued to the first path segment of every entry name.
///
/// `$` renders the entries directly usable as SCSS variable declarations.
pub const ROOT_MARKER: &str = "$";

/// Maximum supported nesting depth.
///
/// Well-formed token trees are a handful of levels deep; hitting this limit
/// means the tree is malformed, and flattening fails with
/// [`TokenTreeError::DepthExceeded`] instead of recursing without bound.
pub const MAX_DEPTH: usize = 64;

/// One flattened token: a fully namespaced name and its terminal value.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct FlatEntry {
    /// Namespaced name including the root marker, e.g. `$palette-functional-primary`.
    pub name: String,
    /// The terminal value, emitted verbatim.
    pub value: Scalar,
}

impl std::fmt::Display for FlatEntry {
    /// Formats the entry as a single variable declaration: `<name>: <value>;`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {};", self.name, self.value)
    }
}

/// Flattens a token tree against the default [`ROOT_MARKER`].
///
/// Entries come back in depth-first declaration order. Repeated calls on the
/// same tree produce identical output.
///
/// # Errors
///
/// Returns [`TokenTreeError::DuplicateKey`] if two entries at one level share
/// a name, or [`TokenTreeError::DepthExceeded`] if nesting passes
/// [`MAX_DEPTH`].
///
/// # Example
///
/// ```rust
/// use mm_primitives::{flatten, Group};
///
/// let tokens = Group::new().add("x", Group::new().add("y", "5px"));
/// let entries = flatten(&tokens).unwrap();
///
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].to_string(), "$x-y: 5px;");
/// ```
pub fn flatten(root: &Group) -> Result<Vec<FlatEntry>, TokenTreeError> {
    flatten_with_prefix(root, ROOT_MARKER)
}

/// Flattens a token tree against an explicit prefix.
///
/// The prefix receives the first segment without a separator only when it
/// equals [`ROOT_MARKER`]; any other prefix is treated as an already-started
/// name and joined with `-`. This lets a subtree be flattened under its full
/// namespace: `flatten_with_prefix(&sizes, "$size")` yields `$size-...`
/// names identical to flattening the whole tree.
pub fn flatten_with_prefix(root: &Group, prefix: &str) -> Result<Vec<FlatEntry>, TokenTreeError> {
    walk(root, prefix, 0)
}

fn walk(group: &Group, prefix: &str, depth: usize) -> Result<Vec<FlatEntry>, TokenTreeError> {
    if depth >= MAX_DEPTH {
        return Err(TokenTreeError::DepthExceeded {
            path: prefix.to_string(),
            limit: MAX_DEPTH,
        });
    }

    let mut seen: HashSet<&str> = HashSet::with_capacity(group.len());
    let mut entries = Vec::new();

    for (key, node) in group.entries() {
        let name = join(prefix, key);
        if !seen.insert(key.as_str()) {
            return Err(TokenTreeError::DuplicateKey { path: name });
        }

        match node {
            TokenNode::Group(child) => entries.extend(walk(child, &name, depth + 1)?),
            TokenNode::Value(value) => entries.push(FlatEntry {
                name,
                value: value.clone(),
            }),
        }
    }

    Ok(entries)
}

// No separator at the root join; every later join gets a dash.
fn join(prefix: &str, key: &str) -> String {
    if prefix == ROOT_MARKER {
        format!("{}{}", prefix, key)
    } else {
        format!("{}-{}", prefix, key)
    }
}
