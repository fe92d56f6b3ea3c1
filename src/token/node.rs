//! Token tree node types and the group builder.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::error::TokenTreeError;
use crate::flatten::{flatten, FlatEntry};

/// A terminal token value.
///
/// Values are opaque to the flattener: a `Text` scalar is emitted verbatim
/// and a `Number` is emitted in its minimal decimal form (`400`, `1.5`).
/// CSS-specific content (colors, lengths, font stacks) is never parsed or
/// validated here.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Text(String),
    Number(f64),
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Number(n) => write!(f, "{}", n),
        }
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Scalar::Text(s) => serializer.serialize_str(s),
            Scalar::Number(n) => serializer.serialize_f64(*n),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s)
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Scalar::Number(n)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Number(n as f64)
    }
}

/// One node of a token tree: either a nested group or a terminal value.
///
/// The two-case union makes the flattener's recursion exhaustively matched;
/// there is no "neither a group nor a scalar" state to defend against at
/// runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenNode {
    Group(Group),
    Value(Scalar),
}

impl Serialize for TokenNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TokenNode::Group(g) => g.serialize(serializer),
            TokenNode::Value(s) => s.serialize(serializer),
        }
    }
}

impl From<Group> for TokenNode {
    fn from(group: Group) -> Self {
        TokenNode::Group(group)
    }
}

impl From<Scalar> for TokenNode {
    fn from(scalar: Scalar) -> Self {
        TokenNode::Value(scalar)
    }
}

impl From<&str> for TokenNode {
    fn from(s: &str) -> Self {
        TokenNode::Value(Scalar::Text(s.to_string()))
    }
}

impl From<String> for TokenNode {
    fn from(s: String) -> Self {
        TokenNode::Value(Scalar::Text(s))
    }
}

impl From<f64> for TokenNode {
    fn from(n: f64) -> Self {
        TokenNode::Value(Scalar::Number(n))
    }
}

impl From<i64> for TokenNode {
    fn from(n: i64) -> Self {
        TokenNode::Value(Scalar::Number(n as f64))
    }
}

/// An ordered collection of named token nodes.
///
/// Insertion order is significant: the flattener visits entries in the order
/// they were added, and that order determines the output ordering of the
/// generated variables. Entries are never sorted.
///
/// # Example
///
/// ```rust
/// use mm_primitives::Group;
///
/// let tokens = Group::new()
///     .add("gap", Group::new()
///         .add("condensed", "0.5em")
///         .add("normal", "1em"))
///     .add("border", "#D9D9D9");
///
/// assert_eq!(tokens.len(), 2);
/// assert!(tokens.get("gap").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Group {
    entries: Vec<(String, TokenNode)>,
}

impl Group {
    /// Creates an empty group.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds a named node, returning the updated group for chaining.
    ///
    /// The value can be a nested [`Group`], a string scalar, or a numeric
    /// scalar. Adding the same name twice is not rejected here; duplicate
    /// keys are reported by [`Group::validate`] and by flattening.
    pub fn add<V: Into<TokenNode>>(mut self, name: &str, value: V) -> Self {
        self.entries.push((name.to_string(), value.into()));
        self
    }

    /// Returns the node registered under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&TokenNode> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, node)| node)
    }

    /// Returns the entries in insertion order.
    pub fn entries(&self) -> &[(String, TokenNode)] {
        &self.entries
    }

    /// Returns the number of direct children.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the group has no children.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks that the tree is well formed: unique keys at every level and
    /// nesting within the supported depth.
    ///
    /// Flattening performs the same checks; call this for early error
    /// detection before handing the tree to consumers.
    pub fn validate(&self) -> Result<(), TokenTreeError> {
        flatten(self).map(|_| ())
    }

    /// Counts terminal values across the whole tree.
    pub fn leaf_count(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, node)| match node {
                TokenNode::Group(g) => g.leaf_count(),
                TokenNode::Value(_) => 1,
            })
            .sum()
    }

    /// Flattens this group against the default root marker.
    ///
    /// Convenience forwarding to [`flatten`](crate::flatten::flatten); see
    /// that function for the naming rules.
    pub fn flatten(&self) -> Result<Vec<FlatEntry>, TokenTreeError> {
        flatten(self)
    }
}

impl Serialize for Group {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, node) in &self.entries {
            map.serialize_entry(name, node)?;
        }
        map.end()
    }
}
