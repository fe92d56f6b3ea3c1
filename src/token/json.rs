//! Loading token trees from JSON.
//!
//! Token sets authored outside this crate arrive as nested JSON objects.
//! Loading converts them into the typed tree, rejecting anything that is
//! neither a nested object nor a string/number scalar. Key order in the
//! source document is preserved.

use serde_json::Value;

use super::error::TokenTreeError;
use super::node::{Group, Scalar, TokenNode};

impl Group {
    /// Parses a token tree from a JSON document.
    ///
    /// The document root must be an object. Booleans, arrays, and nulls are
    /// not representable as token values and are rejected with the path of
    /// the offending leaf.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mm_primitives::Group;
    ///
    /// let tokens = Group::from_json(r##"{"palette": {"primary": "#FE5200"}}"##).unwrap();
    /// assert_eq!(tokens.leaf_count(), 1);
    /// ```
    pub fn from_json(source: &str) -> Result<Group, TokenTreeError> {
        let value: Value = serde_json::from_str(source).map_err(|e| TokenTreeError::Parse {
            message: e.to_string(),
        })?;

        match node_from_value(&value, "")? {
            TokenNode::Group(group) => Ok(group),
            TokenNode::Value(_) => Err(TokenTreeError::UnsupportedValue {
                path: String::new(),
                found: "a bare scalar at the document root",
            }),
        }
    }
}

fn node_from_value(value: &Value, path: &str) -> Result<TokenNode, TokenTreeError> {
    match value {
        Value::Object(map) => {
            let mut group = Group::new();
            for (key, child) in map {
                let child_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", path, key)
                };
                group = group.add(key, node_from_value(child, &child_path)?);
            }
            Ok(TokenNode::Group(group))
        }
        Value::String(s) => Ok(TokenNode::Value(Scalar::Text(s.clone()))),
        Value::Number(n) => Ok(TokenNode::Value(Scalar::Number(n.as_f64().unwrap_or(0.0)))),
        Value::Bool(_) => Err(unsupported(path, "boolean")),
        Value::Array(_) => Err(unsupported(path, "array")),
        Value::Null => Err(unsupported(path, "null")),
    }
}

fn unsupported(path: &str, found: &'static str) -> TokenTreeError {
    TokenTreeError::UnsupportedValue {
        path: path.to_string(),
        found,
    }
}
