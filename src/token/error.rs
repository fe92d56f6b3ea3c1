//! Token tree validation errors.

/// Error returned when a token tree is malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenTreeError {
    /// Two entries at the same nesting level share a name
    DuplicateKey { path: String },
    /// Nesting exceeds the supported depth (likely a malformed tree)
    DepthExceeded { path: String, limit: usize },
    /// A leaf holds a value that is neither a group nor a scalar
    UnsupportedValue { path: String, found: &'static str },
    /// The source text could not be parsed at all
    Parse { message: String },
}

impl std::fmt::Display for TokenTreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenTreeError::DuplicateKey { path } => {
                write!(f, "duplicate token key at '{}'", path)
            }
            TokenTreeError::DepthExceeded { path, limit } => {
                write!(
                    f,
                    "malformed token tree: nesting at '{}' exceeds the depth limit of {}",
                    path, limit
                )
            }
            TokenTreeError::UnsupportedValue { path, found } => {
                write!(
                    f,
                    "unsupported token value at '{}': expected a group or scalar, found {}",
                    path, found
                )
            }
            TokenTreeError::Parse { message } => {
                write!(f, "invalid token source: {}", message)
            }
        }
    }
}

impl std::error::Error for TokenTreeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_key_display() {
        let err = TokenTreeError::DuplicateKey {
            path: "$palette-functional".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("duplicate"));
        assert!(msg.contains("$palette-functional"));
    }

    #[test]
    fn test_depth_exceeded_display() {
        let err = TokenTreeError::DepthExceeded {
            path: "$a-b-c".to_string(),
            limit: 64,
        };
        let msg = err.to_string();
        assert!(msg.contains("malformed"));
        assert!(msg.contains("64"));
    }

    #[test]
    fn test_unsupported_value_display() {
        let err = TokenTreeError::UnsupportedValue {
            path: "palette.primary".to_string(),
            found: "boolean",
        };
        let msg = err.to_string();
        assert!(msg.contains("palette.primary"));
        assert!(msg.contains("boolean"));
    }
}
