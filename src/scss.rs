//! SCSS variable emission.
//!
//! Rendering turns flattened entries into the variable file consumed by the
//! stylesheet build: one `<name>: <value>;` declaration per line, a newline
//! after every declaration, no blank lines, no commentary. Writing is
//! whole-file and atomic: the text lands in a temporary file next to the
//! destination and is renamed into place, so a failed build never leaves a
//! truncated stylesheet behind.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::flatten::{flatten, FlatEntry};
use crate::token::{Group, TokenTreeError};

/// Error returned when building the SCSS output fails.
#[derive(Debug)]
pub enum BuildError {
    /// The token tree failed validation during flattening
    Tree(TokenTreeError),
    /// Writing the output file failed
    Io(std::io::Error),
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::Tree(err) => write!(f, "{}", err),
            BuildError::Io(err) => write!(f, "failed to write output: {}", err),
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BuildError::Tree(err) => Some(err),
            BuildError::Io(err) => Some(err),
        }
    }
}

impl From<TokenTreeError> for BuildError {
    fn from(err: TokenTreeError) -> Self {
        BuildError::Tree(err)
    }
}

impl From<std::io::Error> for BuildError {
    fn from(err: std::io::Error) -> Self {
        BuildError::Io(err)
    }
}

/// Renders flattened entries as SCSS variable declarations.
///
/// # Example
///
/// ```rust
/// use mm_primitives::{flatten, scss, Group};
///
/// let tokens = Group::new().add("gap", Group::new().add("normal", "1em"));
/// let entries = flatten(&tokens).unwrap();
/// assert_eq!(scss::render(&entries), "$gap-normal: 1em;\n");
/// ```
pub fn render(entries: &[FlatEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&entry.to_string());
        out.push('\n');
    }
    out
}

/// Flattens a token tree and writes the rendered SCSS to `path`.
///
/// Parent directories are created as needed. The write goes through a
/// temporary file in the destination directory followed by a rename, so the
/// destination is either untouched or complete.
pub fn write(tokens: &Group, path: &Path) -> Result<(), BuildError> {
    let entries = flatten(tokens)?;
    let text = render(&entries);

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent)?;
            parent
        }
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(text.as_bytes())?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_one_declaration_per_line() {
        let tokens = Group::new()
            .add("a", "1")
            .add("b", Group::new().add("c", "2"));
        let text = render(&flatten(&tokens).unwrap());

        assert_eq!(text, "$a: 1;\n$b-c: 2;\n");
    }

    #[test]
    fn test_render_empty_tree_is_empty_text() {
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn test_render_has_no_blank_lines_and_trailing_newline() {
        let text = render(&flatten(crate::primitives()).unwrap());

        assert!(text.ends_with(";\n"));
        assert!(!text.contains("\n\n"));
        assert_eq!(text.lines().count(), 27);
    }

    #[test]
    fn test_build_error_from_tree_error() {
        let tokens = Group::new().add("a", "1").add("a", "2");
        let dir = tempfile::tempdir().unwrap();
        let err = write(&tokens, &dir.path().join("styles.scss")).unwrap_err();

        assert!(matches!(err, BuildError::Tree(_)));
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("dist").join("styles.scss");

        let tokens = Group::new().add("gap", "1em");
        write(&tokens, &dest).unwrap();

        assert_eq!(std::fs::read_to_string(&dest).unwrap(), "$gap: 1em;\n");
    }

    #[test]
    fn test_write_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("styles.scss");
        std::fs::write(&dest, "stale contents").unwrap();

        let tokens = Group::new().add("gap", "1em");
        write(&tokens, &dest).unwrap();

        assert_eq!(std::fs::read_to_string(&dest).unwrap(), "$gap: 1em;\n");
    }
}
