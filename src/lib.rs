//! Design token primitives with flattened SCSS variable generation.
//!
//! This crate is the source of truth for a design system's values. Tokens
//! live in a typed, ordered tree ([`Group`]) and flow through a pure
//! flattener into namespaced variable declarations:
//!
//! ```text
//! token tree  ─►  flatten  ─►  $palette-functional-primary: #FE5200;
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use mm_primitives::{flatten, primitives, scss};
//!
//! // The canonical token set, flattened to SCSS declarations.
//! let entries = flatten(primitives()).unwrap();
//! let text = scss::render(&entries);
//!
//! assert!(text.starts_with("$palette-functional-primary: #FE5200;\n"));
//! ```
//!
//! Custom trees use the same builder and traversal:
//!
//! ```rust
//! use mm_primitives::{flatten, Group};
//!
//! let tokens = Group::new()
//!     .add("gap", Group::new()
//!         .add("condensed", "0.5em")
//!         .add("normal", "1em"));
//!
//! let entries = flatten(&tokens).unwrap();
//! assert_eq!(entries[0].to_string(), "$gap-condensed: 0.5em;");
//! ```
//!
//! # Guarantees
//!
//! - Flattening is deterministic: same tree, byte-identical output.
//! - Every terminal produces exactly one entry; names never collide as long
//!   as keys avoid the `-` separator.
//! - Output order is the tree's declaration order, depth first. Nothing is
//!   sorted.
//! - Malformed trees (duplicate keys, runaway nesting, non-scalar JSON
//!   leaves) fail with a [`TokenTreeError`] naming the offending path.

pub mod flatten;
pub mod overview;
pub mod preview;
pub mod primitives;
pub mod scss;
pub mod token;
mod util;

pub use flatten::{flatten, flatten_with_prefix, FlatEntry, MAX_DEPTH, ROOT_MARKER};
pub use primitives::primitives;
pub use scss::BuildError;
pub use token::{Group, Scalar, TokenNode, TokenTreeError};
pub use util::{pad_to_width, parse_hex_color, rgb_to_ansi256};
