//! The token tree: typed design values organized into named groups.
//!
//! This module provides:
//!
//! - [`Group`]: An ordered collection of named token nodes with a fluent
//!   builder API
//! - [`TokenNode`]: A single node, either a nested group or a terminal value
//! - [`Scalar`]: A terminal value (opaque text or a number)
//! - [`TokenTreeError`]: Errors from tree validation and loading
//!
//! Trees are authored once with the builder (or loaded from JSON) and read
//! thereafter; nothing in the crate mutates a tree after construction.

mod error;
mod json;
mod node;

pub use error::TokenTreeError;
pub use node::{Group, Scalar, TokenNode};
