//!
//! pathtree: dot-path addressed access to nested string-keyed maps.
//!
//! Hierarchical data stores and document deserializers often hand back maps
//! of maps. This crate lets callers read, write and project such structures
//! with a single dotted path instead of descending level by level.
//!
//! ## Core Concepts
//!
//! * **Composite maps (`tree::CompositeMap`)**: string-keyed maps whose values are leaves or further maps.
//! * **Values (`tree::Value`)**: the tagged union stored in a composite map. Lists are opaque leaves.
//! * **Paths (`path::Path`)**: dotted strings such as `"a.b.c"`. The empty string addresses nothing.
//! * **Path trees (`tree::PathTree`)**: a wrapper owning one composite map, exposing get, set and filter.
//! * **Write policy (`tree::WritePolicy`)**: whether a write may replace a leaf that sits where a map is needed.

pub mod path;
pub mod tree;

pub use path::{Component, Path, PathError};
pub use tree::{CompositeMap, PathTree, TreeError, Value, WritePolicy};

/// Result type used throughout the pathtree library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the pathtree library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured path errors from the path module
    #[error(transparent)]
    Path(path::PathError),

    /// Structured tree errors from the tree module
    #[error(transparent)]
    Tree(tree::TreeError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Path(_) => "path",
            Error::Tree(_) => "tree",
            Error::Io(_) => "io",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error indicates a value was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Tree(tree_err) => tree_err.is_not_found_error(),
            _ => false,
        }
    }

    /// Check if this error is type-related.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Tree(tree_err) => tree_err.is_type_error(),
            _ => false,
        }
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }

    /// Check if this error came from JSON (de)serialization.
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, Error::Serialize(_))
    }
}
