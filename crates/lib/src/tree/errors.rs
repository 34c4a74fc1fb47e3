//! Error types for path tree operations.
//!
//! Reads and filters never fail; these errors come from writes that meet a
//! leaf where a nested map is needed, and from typed access helpers.

use thiserror::Error;

/// Structured error types for path tree operations.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    /// A write needed to descend through a value that is not a map
    #[error("Cannot write through '{path}': found {found} where a map is required")]
    PathThroughLeaf { path: String, found: String },

    /// Type mismatch during a typed conversion
    #[error("Type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// Nothing is stored at the requested path
    #[error("No value at path: {path}")]
    NotFound { path: String },
}

impl TreeError {
    /// Check if this error is related to type mismatches
    pub fn is_type_error(&self) -> bool {
        matches!(
            self,
            TreeError::TypeMismatch { .. } | TreeError::PathThroughLeaf { .. }
        )
    }

    /// Check if this error indicates a missing value
    pub fn is_not_found_error(&self) -> bool {
        matches!(self, TreeError::NotFound { .. })
    }

    /// Get the path if this is a path-related error
    pub fn path(&self) -> Option<&str> {
        match self {
            TreeError::PathThroughLeaf { path, .. } | TreeError::NotFound { path } => Some(path),
            TreeError::TypeMismatch { .. } => None,
        }
    }
}

// Conversion from TreeError to the main Error type
impl From<TreeError> for crate::Error {
    fn from(err: TreeError) -> Self {
        crate::Error::Tree(err)
    }
}
