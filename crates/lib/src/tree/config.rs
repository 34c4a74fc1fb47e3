//! Write configuration for path trees.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// What a write does when an intermediate segment holds a leaf.
///
/// Absent intermediates are always created. This policy only decides the
/// case where a key along the path exists but is not a map, e.g. writing
/// `a.b` when `a` holds an integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WritePolicy {
    /// Fail with [`TreeError::PathThroughLeaf`](super::TreeError::PathThroughLeaf)
    /// and leave the map untouched.
    #[default]
    Strict,
    /// Replace the leaf with an empty map and keep descending.
    Overwrite,
}

impl WritePolicy {
    /// Returns the lowercase name used in configuration and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            WritePolicy::Strict => "strict",
            WritePolicy::Overwrite => "overwrite",
        }
    }
}

impl fmt::Display for WritePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WritePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(WritePolicy::Strict),
            "overwrite" => Ok(WritePolicy::Overwrite),
            other => Err(format!("unknown write policy '{other}'")),
        }
    }
}
