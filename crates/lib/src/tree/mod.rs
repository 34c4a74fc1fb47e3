//! Dot-path addressed access to nested maps.
//!
//! [`PathTree`] wraps a [`CompositeMap`] and lets callers read, write and
//! project it with dotted paths such as `"user.profile.name"` instead of
//! descending one level at a time. The same algorithms are available as free
//! functions ([`get`], [`get_mut`], [`set`], [`filter_map`]) for callers that
//! hold a bare map, e.g. one produced by a deserializer.
//!
//! # Usage
//!
//! ```
//! use pathtree::PathTree;
//!
//! let mut tree = PathTree::new();
//! tree.set("user.profile.name", "Alice")?;
//! tree.set("user.profile.age", 30)?;
//! tree.set("user.id", 7)?;
//!
//! assert_eq!(tree.get_as::<&str>("user.profile.name"), Some("Alice"));
//! assert!(tree.get("user.profile.email").is_none());
//!
//! let profile = tree.filter(["user.profile"]);
//! assert!(profile.contains("user.profile.age"));
//! assert!(!profile.contains("user.id"));
//! # Ok::<(), pathtree::Error>(())
//! ```
//!
//! # Sharing the underlying map
//!
//! [`PathTree::as_map_mut`] hands out the tree's own map: edits made through
//! it are edits to the tree. [`PathTree::to_map`] copies and
//! [`PathTree::into_map`] gives the map back to the caller.
//!
//! # Concurrency
//!
//! Nothing here locks. A tree shared across threads must be synchronized by
//! the caller.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::path::Path;

pub mod config;
pub mod errors;
mod filter;
mod resolve;
pub mod value;
mod write;

pub use config::WritePolicy;
pub use errors::TreeError;
pub use value::{CompositeMap, Value};

/// Reads the value at `path` in `map`.
///
/// Returns `None` for an empty path, a missing key, or a path that descends
/// through a leaf.
pub fn get<'a>(map: &'a CompositeMap, path: impl Into<Path>) -> Option<&'a Value> {
    let path: Path = path.into();
    let segments: Vec<&str> = path.segments().collect();
    resolve::resolve(map, &segments)
}

/// Mutable counterpart of [`get`].
pub fn get_mut<'a>(map: &'a mut CompositeMap, path: impl Into<Path>) -> Option<&'a mut Value> {
    let path: Path = path.into();
    let segments: Vec<&str> = path.segments().collect();
    resolve::resolve_mut(map, &segments)
}

/// Writes `value` at `path` in `map`, returning the value it replaced.
///
/// Missing intermediate maps are created. An empty path is a no-op. A leaf
/// on the way down is handled according to `policy`.
pub fn set(
    map: &mut CompositeMap,
    path: impl Into<Path>,
    value: impl Into<Value>,
    policy: WritePolicy,
) -> Result<Option<Value>, TreeError> {
    let path: Path = path.into();
    let segments: Vec<&str> = path.segments().collect();
    write::insert(map, &segments, value.into(), policy)
}

/// Returns a new map filtered down to the values (and nested maps) at
/// `paths`. Paths that do not resolve are ignored.
///
/// ```
/// # use pathtree::{CompositeMap, tree::filter_map};
/// let source: CompositeMap = serde_json::from_str(r#"{"a": {"b": 1, "c": 2}, "d": 3}"#)?;
/// let filtered = filter_map(&source, ["a.b", "missing"]);
///
/// let expected: CompositeMap = serde_json::from_str(r#"{"a": {"b": 1}}"#)?;
/// assert_eq!(filtered, expected);
/// # Ok::<(), serde_json::Error>(())
/// ```
pub fn filter_map<I, P>(map: &CompositeMap, paths: I) -> CompositeMap
where
    I: IntoIterator<Item = P>,
    P: Into<Path>,
{
    filter::project(map, paths)
}

/// A composite map addressed by dotted paths.
///
/// # Examples
///
/// ```
/// # use pathtree::{PathTree, WritePolicy};
/// let mut tree = PathTree::new();
/// tree.set("a", 1)?;
///
/// // Strict trees refuse to write through a leaf
/// assert!(tree.set("a.b", 2).is_err());
///
/// // Overwriting trees replace the leaf with a map
/// tree.set_policy(WritePolicy::Overwrite);
/// tree.set("a.b", 2)?;
/// assert_eq!(tree.get_as::<i64>("a.b"), Some(2));
/// # Ok::<(), pathtree::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathTree {
    root: CompositeMap,
    policy: WritePolicy,
}

impl PathTree {
    /// Creates a new empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tree that adopts `map` as its root
    pub fn from_map(map: CompositeMap) -> Self {
        Self {
            root: map,
            policy: WritePolicy::default(),
        }
    }

    /// Builder method to set the write policy
    pub fn with_policy(mut self, policy: WritePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the write policy used by [`PathTree::set`]
    pub fn policy(&self) -> WritePolicy {
        self.policy
    }

    /// Changes the write policy for subsequent writes
    pub fn set_policy(&mut self, policy: WritePolicy) {
        self.policy = policy;
    }

    /// Returns the underlying map
    pub fn as_map(&self) -> &CompositeMap {
        &self.root
    }

    /// Returns the underlying map for in-place edits.
    ///
    /// This aliases the tree's state; no copy is made.
    pub fn as_map_mut(&mut self) -> &mut CompositeMap {
        &mut self.root
    }

    /// Returns a deep copy of the underlying map
    pub fn to_map(&self) -> CompositeMap {
        self.root.clone()
    }

    /// Consumes the tree and returns the underlying map
    pub fn into_map(self) -> CompositeMap {
        self.root
    }

    /// Returns the number of top-level keys
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Returns true if the root map is empty
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Returns an iterator over the top-level entries
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.root.iter()
    }

    /// Gets the value at `path`
    pub fn get(&self, path: impl Into<Path>) -> Option<&Value> {
        get(&self.root, path)
    }

    /// Gets a mutable reference to the value at `path`
    pub fn get_mut(&mut self, path: impl Into<Path>) -> Option<&mut Value> {
        get_mut(&mut self.root, path)
    }

    /// Gets the value at `path` converted with `TryFrom`.
    ///
    /// Returns `None` if nothing is stored there or the stored value has a
    /// different type. No coercion is attempted.
    ///
    /// ```
    /// # use pathtree::PathTree;
    /// let mut tree = PathTree::new();
    /// tree.set("count", 5)?;
    ///
    /// assert_eq!(tree.get_as::<i64>("count"), Some(5));
    /// assert_eq!(tree.get_as::<String>("count"), None);
    /// # Ok::<(), pathtree::Error>(())
    /// ```
    pub fn get_as<'a, T>(&'a self, path: impl Into<Path>) -> Option<T>
    where
        T: TryFrom<&'a Value, Error = TreeError>,
    {
        T::try_from(self.get(path)?).ok()
    }

    /// Gets the value at `path`, or a [`TreeError::NotFound`] naming it
    pub fn require(&self, path: impl Into<Path>) -> Result<&Value, TreeError> {
        let path: Path = path.into();
        let segments: Vec<&str> = path.segments().collect();
        resolve::resolve(&self.root, &segments).ok_or_else(|| TreeError::NotFound {
            path: path.as_str().to_string(),
        })
    }

    /// Returns true if a value is stored at `path`
    pub fn contains(&self, path: impl Into<Path>) -> bool {
        self.get(path).is_some()
    }

    /// Sets `value` at `path`, returning the value it replaced.
    ///
    /// Intermediate maps are created as needed and an empty path does
    /// nothing. Writing through a leaf follows the tree's [`WritePolicy`].
    pub fn set(
        &mut self,
        path: impl Into<Path>,
        value: impl Into<Value>,
    ) -> crate::Result<Option<Value>> {
        Ok(set(&mut self.root, path, value, self.policy)?)
    }

    /// Builder method to set a value and return self
    pub fn with(mut self, path: impl Into<Path>, value: impl Into<Value>) -> crate::Result<Self> {
        self.set(path, value)?;
        Ok(self)
    }

    /// Removes the value at `path`, returning it.
    ///
    /// Maps that become empty are kept.
    pub fn remove(&mut self, path: impl Into<Path>) -> Option<Value> {
        let path: Path = path.into();
        let segments: Vec<&str> = path.segments().collect();
        write::remove(&mut self.root, &segments)
    }

    /// Returns a new tree with only the values at `paths`.
    ///
    /// A path to a nested map brings its whole subtree. Paths that do not
    /// resolve are ignored. The new tree keeps this tree's write policy.
    pub fn filter<I, P>(&self, paths: I) -> PathTree
    where
        I: IntoIterator<Item = P>,
        P: Into<Path>,
    {
        PathTree::from_map(filter_map(&self.root, paths)).with_policy(self.policy)
    }

    /// Parses a tree from a JSON object
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the tree as compact JSON
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the tree as pretty-printed JSON
    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<CompositeMap> for PathTree {
    fn from(map: CompositeMap) -> Self {
        PathTree::from_map(map)
    }
}

impl From<PathTree> for CompositeMap {
    fn from(tree: PathTree) -> Self {
        tree.into_map()
    }
}

impl From<PathTree> for Value {
    fn from(tree: PathTree) -> Self {
        Value::Map(tree.into_map())
    }
}

impl FromIterator<(String, Value)> for PathTree {
    /// Places each value at its key read as a path. Later pairs that would
    /// need to write through an earlier leaf replace it.
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        let mut root = CompositeMap::new();
        for (path, value) in iter {
            let path = Path::from(path);
            let segments: Vec<&str> = path.segments().collect();
            write::overwrite(&mut root, &segments, value);
        }
        PathTree::from_map(root)
    }
}

impl fmt::Display for PathTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        value::fmt_map(&self.root, f)
    }
}

// A tree serializes as its root map; the policy is runtime configuration.
impl Serialize for PathTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.root.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PathTree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        CompositeMap::deserialize(deserializer).map(PathTree::from_map)
    }
}
