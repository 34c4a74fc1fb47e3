//! Path types for dot-addressed access into composite maps.
//!
//! A [`Path`] is an ordered sequence of key segments whose textual form joins
//! the segments with `.`. Parsing never fails: every `.` separates two
//! segments, so `"a..b"` addresses the key `""` between `a` and `b`. Only the
//! empty string yields a path with no segments, and such a path never
//! addresses anything.
//!
//! Keys that themselves contain `.` cannot be addressed. [`Component`] rejects
//! them when a path is built programmatically.
//!
//! # Usage
//!
//! ```rust
//! use pathtree::path::{Component, Path};
//!
//! // Parse from a dotted string
//! let path = Path::parse("user.profile.name");
//! assert_eq!(path.segments().collect::<Vec<_>>(), vec!["user", "profile", "name"]);
//!
//! // Build incrementally from validated components
//! let built = Path::new()
//!     .push(Component::new("user")?)
//!     .push(Component::new("profile")?)
//!     .push(Component::new("name")?);
//! assert_eq!(built, path);
//! # Ok::<(), pathtree::path::PathError>(())
//! ```

use std::{convert::Infallible, fmt, str::FromStr};

use thiserror::Error;

/// The character separating segments in the textual form of a path.
pub const SEPARATOR: char = '.';

/// Error type for path validation failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    /// Invalid component: components cannot contain the separator.
    #[error("Invalid component '{component}': {reason}")]
    InvalidComponent { component: String, reason: String },
}

impl PathError {
    /// Get the offending component.
    pub fn component(&self) -> &str {
        match self {
            PathError::InvalidComponent { component, .. } => component,
        }
    }
}

impl From<PathError> for crate::Error {
    fn from(err: PathError) -> Self {
        crate::Error::Path(err)
    }
}

/// A single validated path segment.
///
/// # Examples
///
/// ```rust
/// # use pathtree::path::Component;
/// assert!(Component::new("user").is_ok());
/// assert!(Component::new("").is_ok());
/// assert!(Component::new("user.name").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Component {
    inner: String,
}

impl Component {
    /// Creates a new component from a string.
    ///
    /// # Errors
    /// Returns an error if the component contains the separator.
    pub fn new(s: impl Into<String>) -> Result<Self, PathError> {
        let s = s.into();

        if s.contains(SEPARATOR) {
            return Err(PathError::InvalidComponent {
                component: s,
                reason: "components cannot contain dots".to_string(),
            });
        }

        Ok(Component { inner: s })
    }

    /// Returns the component as a string slice.
    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl AsRef<str> for Component {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

impl FromStr for Component {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Component::new(s)
    }
}

impl TryFrom<&str> for Component {
    type Error = PathError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Component::new(s)
    }
}

impl TryFrom<String> for Component {
    type Error = PathError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Component::new(s)
    }
}

/// An owned path into a composite map.
///
/// The path is stored in its textual form alongside its segment count. The
/// count keeps a path of one empty segment apart from the empty path, which
/// share the text `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    inner: String,
    segment_count: usize,
}

fn count_segments(text: &str) -> usize {
    if text.is_empty() {
        0
    } else {
        text.matches(SEPARATOR).count() + 1
    }
}

impl Path {
    /// Creates a new empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a dotted string. Infallible: every `.` is a separator.
    pub fn parse(input: &str) -> Self {
        Self::from(input.to_string())
    }

    /// Builds a path from validated segments.
    ///
    /// Empty segments are kept, so `["", "b"]` addresses `b` under the key `""`.
    ///
    /// # Errors
    /// Returns an error for the first segment that contains the separator.
    pub fn from_segments<I, S>(segments: I) -> Result<Self, PathError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut path = Path::new();
        for segment in segments {
            path = path.push(Component::new(segment)?);
        }
        Ok(path)
    }

    /// Appends a component to the end of this path.
    pub fn push(mut self, component: Component) -> Self {
        if self.segment_count > 0 {
            self.inner.push(SEPARATOR);
        }
        self.inner.push_str(&component.inner);
        self.segment_count += 1;
        self
    }

    /// Joins this path with another path.
    pub fn join(mut self, other: &Path) -> Self {
        if other.segment_count == 0 {
            return self;
        }
        if self.segment_count > 0 {
            self.inner.push(SEPARATOR);
        }
        self.inner.push_str(&other.inner);
        self.segment_count += other.segment_count;
        self
    }

    /// Returns an iterator over the segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.inner.split(SEPARATOR).take(self.segment_count)
    }

    /// Returns the number of segments in the path.
    pub fn len(&self) -> usize {
        self.segment_count
    }

    /// Returns `true` if the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segment_count == 0
    }

    /// Returns the parent path, or `None` for single-segment and empty paths.
    pub fn parent(&self) -> Option<Path> {
        if self.segment_count < 2 {
            return None;
        }
        let last = self.inner.rfind(SEPARATOR)?;
        Some(Path {
            inner: self.inner[..last].to_string(),
            segment_count: self.segment_count - 1,
        })
    }

    /// Returns the last segment, or `None` if the path is empty.
    pub fn last(&self) -> Option<&str> {
        self.segments().last()
    }

    /// Returns the path as a string slice.
    ///
    /// A path holding a single empty segment reads as `""`, which parses back
    /// to the empty path. Pass the `Path` itself to keep that segment.
    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl FromStr for Path {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for Path {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<&String> for Path {
    fn from(s: &String) -> Self {
        Self::parse(s)
    }
}

impl From<String> for Path {
    fn from(inner: String) -> Self {
        let segment_count = count_segments(&inner);
        Self {
            inner,
            segment_count,
        }
    }
}

impl From<&Path> for Path {
    fn from(path: &Path) -> Self {
        path.clone()
    }
}

impl From<Component> for Path {
    fn from(component: Component) -> Self {
        Path::new().push(component)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "(empty path)")
        } else {
            f.write_str(&self.inner)
        }
    }
}
