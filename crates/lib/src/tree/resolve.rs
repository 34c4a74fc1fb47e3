//! Path resolution: reading a value out of a composite map.
//!
//! Resolution never fails loudly. A missing key, an empty path, or a leaf
//! sitting where a nested map is needed all resolve to `None`.

use super::value::{CompositeMap, Value};

/// Resolves `segments` against `map`.
pub(crate) fn resolve<'a>(map: &'a CompositeMap, segments: &[&str]) -> Option<&'a Value> {
    match segments {
        [] => None,
        [key] => map.get(*key),
        [key, rest @ ..] => match map.get(*key)? {
            Value::Map(child) => resolve(child, rest),
            leaf => {
                tracing::trace!(
                    key = *key,
                    found = leaf.type_name(),
                    "Path descends through a leaf"
                );
                None
            }
        },
    }
}

/// Mutable counterpart of [`resolve`].
pub(crate) fn resolve_mut<'a>(
    map: &'a mut CompositeMap,
    segments: &[&str],
) -> Option<&'a mut Value> {
    match segments {
        [] => None,
        [key] => map.get_mut(*key),
        [key, rest @ ..] => match map.get_mut(*key)? {
            Value::Map(child) => resolve_mut(child, rest),
            _ => None,
        },
    }
}
