//! Path writes: inserting a value into a composite map in place.

use super::{
    TreeError,
    config::WritePolicy,
    value::{CompositeMap, Value},
};

/// Inserts `value` at `segments`, creating missing intermediate maps.
///
/// Returns the value previously stored at that location. An empty path is a
/// no-op. A leaf met on the way down is handled per `policy`; under
/// [`WritePolicy::Strict`] nothing has been created when the error is
/// returned, because a leaf can only be found before the first new map.
pub(crate) fn insert(
    map: &mut CompositeMap,
    segments: &[&str],
    value: Value,
    policy: WritePolicy,
) -> Result<Option<Value>, TreeError> {
    match policy {
        WritePolicy::Strict => insert_strict(map, segments, 0, value),
        WritePolicy::Overwrite => Ok(overwrite(map, segments, value)),
    }
}

fn insert_strict(
    map: &mut CompositeMap,
    segments: &[&str],
    depth: usize,
    value: Value,
) -> Result<Option<Value>, TreeError> {
    match &segments[depth..] {
        [] => Ok(None),
        [key] => Ok(map.insert(key.to_string(), value)),
        [key, ..] => match map.entry(key.to_string()).or_insert_with(Value::empty_map) {
            Value::Map(child) => insert_strict(child, segments, depth + 1, value),
            leaf => Err(TreeError::PathThroughLeaf {
                path: segments[..=depth].join("."),
                found: leaf.type_name().to_string(),
            }),
        },
    }
}

/// Inserts `value` at `segments`, replacing any leaf on the way down with a
/// new map. Returns the value previously stored at that location.
pub(crate) fn overwrite(map: &mut CompositeMap, segments: &[&str], value: Value) -> Option<Value> {
    match segments {
        [] => None,
        [key] => map.insert(key.to_string(), value),
        [key, rest @ ..] => match map.entry(key.to_string()).or_insert_with(Value::empty_map) {
            Value::Map(child) => overwrite(child, rest, value),
            leaf => {
                tracing::debug!(
                    key = *key,
                    found = leaf.type_name(),
                    "Replacing leaf with a map to continue write"
                );
                let mut child = CompositeMap::new();
                overwrite(&mut child, rest, value);
                *leaf = Value::Map(child);
                None
            }
        },
    }
}

/// Removes the value at `segments`, leaving any emptied parents in place.
pub(crate) fn remove(map: &mut CompositeMap, segments: &[&str]) -> Option<Value> {
    match segments {
        [] => None,
        [key] => map.remove(*key),
        [key, rest @ ..] => match map.get_mut(*key)? {
            Value::Map(child) => remove(child, rest),
            _ => None,
        },
    }
}
