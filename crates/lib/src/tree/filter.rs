//! Projection of a composite map onto a set of paths.

use super::{resolve::resolve, value::CompositeMap, write::overwrite};
use crate::path::Path;

/// Builds a new map holding only the values found at `paths`.
///
/// Each resolvable path is copied to the same location in the result, along
/// with the maps needed to reach it. A path naming a nested map copies the
/// whole subtree. Paths that do not resolve are skipped.
pub(crate) fn project<I, P>(source: &CompositeMap, paths: I) -> CompositeMap
where
    I: IntoIterator<Item = P>,
    P: Into<Path>,
{
    let mut projected = CompositeMap::new();

    for raw in paths {
        let path: Path = raw.into();
        let segments: Vec<&str> = path.segments().collect();

        let Some(value) = resolve(source, &segments) else {
            tracing::debug!(path = %path, "Skipping path absent from source");
            continue;
        };

        // The projection mirrors the source, so no leaf blocks the copy.
        overwrite(&mut projected, &segments, value.clone());
    }

    projected
}
