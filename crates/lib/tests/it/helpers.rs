use pathtree::{CompositeMap, PathTree, Value};

/// Builds a nested map value from `(key, value)` pairs
pub fn map_of(entries: &[(&str, Value)]) -> Value {
    Value::Map(
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect(),
    )
}

/// The composite map used throughout the tests:
///
/// `{"1":{"1":11,"2":12},"2":{"1":21,"2":22},"3":{"1":{"1":{"1":"value"}}}}`
pub fn example_map() -> CompositeMap {
    CompositeMap::from([
        (
            "1".to_string(),
            map_of(&[("1", Value::Int(11)), ("2", Value::Int(12))]),
        ),
        (
            "2".to_string(),
            map_of(&[("1", Value::Int(21)), ("2", Value::Int(22))]),
        ),
        (
            "3".to_string(),
            map_of(&[("1", map_of(&[("1", map_of(&[("1", Value::from("value"))]))]))]),
        ),
    ])
}

/// A tree wrapping [`example_map`]
pub fn example_tree() -> PathTree {
    PathTree::from_map(example_map())
}

/// The projection of [`example_map`] onto `["1.2", "3"]`
pub fn example_projection() -> CompositeMap {
    CompositeMap::from([
        ("1".to_string(), map_of(&[("2", Value::Int(12))])),
        (
            "3".to_string(),
            map_of(&[("1", map_of(&[("1", map_of(&[("1", Value::from("value"))]))]))]),
        ),
    ])
}

/// Parses a JSON object literal into a composite map
pub fn json_map(json: &str) -> CompositeMap {
    serde_json::from_str(json).expect("test JSON should be an object")
}
