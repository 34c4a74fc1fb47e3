//! JSON serialization tests for PathTree and Value

use pathtree::{PathTree, Value};

use crate::helpers::*;

#[test]
fn test_tree_json_round_trip() {
    let tree = example_tree();

    let json = tree.to_json().unwrap();
    let parsed = PathTree::from_json(&json).unwrap();
    assert_eq!(parsed, tree);
}

#[test]
fn test_tree_serializes_as_plain_object() {
    let tree = PathTree::new()
        .with("user.name", "Alice")
        .and_then(|t| t.with("user.age", 30))
        .unwrap();

    let json: serde_json::Value = serde_json::from_str(&tree.to_json_pretty().unwrap()).unwrap();
    assert_eq!(json, serde_json::json!({"user": {"name": "Alice", "age": 30}}));
}

#[test]
fn test_from_json_requires_object() {
    for input in ["[1, 2]", "42", "\"text\"", "null", "{not json"] {
        let err = PathTree::from_json(input).unwrap_err();
        assert!(err.is_serialization_error(), "input {input}");
    }
}

#[test]
fn test_json_values_map_to_variants() {
    let tree = PathTree::from_json(
        r#"{"n": null, "b": false, "i": -3, "f": 0.5, "s": "x", "l": [1, [2]], "m": {}}"#,
    )
    .unwrap();

    assert_eq!(tree.get("n"), Some(&Value::Null));
    assert_eq!(tree.get("b"), Some(&Value::Bool(false)));
    assert_eq!(tree.get("i"), Some(&Value::Int(-3)));
    assert_eq!(tree.get("f"), Some(&Value::Float(0.5)));
    assert_eq!(tree.get("s"), Some(&Value::from("x")));
    assert_eq!(
        tree.get("l"),
        Some(&Value::List(vec![
            Value::Int(1),
            Value::List(vec![Value::Int(2)])
        ]))
    );
    assert_eq!(tree.get("m"), Some(&Value::empty_map()));
}

#[test]
fn test_serde_json_value_conversions() {
    let json = serde_json::json!({"a": {"b": [true, 1.25]}});

    let value = Value::from(json.clone());
    assert_eq!(serde_json::Value::from(value), json);
}

#[test]
fn test_display_is_stable() {
    let tree = example_tree();
    assert_eq!(
        tree.to_string(),
        "{1: {1: 11, 2: 12}, 2: {1: 21, 2: 22}, 3: {1: {1: {1: value}}}}"
    );
}
