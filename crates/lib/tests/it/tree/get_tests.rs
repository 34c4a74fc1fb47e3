//! Read tests: path resolution through PathTree and the free functions

use pathtree::{PathTree, Value, tree};

use crate::helpers::*;

#[test]
fn test_get_example_paths() {
    let tree = example_tree();

    let cases: &[(&str, Option<Value>)] = &[
        ("1.1", Some(Value::Int(11))),
        ("3.1.1.1", Some(Value::from("value"))),
        ("4", None),
        ("3.1.2", None),
        ("", None),
    ];

    for (path, expected) in cases {
        assert_eq!(tree.get(*path), expected.as_ref(), "path {path:?}");
    }
}

#[test]
fn test_get_intermediate_returns_nested_map() {
    let tree = example_tree();

    let expected = map_of(&[("1", Value::Int(11)), ("2", Value::Int(12))]);
    assert_eq!(tree.get("1"), Some(&expected));
}

#[test]
fn test_get_through_leaf_is_not_found() {
    let tree = example_tree();

    // "1.1" holds 11, so nothing lives below it
    assert!(tree.get("1.1.1").is_none());
    assert!(!tree.contains("1.1.1"));
}

#[test]
fn test_get_does_not_index_lists() {
    let tree = PathTree::from_json(r#"{"items": [{"id": 1}]}"#).unwrap();

    assert!(tree.get("items").is_some_and(|v| v.as_list().is_some()));
    assert!(tree.get("items.0").is_none());
    assert!(tree.get("items.0.id").is_none());
}

#[test]
fn test_get_as_requires_exact_type() {
    let tree = example_tree();

    assert_eq!(tree.get_as::<i64>("2.2"), Some(22));
    assert_eq!(tree.get_as::<String>("2.2"), None);
    assert_eq!(tree.get_as::<f64>("2.2"), None);
    assert_eq!(tree.get_as::<String>("3.1.1.1"), Some("value".to_string()));
    assert!(tree.get_as::<&pathtree::CompositeMap>("3.1").is_some());
}

#[test]
fn test_require_names_missing_path() {
    let tree = example_tree();

    assert_eq!(tree.require("1.2").unwrap(), &Value::Int(12));
    let err = tree.require("1.9").unwrap_err();
    assert!(err.is_not_found_error());
    assert_eq!(err.path(), Some("1.9"));
}

#[test]
fn test_get_mut_edits_tree_in_place() {
    let mut tree = example_tree();

    if let Some(value) = tree.get_mut("2.1") {
        *value = Value::Int(210);
    }
    assert_eq!(tree.get_as::<i64>("2.1"), Some(210));
    assert!(tree.get_mut("").is_none());
}

#[test]
fn test_free_get_on_bare_map() {
    let map = example_map();

    assert_eq!(tree::get(&map, "1.2"), Some(&Value::Int(12)));
    assert_eq!(tree::get(&map, "3.1.1.1.1"), None);
    assert_eq!(tree::get(&map, ""), None);
}

#[test]
fn test_get_has_no_side_effects() {
    let tree = example_tree();

    for path in ["9.9.9", "1.1.1", "", "3.1"] {
        let _ = tree.get(path);
    }
    assert_eq!(tree.as_map(), &example_map());
}
