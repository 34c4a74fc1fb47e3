//! Filter tests: projection onto a set of paths

use pathtree::{CompositeMap, PathTree, Value, WritePolicy, tree};

use crate::helpers::*;

#[test]
fn test_filter_example_projection() {
    let tree = example_tree();

    let filtered = tree.filter(["1.2", "3", "badPath"]);
    assert_eq!(filtered.as_map(), &example_projection());
}

#[test]
fn test_filter_ignores_invalid_paths() {
    let tree = example_tree();

    let filtered = tree.filter(["1.2", "3", "4.1.2.3", "1.1.1", ""]);
    assert_eq!(filtered.into_map(), example_projection());
}

#[test]
fn test_filter_parent_equals_all_leaves() {
    let tree = example_tree();

    let parent = tree.filter(["1"]);
    let leaves = tree.filter(["1.1", "1.2"]);
    assert_eq!(parent, leaves);
}

#[test]
fn test_filter_merges_shared_ancestor() {
    let source = json_map(r#"{"a": {"b": 1, "c": 2, "d": 3}, "e": 4}"#);

    let filtered = tree::filter_map(&source, ["a.b", "a.c"]);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered, json_map(r#"{"a": {"b": 1, "c": 2}}"#));
}

#[test]
fn test_filter_is_idempotent() {
    let tree = example_tree();
    let paths = ["1.2", "3.1", "2", "missing.path"];

    let once = tree.filter(paths);
    let twice = once.filter(paths);
    assert_eq!(once, twice);
}

#[test]
fn test_filter_order_independent() {
    let tree = example_tree();

    let forward = tree.filter(["3", "3.1.1", "1.1", "1"]);
    let backward = tree.filter(["1", "1.1", "3.1.1", "3"]);
    assert_eq!(forward, backward);
}

#[test]
fn test_filter_copies_subtree() {
    let mut tree = example_tree();

    let mut filtered = tree.filter(["3.1"]);
    filtered.set("3.1.1.1", "changed").unwrap();
    tree.set("3.1.1.2", "added").unwrap();

    // Source and projection do not share structure
    assert_eq!(tree.get_as::<&str>("3.1.1.1"), Some("value"));
    assert!(filtered.get("3.1.1.2").is_none());
}

#[test]
fn test_filter_only_contains_requested_closure() {
    let tree = example_tree();

    let filtered = tree.filter(["2.2"]);
    assert_eq!(filtered.get("2"), Some(&map_of(&[("2", Value::Int(22))])));
    assert!(filtered.get("1").is_none());
    assert!(filtered.get("3").is_none());
    assert!(filtered.get("2.1").is_none());
}

#[test]
fn test_filter_empty_inputs() {
    let tree = example_tree();
    assert!(tree.filter(Vec::<&str>::new()).is_empty());

    let empty = PathTree::new();
    assert!(empty.filter(["1", "1.1"]).is_empty());
    assert!(tree::filter_map(&CompositeMap::new(), ["a"]).is_empty());
}

#[test]
fn test_filter_keeps_write_policy() {
    let tree = example_tree().with_policy(WritePolicy::Overwrite);

    let mut filtered = tree.filter(["1.1"]);
    assert_eq!(filtered.policy(), WritePolicy::Overwrite);
    filtered.set("1.1.deeper", 1).unwrap();
    assert_eq!(filtered.get_as::<i64>("1.1.deeper"), Some(1));
}
