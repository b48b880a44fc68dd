//! Integration tests for loading graph files from disk
//!
//! Each test writes its fixture into a temporary directory, loads it through
//! the public API and queries the resulting graph.

use social_graph_core::{is_connected, LoadError, MalformedData, SocialGraph};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_integration_load_and_query() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(&temp_dir, "friends.txt", "3\n1 2\n2 3\n4 5\n");

    let graph = SocialGraph::from_path(&path).unwrap();

    assert_eq!(graph.neighbors(2), vec![1, 3]);
    assert!(is_connected(&graph, 1, 3), "1-2-3 should connect");
    assert!(!is_connected(&graph, 1, 4), "separate components");
    assert!(!graph.exists(99));
}

#[test]
fn test_integration_empty_graph() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(&temp_dir, "empty.txt", "0\n");

    let graph = SocialGraph::from_path(&path).unwrap();

    assert!(graph.is_empty());
    assert!((0..10).all(|id| !graph.exists(id)));
}

#[test]
fn test_integration_malformed_token() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(&temp_dir, "bad.txt", "2\n1 2\nabc 3\n");

    let err = SocialGraph::from_path(&path).unwrap_err();

    assert!(matches!(
        err,
        LoadError::Malformed(MalformedData::InvalidInteger { line: 3, .. })
    ));
}

#[test]
fn test_integration_truncated_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(&temp_dir, "short.txt", "3\n1 2\n2 3\n");

    let err = SocialGraph::from_path(&path).unwrap_err();

    assert!(err.is_malformed());
    assert_eq!(err.to_string(), "malformed graph data: expected 3 friendship pairs, found 2");
}

#[test]
fn test_integration_missing_file() {
    let temp_dir = TempDir::new().unwrap();

    let err = SocialGraph::from_path(&temp_dir.path().join("missing.txt")).unwrap_err();

    assert!(matches!(err, LoadError::Io(_)));
    assert!(!err.is_malformed());
}

#[test]
fn test_integration_reload_after_failure() {
    let temp_dir = TempDir::new().unwrap();
    let good = write_fixture(&temp_dir, "good.txt", "2\n1 2\n3 1\n");
    let bad = write_fixture(&temp_dir, "bad.txt", "5\n8 9\n");

    let mut graph = SocialGraph::new();
    graph.load_path(&good).unwrap();
    assert!(graph.load_path(&bad).is_err());

    // The earlier graph survives the failed load
    assert_eq!(graph.neighbors(1), vec![2, 3]);
    assert!(!graph.exists(8));
}

#[test]
fn test_integration_friend_list_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(&temp_dir, "friends.txt", "3\n7 2\n7 9\n7 4\n");

    let graph = SocialGraph::from_path(&path).unwrap();
    let json = serde_json::to_value(graph.friend_list(7).unwrap()).unwrap();

    assert_eq!(json, serde_json::json!({ "person": 7, "friends": [2, 4, 9] }));
}
