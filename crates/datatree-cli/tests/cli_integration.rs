//! CLI Integration Tests
//!
//! These run the built `datatree` binary over temporary documents.

use std::fs;
use std::path::Path;
use std::process::Command;

use pretty_assertions::assert_eq;
use tempfile::tempdir;

/// Run datatree and return (stdout, stderr, exit code)
fn run_datatree(args: &[&str]) -> (String, String, Option<i32>) {
    let output = Command::new(env!("CARGO_BIN_EXE_datatree"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute datatree");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.code(),
    )
}

fn write(dir: &Path, name: &str, contents: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_cli_merge_json_and_yaml() {
    let dir = tempdir().unwrap();
    let base = write(
        dir.path(),
        "base.json",
        r#"{"db":{"host":"localhost","port":5432},"tags":["a","b"]}"#,
    );
    let prod = write(dir.path(), "prod.yaml", "db:\n  host: db.internal\ntags: [z]\n");

    let (stdout, _stderr, code) = run_datatree(&["merge", &base, &prod]);

    assert_eq!(code, Some(0));
    let merged: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(
        merged,
        serde_json::json!({"db": {"host": "db.internal", "port": 5432}, "tags": ["z"]})
    );
}

#[test]
fn test_cli_merge_pretty() {
    let dir = tempdir().unwrap();
    let a = write(dir.path(), "a.json", r#"{"a":true}"#);

    let (stdout, _stderr, code) = run_datatree(&["merge", "--pretty", &a]);

    assert_eq!(code, Some(0));
    assert_eq!(stdout, "{\n    \"a\": true\n}\n");
}

#[test]
fn test_cli_merge_skips_empty_documents() {
    let dir = tempdir().unwrap();
    let empty = write(dir.path(), "empty.yaml", "");
    let a = write(dir.path(), "a.json", r#"{"a":1}"#);

    let (stdout, _stderr, code) = run_datatree(&["merge", &empty, &a]);

    assert_eq!(code, Some(0));
    assert_eq!(stdout.trim(), r#"{"a":1}"#);
}

#[test]
fn test_cli_get_leaf() {
    let dir = tempdir().unwrap();
    let doc = write(dir.path(), "doc.json", r#"{"two":["zoo",[true]]}"#);

    let (stdout, _stderr, code) = run_datatree(&["get", &doc, "two", "1", "0"]);

    assert_eq!(code, Some(0));
    assert_eq!(stdout.trim(), "true");
}

#[test]
fn test_cli_get_container_is_not_found() {
    let dir = tempdir().unwrap();
    let doc = write(dir.path(), "doc.json", r#"{"one":{"hi":"bye"}}"#);

    let (stdout, stderr, code) = run_datatree(&["get", &doc, "one"]);

    assert_eq!(code, Some(1));
    assert!(stdout.is_empty());
    assert!(stderr.contains("not found: one"));
}

#[test]
fn test_cli_eq() {
    let dir = tempdir().unwrap();
    let a = write(dir.path(), "a.json", r#"{"x":1,"y":[1,2]}"#);
    let b = write(dir.path(), "b.yaml", "y: [1, 2]\nx: 1\n");
    let c = write(dir.path(), "c.json", r#"{"x":"1","y":[1,2]}"#);

    let (stdout, _, code) = run_datatree(&["eq", &a, &b]);
    assert_eq!(code, Some(0));
    assert_eq!(stdout.trim(), "true");

    let (stdout, _, code) = run_datatree(&["eq", &a, &c]);
    assert_eq!(code, Some(1));
    assert_eq!(stdout.trim(), "false");
}

#[test]
fn test_cli_reports_type_mismatch() {
    let dir = tempdir().unwrap();
    let doc = write(dir.path(), "bad.yaml", "ports:\n  80: http\n");

    let (_stdout, stderr, code) = run_datatree(&["merge", &doc]);

    assert_eq!(code, Some(2));
    assert!(stderr.contains("failed to decode"));
    assert!(stderr.contains("Type mismatch"));
}

#[test]
fn test_cli_rejects_unknown_extension() {
    let dir = tempdir().unwrap();
    let doc = write(dir.path(), "conf.toml", "a = 1\n");

    let (_stdout, stderr, code) = run_datatree(&["merge", &doc]);

    assert_eq!(code, Some(2));
    assert!(stderr.contains("unsupported file type"));
}

#[test]
fn test_cli_get_numeric_mapping_key() {
    let dir = tempdir().unwrap();
    let doc = write(dir.path(), "doc.json", r#"{"ports":{"80":"http"},"list":[["x"]]}"#);

    let (stdout, _stderr, code) = run_datatree(&["get", &doc, "ports", "80"]);
    assert_eq!(code, Some(0));
    assert_eq!(stdout.trim(), "\"http\"");

    let (stdout, _stderr, code) = run_datatree(&["get", &doc, "list", "0", "0"]);
    assert_eq!(code, Some(0));
    assert_eq!(stdout.trim(), "\"x\"");
}
