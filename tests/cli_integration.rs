//! Integration tests for the `todo` CLI.
//!
//! Each test creates a temp directory, runs `todo` as a subprocess with that
//! directory as its working directory, and verifies stdout and/or file contents.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Get the path to the built `todo` binary.
fn todo_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("todo");
    path
}

/// Run `todo` in `dir`, returning (stdout, stderr, success)
fn run_todo(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(todo_bin())
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run todo binary");
    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.success(),
    )
}

fn run_todo_ok(dir: &Path, args: &[&str]) -> String {
    let (stdout, stderr, ok) = run_todo(dir, args);
    assert!(ok, "todo {:?} failed: {}", args, stderr);
    stdout
}

const LEGACY_LIST: &str = "\
[x] Buy milk @2025-01-01 [urgent] #48213377
[ ] Call mom [low]
";

// ============================================================================
// list
// ============================================================================

#[test]
fn test_list_empty_when_file_missing() {
    let dir = TempDir::new().unwrap();
    let out = run_todo_ok(dir.path(), &["list"]);
    assert_eq!(out, "");
    assert!(!dir.path().join("todolist.txt").exists());
}

#[test]
fn test_list_legacy_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("todolist.txt"), LEGACY_LIST).unwrap();
    let out = run_todo_ok(dir.path(), &["list"]);
    assert_eq!(
        out,
        "1. [x] Buy milk @2025-01-01 [urgent]\n2. [ ] Call mom [low]\n"
    );
    // Listing is read-only
    assert_eq!(
        fs::read_to_string(dir.path().join("todolist.txt")).unwrap(),
        LEGACY_LIST
    );
}

#[test]
fn test_list_json() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("todolist.txt"), LEGACY_LIST).unwrap();
    let out = run_todo_ok(dir.path(), &["list", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    let items = parsed.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["text"], "Buy milk");
    assert_eq!(items[0]["done"], true);
    assert_eq!(items[0]["priority"], "urgent");
    assert_eq!(items[0]["due_date"], "2025-01-01");
    assert_eq!(items[1]["number"], 2);
    assert!(items[1].get("due_date").is_none());
}

// ============================================================================
// add
// ============================================================================

#[test]
fn test_add_creates_file_with_structured_record() {
    let dir = TempDir::new().unwrap();
    let out = run_todo_ok(
        dir.path(),
        &[
            "add", "Buy milk", "--due", "2025-01-01", "--priority", "urgent", "--tag",
            "errand", "--tag", "home",
        ],
    );
    assert_eq!(out, "Added todo #1\n");
    assert_eq!(
        fs::read_to_string(dir.path().join("todolist.txt")).unwrap(),
        "{\"text\":\"Buy milk\",\"priority\":\"urgent\",\"due_date\":\"2025-01-01\",\"done\":false,\"tags\":[\"errand\",\"home\"]}\n"
    );
}

#[test]
fn test_add_upgrades_legacy_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("todolist.txt"), LEGACY_LIST).unwrap();
    run_todo_ok(dir.path(), &["add", "Water plants"]);

    let content = fs::read_to_string(dir.path().join("todolist.txt")).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|l| l.starts_with('{')));

    let out = run_todo_ok(dir.path(), &["list"]);
    assert_eq!(
        out,
        "1. [x] Buy milk @2025-01-01 [urgent]\n2. [ ] Call mom [low]\n3. [ ] Water plants [medium]\n"
    );
}

#[test]
fn test_add_rejects_invalid_due_date() {
    let dir = TempDir::new().unwrap();
    let (_, stderr, ok) = run_todo(dir.path(), &["add", "Party", "--due", "2025-13-40"]);
    assert!(!ok);
    assert!(stderr.starts_with("error: invalid due date"));
    assert!(!dir.path().join("todolist.txt").exists());
}

#[test]
fn test_add_rejects_empty_text_and_bad_priority() {
    let dir = TempDir::new().unwrap();
    let (_, stderr, ok) = run_todo(dir.path(), &["add", "   "]);
    assert!(!ok);
    assert!(stderr.contains("empty"));

    let (_, stderr, ok) = run_todo(dir.path(), &["add", "x", "-p", "someday"]);
    assert!(!ok);
    assert!(stderr.contains("invalid priority"));
}

// ============================================================================
// tags
// ============================================================================

fn tagged_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    run_todo_ok(dir.path(), &["add", "one", "-t", "home", "-t", "office"]);
    run_todo_ok(dir.path(), &["add", "two", "-t", "work,home"]);
    dir
}

#[test]
fn test_tags_lists_distinct_in_first_seen_order() {
    let dir = tagged_dir();
    let out = run_todo_ok(dir.path(), &["tags"]);
    assert_eq!(out, "home\noffice\nwork\n");
}

#[test]
fn test_tags_filter_is_case_insensitive_substring() {
    let dir = tagged_dir();
    assert_eq!(run_todo_ok(dir.path(), &["tags", "HO"]), "home\n");
    assert_eq!(run_todo_ok(dir.path(), &["tags", "zzz"]), "");
}

#[test]
fn test_tags_json_counts() {
    let dir = tagged_dir();
    let out = run_todo_ok(dir.path(), &["tags", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed[0]["tag"], "home");
    assert_eq!(parsed[0]["count"], 2);
    assert_eq!(parsed.as_array().unwrap().len(), 3);
}

// ============================================================================
// file and config resolution
// ============================================================================

#[test]
fn test_file_flag_overrides_default() {
    let dir = TempDir::new().unwrap();
    run_todo_ok(dir.path(), &["--file", "other.txt", "add", "elsewhere"]);
    assert!(dir.path().join("other.txt").exists());
    assert!(!dir.path().join("todolist.txt").exists());
}

#[test]
fn test_config_storage_file_and_log_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("todo.toml"),
        "[storage]\nfile = \"lists/home.txt\"\n\n[log]\nfile = \"todo.log\"\n",
    )
    .unwrap();
    run_todo_ok(dir.path(), &["add", "configured"]);
    assert!(dir.path().join("lists/home.txt").exists());

    let log = fs::read_to_string(dir.path().join("todo.log")).unwrap();
    assert!(log.contains("added todo from command line"));

    // --file still wins over the config
    run_todo_ok(dir.path(), &["-f", "cli.txt", "add", "flagged"]);
    assert!(dir.path().join("cli.txt").exists());
}

#[test]
fn test_malformed_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("todo.toml"), "[storage\nfile = 3").unwrap();
    let (_, stderr, ok) = run_todo(dir.path(), &["list"]);
    assert!(!ok);
    assert!(stderr.starts_with("error: could not parse"));
}

#[test]
fn test_missing_config_flag_path_is_an_error() {
    let dir = TempDir::new().unwrap();
    let (_, stderr, ok) = run_todo(dir.path(), &["--config", "nope.toml", "list"]);
    assert!(!ok);
    assert!(stderr.starts_with("error: could not read nope.toml"));
}

#[test]
fn test_unreadable_todo_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("todolist.txt")).unwrap();
    let (_, stderr, ok) = run_todo(dir.path(), &["list"]);
    assert!(!ok);
    assert!(stderr.starts_with("error: could not read"));
}
