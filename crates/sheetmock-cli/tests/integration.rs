//! Integration tests for the sheetmock binary
//!
//! These drive the real executable against a temporary fixture/working pair.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const FIXTURE: &str = "ROW_ID,name,status\n1,Alice,pending\n2,Bob,pending\n";

fn sheetmock(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sheetmock"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("failed to run sheetmock")
}

fn setup() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("devdata")).unwrap();
    fs::write(dir.path().join("devdata/original_mock.csv"), FIXTURE).unwrap();
    dir
}

#[test]
fn test_reset_uses_default_paths() {
    let dir = setup();

    let output = sheetmock(dir.path(), &["reset"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("2 rows, 3 columns"));
    assert_eq!(
        fs::read_to_string(dir.path().join("mock.csv")).unwrap(),
        FIXTURE
    );
}

#[test]
fn test_update_then_show_json() {
    let dir = setup();
    assert!(sheetmock(dir.path(), &["reset"]).status.success());

    let update = sheetmock(dir.path(), &["update", "2", "--set", "status=done"]);
    assert!(update.status.success());

    let show = sheetmock(dir.path(), &["show", "--format", "json"]);
    assert!(show.status.success());
    let value: serde_json::Value = serde_json::from_slice(&show.stdout).unwrap();
    assert_eq!(value["rows"][1], serde_json::json!(["2", "Bob", "done"]));
    assert_eq!(value["rows"][0], serde_json::json!(["1", "Alice", "pending"]));
}

#[test]
fn test_show_reset_discards_updates() {
    let dir = setup();
    assert!(sheetmock(dir.path(), &["reset"]).status.success());
    assert!(sheetmock(dir.path(), &["update", "1", "--set", "status=done"])
        .status
        .success());

    let show = sheetmock(dir.path(), &["show", "--reset"]);

    assert!(show.status.success());
    let stdout = String::from_utf8_lossy(&show.stdout);
    assert!(!stdout.contains("done"));
}

#[test]
fn test_config_file_in_cwd() {
    let dir = setup();
    fs::write(
        dir.path().join("sheetmock.toml"),
        "working = \"state/work.csv\"\n",
    )
    .unwrap();

    assert!(sheetmock(dir.path(), &["reset"]).status.success());

    assert!(dir.path().join("state/work.csv").is_file());
    assert!(!dir.path().join("mock.csv").exists());
}

#[test]
fn test_out_of_range_update_fails() {
    let dir = setup();
    assert!(sheetmock(dir.path(), &["reset"]).status.success());
    let before = fs::read(dir.path().join("mock.csv")).unwrap();

    let output = sheetmock(dir.path(), &["update", "9", "--set", "status=done"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("out of range"));
    assert_eq!(fs::read(dir.path().join("mock.csv")).unwrap(), before);
}

#[test]
fn test_missing_fixture_fails() {
    let dir = TempDir::new().unwrap();

    let output = sheetmock(dir.path(), &["reset"]);

    assert!(!output.status.success());
}
