//! Integration tests for the `dayplan` binary.
//!
//! The interactive board needs a terminal, so these cover the paths that
//! finish without one: help, version, `config` and startup errors. Each test
//! points XDG_CONFIG_HOME at a temp dir so a real user config never leaks in.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Get the path to the built `dayplan` binary.
fn dayplan_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("dayplan");
    path
}

/// Run `dayplan` with the given args, returning (stdout, stderr, success).
fn run_dayplan(home: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(dayplan_bin())
        .args(args)
        .current_dir(home)
        .env("XDG_CONFIG_HOME", home)
        .env_remove("DAYPLAN_LOG_FILE")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run dayplan");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

/// Run `dayplan` expecting success, return stdout.
fn run_dayplan_ok(home: &Path, args: &[&str]) -> String {
    let (stdout, stderr, success) = run_dayplan(home, args);
    if !success {
        panic!(
            "dayplan {:?} failed:\nstdout: {}\nstderr: {}",
            args, stdout, stderr
        );
    }
    stdout
}

fn write_config(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("custom.toml");
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn test_help_lists_flags_and_commands() {
    let tmp = TempDir::new().unwrap();
    let out = run_dayplan_ok(tmp.path(), &["--help"]);
    assert!(out.contains("--filter"));
    assert!(out.contains("--log-file"));
    assert!(out.contains("config"));
}

#[test]
fn test_version() {
    let tmp = TempDir::new().unwrap();
    let out = run_dayplan_ok(tmp.path(), &["--version"]);
    assert!(out.starts_with("dayplan "));
    assert!(out.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_config_prints_defaults() {
    let tmp = TempDir::new().unwrap();
    let out = run_dayplan_ok(tmp.path(), &["config"]);
    assert!(out.contains("[tasks]"));
    assert!(out.contains("default_title = \"New Task\""));
    assert!(out.contains("start_filter = \"today\""));
    assert!(out.contains("mouse = true"));
}

// dirs only honours XDG_CONFIG_HOME on Linux
#[cfg(target_os = "linux")]
#[test]
fn test_config_reads_default_location() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("dayplan");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), "[tasks]\ndefault_title = \"Todo\"\n").unwrap();

    let out = run_dayplan_ok(tmp.path(), &["config"]);
    assert!(out.contains("default_title = \"Todo\""));
}

#[test]
fn test_config_with_explicit_file_and_flags() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(
        tmp.path(),
        "[tasks]\ndefault_title = \"Chore\"\n\n[ui.colors]\naccent = \"#007AFF\"\n",
    );
    let out = run_dayplan_ok(
        tmp.path(),
        &[
            "config",
            "--config",
            path.to_str().unwrap(),
            "--filter",
            "tomorrow",
            "--demo",
        ],
    );
    assert!(out.contains("default_title = \"Chore\""));
    assert!(out.contains("start_filter = \"tomorrow\""));
    assert!(out.contains("demo = true"));
    assert!(out.contains("#007AFF"));
}

#[test]
fn test_missing_config_file_fails() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("missing.toml");
    let (_, stderr, success) =
        run_dayplan(tmp.path(), &["config", "--config", missing.to_str().unwrap()]);
    assert!(!success);
    assert!(stderr.starts_with("error: could not read"));
}

#[test]
fn test_malformed_config_fails() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(tmp.path(), "[tasks\n");
    let (_, stderr, success) = run_dayplan(tmp.path(), &["config", "--config", path.to_str().unwrap()]);
    assert!(!success);
    assert!(stderr.contains("could not parse config"));
}

#[test]
fn test_bad_color_fails() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(tmp.path(), "[ui.colors]\naccent = \"blue\"\n");
    let (_, stderr, success) = run_dayplan(tmp.path(), &["config", "--config", path.to_str().unwrap()]);
    assert!(!success);
    assert!(stderr.contains("invalid color for 'accent'"));
}

#[test]
fn test_invalid_filter_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let (_, stderr, success) = run_dayplan(tmp.path(), &["config", "--filter", "yesterday"]);
    assert!(!success);
    assert!(stderr.contains("yesterday"));
}
