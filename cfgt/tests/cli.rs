//! CLI end-to-end tests
//!
//! These tests run the cfgt binary against configuration files written to
//! a temporary directory.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get the path to the cfgt binary
fn cfgt_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_cfgt"))
}

/// Build a command isolated from the caller's environment and config
fn cfgt(dir: &TempDir) -> Command {
    let mut cmd = Command::new(cfgt_bin());
    cmd.current_dir(dir.path())
        .env_remove("CFGT_VERBOSE")
        .env_remove("CFGT_CONFIG")
        .env_remove("XDG_CONFIG_HOME")
        .env("CFGT_NO_COLOR", "true")
        .env("HOME", dir.path());
    cmd
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write fixture");
    path
}

#[test]
fn test_cli_help() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    cfgt(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dump the tokens of configuration files"))
        .stdout(predicate::str::contains("Check that configuration files lex cleanly"));
}

#[test]
fn test_cli_version() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    cfgt(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cfgt"));
}

#[test]
fn test_cli_tokens_text() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    write_file(&dir, "app.cfg", "port = 8080 // http\n");

    cfgt(&dir)
        .args(["tokens", "app.cfg"])
        .assert()
        .success()
        .stdout(predicate::str::contains("app.cfg:1:0\tidentifier\t\"port\""))
        .stdout(predicate::str::contains("app.cfg:1:7\tinteger\t\"8080\""))
        .stdout(predicate::str::contains("comment\t\"// http\""));
}

#[test]
fn test_cli_tokens_no_comments() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    write_file(&dir, "app.cfg", "a /* b */ c\n");

    cfgt(&dir)
        .args(["tokens", "--no-comments", "app.cfg"])
        .assert()
        .success()
        .stdout(predicate::str::contains("comment").not());
}

#[test]
fn test_cli_tokens_limit_zero() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    write_file(&dir, "app.cfg", "a b c\n");

    cfgt(&dir)
        .args(["tokens", "--limit", "0", "app.cfg"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_cli_tokens_json() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    write_file(&dir, "app.cfg", "name = \"cfgs\"\n");

    let output = cfgt(&dir)
        .args(["tokens", "-F", "json", "app.cfg"])
        .output()
        .expect("Failed to run cfgt");
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output should be JSON");
    assert_eq!(json[0]["file"], "app.cfg");
    assert_eq!(json[0]["tokens"][2]["kind"], "string");
    assert_eq!(json[0]["tokens"][2]["text"], "\"cfgs\"");
}

#[test]
fn test_cli_tokens_reports_lex_error() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    write_file(&dir, "bad.cfg", "x = 1\ny = \"open\n");

    cfgt(&dir)
        .args(["tokens", "bad.cfg"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: line break in string literal"))
        .stderr(predicate::str::contains("--> bad.cfg:2:"));
}

#[test]
fn test_cli_tokens_missing_file() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    cfgt(&dir)
        .args(["tokens", "missing.cfg"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_cli_tokens_requires_input() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    cfgt(&dir).arg("tokens").assert().failure();
}

#[test]
fn test_cli_check_clean() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    write_file(&dir, "a.cfg", "a = 1\n");
    write_file(&dir, "b.cfg", "b = [0x10, .5]\n");

    cfgt(&dir)
        .args(["check", "-j", "2", "a.cfg", "b.cfg"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 file(s) ok, 0 failed"));
}

#[test]
fn test_cli_check_failure() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    write_file(&dir, "good.cfg", "a = 1\n");
    write_file(&dir, "bad.cfg", "a = `x`\n");

    cfgt(&dir)
        .args(["check", "good.cfg", "bad.cfg"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("1 file(s) ok, 1 failed"))
        .stderr(predicate::str::contains("invalid input character: '`'"));
}

#[test]
fn test_cli_check_zero_jobs() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    write_file(&dir, "a.cfg", "a\n");

    cfgt(&dir)
        .args(["check", "--jobs", "0", "a.cfg"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1"));
}

#[test]
fn test_cli_config_file() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    write_file(&dir, "a.cfg", "x // note\n");
    write_file(
        &dir,
        "cfgt.toml",
        "[tokens]\nformat = \"json\"\ninclude_comments = false\n",
    );

    let output = cfgt(&dir)
        .args(["tokens", "a.cfg"])
        .output()
        .expect("Failed to run cfgt");
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output should be JSON");
    let kinds: Vec<_> = json[0]["tokens"]
        .as_array()
        .expect("tokens array")
        .iter()
        .map(|t| t["kind"].as_str().unwrap_or("operator").to_string())
        .collect();
    assert_eq!(kinds, ["identifier", "eol", "eol", "eof"]);
}

#[test]
fn test_cli_explicit_config_path() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    write_file(&dir, "a.cfg", "x\n");
    let config = write_file(&dir, "custom.toml", "[tokens]\nformat = \"yaml\"\n");

    cfgt(&dir)
        .arg("--config")
        .arg(&config)
        .args(["tokens", "a.cfg"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown format"));
}
