//! Process-level checks of the CLI contract: argument and environment
//! failures must be loud, land on stderr, and happen before any file or
//! network activity.

use std::{fs, process::Command};
use tempfile::tempdir;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_locales-llm"))
}

#[test]
fn missing_argument_exits_nonzero_with_diagnostic() {
    let output = bin().output().unwrap();

    assert!(!output.status.success());
    assert!(!output.stderr.is_empty());
    assert!(output.stdout.is_empty());
}

#[test]
fn unknown_locale_code_fails_before_any_work() {
    let dir = tempdir().unwrap();
    let output = bin()
        .arg("xx")
        .arg("--root")
        .arg(dir.path())
        .env_remove("OPENAI_API_KEY")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown locale code 'xx'"),
        "stderr: {stderr}"
    );
    assert!(fs::read_dir(dir.path()).unwrap().next().is_none());
}

#[test]
fn missing_api_key_fails_before_touching_files() {
    let dir = tempdir().unwrap();
    let output = bin()
        .arg("fr")
        .arg("--root")
        .arg(dir.path())
        .env_remove("OPENAI_API_KEY")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("OPENAI_API_KEY"), "stderr: {stderr}");
    assert!(fs::read_dir(dir.path()).unwrap().next().is_none());
}

#[test]
fn missing_source_catalog_is_reported() {
    let dir = tempdir().unwrap();
    let output = bin()
        .arg("fr")
        .arg("--root")
        .arg(dir.path())
        .env("OPENAI_API_KEY", "test-key")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("messages.json"), "stderr: {stderr}");
}
