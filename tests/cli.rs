// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! End-to-end CLI tests.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("lintgate.toml");
    std::fs::write(&path, content).unwrap();
    path
}

fn lintgate() -> Command {
    Command::cargo_bin("lintgate").unwrap()
}

#[test]
fn test_check_bypassed_commit_passes() {
    let dir = TempDir::new().unwrap();
    let config = write_config(
        &dir,
        r#"
[delegation]
bypass_patterns = ["dependabot[bot]"]

[[delegation.rules_to_enforce]]
source = "builtin"
rule = "header-max-length"
options = 5
"#,
    );

    lintgate()
        .args(["--config", config.to_str().unwrap(), "check", "-m"])
        .arg("fix(deps): update by dependabot[bot]")
        .assert()
        .success()
        .stdout(predicate::str::contains("bypassed"))
        .stdout(predicate::str::contains("dependabot[bot]"));
}

#[test]
fn test_check_failing_rule_rejects_with_provenance() {
    let dir = TempDir::new().unwrap();
    let config = write_config(
        &dir,
        r#"
[delegation]

[[delegation.rules_to_enforce]]
source = "builtin"
rule = "header-max-length"
options = 10
"#,
    );

    lintgate()
        .args(["--config", config.to_str().unwrap(), "check", "-m"])
        .arg("feat: this header is much longer than ten characters")
        .assert()
        .failure()
        .stdout(predicate::str::contains("[via builtin/header-max-length]"));
}

#[test]
fn test_check_unknown_provider_names_it() {
    let dir = TempDir::new().unwrap();
    let config = write_config(
        &dir,
        r#"
[delegation]

[[delegation.rules_to_enforce]]
source = "ghost-pkg"
rule = "type-enum"
"#,
    );

    lintgate()
        .args(["--config", config.to_str().unwrap(), "check", "-m", "fix: x"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("ghost-pkg"));
}

#[test]
fn test_never_condition_disables_the_gate() {
    let dir = TempDir::new().unwrap();
    let config = write_config(
        &dir,
        r#"
condition = "never"

[delegation]

[[delegation.rules_to_enforce]]
source = "ghost-pkg"
rule = "type-enum"
"#,
    );

    lintgate()
        .args(["--config", config.to_str().unwrap(), "check", "-m", "anything at all"])
        .assert()
        .success();
}

#[test]
fn test_check_json_output() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "");

    lintgate()
        .args([
            "--config",
            config.to_str().unwrap(),
            "--format",
            "json",
            "check",
            "-m",
            "fix: x",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"passed\": true"));
}

#[test]
fn test_check_message_file() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "");
    let message_path = dir.path().join("COMMIT_EDITMSG");
    std::fs::write(&message_path, "fix: from a file\n").unwrap();

    lintgate()
        .args(["--config", config.to_str().unwrap(), "check", "--file"])
        .arg(&message_path)
        .assert()
        .success();
}

#[test]
fn test_init_writes_starter_config() {
    let dir = TempDir::new().unwrap();

    lintgate()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created lintgate.toml"));

    assert!(dir.path().join("lintgate.toml").exists());

    // A second init without --force refuses to overwrite.
    lintgate()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
