// SPDX-License-Identifier: Apache-2.0

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_version() {
    let mut cmd = cargo_bin_cmd!("orgwatch");
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("orgwatch"));
}

#[test]
fn test_help_contains_all_commands() {
    let mut cmd = cargo_bin_cmd!("orgwatch");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("repos"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn test_no_arguments_prints_help() {
    let mut cmd = cargo_bin_cmd!("orgwatch");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_repos_requires_organization() {
    let mut cmd = cargo_bin_cmd!("orgwatch");
    cmd.arg("repos")
        .assert()
        .failure()
        .stderr(predicate::str::contains("<ORG>"));
}

#[test]
fn test_invalid_output_format() {
    let mut cmd = cargo_bin_cmd!("orgwatch");
    cmd.args(["--output", "xml", "run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_run_with_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.yaml");

    let mut cmd = cargo_bin_cmd!("orgwatch");
    cmd.arg("--config")
        .arg(&missing)
        .arg("run")
        .env_remove("CONFIG_FILE")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"))
        .stderr(predicate::str::contains("Tip:"));
}

#[test]
fn test_run_reads_config_file_from_environment() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = cargo_bin_cmd!("orgwatch");
    cmd.arg("run")
        .env("CONFIG_FILE", dir.path().join("from-env.yaml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("from-env.yaml"));
}

#[test]
fn test_run_without_enabled_categories_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.yaml");
    std::fs::write(&config, "global:\n  organizations: []\n  days: 7\n").unwrap();

    let output = cargo_bin_cmd!("orgwatch")
        .current_dir(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["--output", "json", "run"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["organizations"], 0);
    assert_eq!(json["reports"], serde_json::json!([]));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}
