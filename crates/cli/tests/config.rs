// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod common;
use common::*;

#[test]
fn config_format_json_is_default_output() {
    let temp = TempDir::new().unwrap();
    write_config(&temp, "format = \"json\"\n");
    sc_in(&temp)
        .args(["parse", "ABC-1 #done"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"transition\""));
}

#[test]
fn output_flag_overrides_config() {
    let temp = TempDir::new().unwrap();
    write_config(&temp, "format = \"json\"\n");
    sc_in(&temp)
        .args(["parse", "--output", "text", "ABC-1 #done"])
        .assert()
        .success()
        .stdout(predicate::str::contains("transition: done"));
}

#[test]
fn config_found_from_subdirectory() {
    let temp = TempDir::new().unwrap();
    write_config(&temp, "duration_policy = \"zero\"\n");
    let nested = temp.path().join("src").join("deep");
    std::fs::create_dir_all(&nested).unwrap();

    sc()
        .current_dir(&nested)
        .args(["parse", "#time 1h30m"])
        .assert()
        .success()
        .stdout(predicate::str::contains("worklog: 0m (0s)"));
}

#[test]
fn explicit_config_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("custom.toml");
    std::fs::write(&path, "require_issue_key = true\n").unwrap();

    sc_in(&temp)
        .arg("check")
        .arg("--config")
        .arg(&path)
        .arg("no key here")
        .assert()
        .failure();
}

#[test]
fn invalid_config_is_reported() {
    let temp = TempDir::new().unwrap();
    write_config(&temp, "duration_policy = \"sometimes\"\n");
    sc_in(&temp)
        .args(["check", "ABC-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config error"));
}

#[test]
fn keys_works_despite_invalid_config() {
    let temp = TempDir::new().unwrap();
    write_config(&temp, "duration_policy = \"sometimes\"\n");
    sc_in(&temp)
        .args(["keys", "ABC-1 fix"])
        .assert()
        .success()
        .stdout("ABC-1\n");
}

#[test]
fn schema_command_prints_json_schema() {
    let temp = TempDir::new().unwrap();
    let output = sc_in(&temp).arg("schema").output().unwrap();
    assert!(output.status.success());

    let schema: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(schema["title"], "ParseOutputJson");
}
