use predicates::prelude::*;

use crate::CliTest;

#[test]
fn test_init_creates_config_file() {
    let test = CliTest::new();

    test.command().arg("init").assert().success();

    let config = test.read_file("env-doc.config.json");
    let value: serde_json::Value = serde_json::from_str(&config).expect("valid JSON");
    assert!(value["input"]["files"].is_array());
    assert!(value["scan"]["patterns"].is_array());
    assert_eq!(value["output"]["format"], "md");
}

#[test]
fn test_init_refuses_to_overwrite() {
    let test = CliTest::new();
    test.write_file("env-doc.config.json", "{}");

    test.command()
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_no_command_prints_help() {
    let test = CliTest::new();

    test.command()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_help_lists_commands() {
    let test = CliTest::new();

    test.command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("audit"))
        .stdout(predicate::str::contains("init"));
}
