use predicates::prelude::*;

use crate::CliTest;

fn audit_project() -> CliTest {
    let test = CliTest::new();
    test.write_file("audit.env", "# API key\nAPI_KEY=abc123\nUNUSED_VAR=1\n");
    test.write_file(
        "src/index.js",
        r#"
const key = process.env.API_KEY;
send(process.env["API_KEY"]);
const backup = process.env.API_KEY_BACKUP;
"#,
    );
    test
}

#[test]
fn test_audit_writes_markdown_report() {
    let test = audit_project();

    test.command()
        .args(["audit", "--env", "audit.env"])
        .assert()
        .success();

    let report = test.read_file("env-usage.md");
    assert!(report.starts_with("# Usage report for `audit.env`\n"));
    assert!(report.contains("- **API_KEY** — 2 references\n"));
    assert!(report.contains("  - `src/index.js` (2 occurrences)\n"));
    assert!(report.contains("- **UNUSED_VAR** — ⚠ unused\n"));
}

#[test]
fn test_audit_default_env_path() {
    let test = CliTest::new();
    test.write_file(".env", "PORT=3000\n");
    test.write_file("server.js", "app.listen(process.env.PORT);");

    test.command().arg("audit").assert().success();

    let report = test.read_file("env-usage.md");
    assert!(report.contains("- **PORT** — 1 reference\n"));
}

#[test]
fn test_audit_json_report() {
    let test = audit_project();

    test.command()
        .args(["audit", "--env", "audit.env", "--output", "json"])
        .assert()
        .success();

    let report = test.read_file("env-usage.json");
    let value: serde_json::Value = serde_json::from_str(&report).expect("valid JSON");
    assert_eq!(value["API_KEY"]["usage"]["total"], 2);
    assert_eq!(value["UNUSED_VAR"]["usage"]["total"], 0);
}

#[test]
fn test_audit_html_report() {
    let test = audit_project();

    test.command()
        .args(["audit", "--env", "audit.env", "--output", "html"])
        .assert()
        .success();

    let report = test.read_file("env-usage.html");
    assert!(report.starts_with("<!DOCTYPE html>"));
    assert!(report.contains("<strong>API_KEY</strong>"));
}

#[test]
fn test_audit_missing_declaration_file_is_fatal() {
    let test = CliTest::new();

    test.command()
        .arg("audit")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot read declaration file"));
}

#[test]
fn test_audit_ignore_patterns() {
    let test = CliTest::new();
    test.write_file(".env", "API_KEY=x\n");
    test.write_file("app.js", "process.env.API_KEY;");
    test.write_file("vendor/lib.js", "process.env.API_KEY;");

    test.command()
        .args(["audit", "--ignore", "vendor"])
        .assert()
        .success();

    let report = test.read_file("env-usage.md");
    assert!(report.contains("- **API_KEY** — 1 reference\n"));
    assert!(!report.contains("vendor/lib.js"));
}

#[test]
fn test_audit_does_not_scan_its_own_previous_report() {
    let test = CliTest::new();
    test.write_file(".env", "API_KEY=x\n");
    test.write_file("app.js", "process.env.API_KEY;");

    test.command().arg("audit").assert().success();
    let first = test.read_file("env-usage.md");

    test.command().arg("audit").assert().success();
    let second = test.read_file("env-usage.md");

    assert_eq!(first, second);
}
