use predicates::prelude::*;

use crate::CliTest;

const BASIC_CONFIG: &str = r#"{
    "input": { "files": [".env"], "patterns": [] },
    "scan": { "patterns": ["src/**/*.js"], "ignore": [] },
    "output": { "format": "md", "file": "env-vars.md" }
}"#;

fn basic_project() -> CliTest {
    let test = CliTest::new();
    test.write_file("env-doc.config.json", BASIC_CONFIG);
    test.write_file(
        ".env",
        "# API key\nAPI_KEY=abc123\n\n# Never referenced anywhere\nUNUSED_VAR=1\n",
    );
    test.write_file(
        "src/index.js",
        r#"
const key = process.env.API_KEY;
send(process.env.API_KEY);
const backup = process.env.API_KEY_BACKUP;
"#,
    );
    test
}

#[test]
fn test_generate_markdown_report() {
    let test = basic_project();

    test.command().arg("generate").assert().success();

    let report = test.read_file("docs/env-vars.md");
    assert!(report.starts_with("# Environment Variables\n"));
    assert!(report.contains("## API_KEY\n"));
    assert!(report.contains("API key\n"));
    assert!(report.contains("- Default: `abc123`\n"));
    // Two dot-accesses count; API_KEY_BACKUP must not bleed into API_KEY.
    assert!(report.contains("- Used 2 times in 1 file:\n"));
    assert!(report.contains("  - `src/index.js` (2 occurrences)\n"));
    assert!(report.contains("## UNUSED_VAR\n"));
    assert!(report.contains("unused"));
}

#[test]
fn test_generate_is_idempotent() {
    let test = basic_project();

    test.command().arg("generate").assert().success();
    let first = test.read_file("docs/env-vars.md");

    test.command().arg("generate").assert().success();
    let second = test.read_file("docs/env-vars.md");

    assert_eq!(first, second);
}

#[test]
fn test_generate_json_report_round_trips() {
    let test = CliTest::new();
    test.write_file(
        "env-doc.config.json",
        r#"{
            "input": { "files": [".env"], "patterns": [] },
            "scan": { "patterns": ["src/**/*.js"], "ignore": [] },
            "output": { "format": "json", "file": "env-vars.json" }
        }"#,
    );
    test.write_file(".env", "# API key\nAPI_KEY=abc123\n");
    test.write_file("src/app.js", "process.env.API_KEY; process.env['API_KEY'];");

    test.command().arg("generate").assert().success();

    let report = test.read_file("docs/env-vars.json");
    let value: serde_json::Value = serde_json::from_str(&report).expect("valid JSON");
    let var = &value[".env"]["API_KEY"];
    assert_eq!(var["value"], "abc123");
    assert_eq!(var["description"], "API key");
    assert_eq!(var["usage"]["total"], 2);
    assert_eq!(var["usage"]["occurrences"][0]["file"], "src/app.js");
    assert_eq!(var["usage"]["occurrences"][0]["count"], 2);
}

#[test]
fn test_generate_applies_exclude_patterns() {
    let test = CliTest::new();
    test.write_file(
        "env-doc.config.json",
        r#"{
            "input": { "files": [".env"], "patterns": [] },
            "scan": { "patterns": ["src/**/*.js"], "ignore": [] },
            "output": { "format": "md", "file": "env-vars.md" },
            "exclude": ["SECRET_*"]
        }"#,
    );
    test.write_file(".env", "SECRET_TOKEN=shh\nSECRET_SALT=salty\nPUBLIC_URL=http://x\n");

    test.command().arg("generate").assert().success();

    let report = test.read_file("docs/env-vars.md");
    assert!(!report.contains("SECRET_TOKEN"));
    assert!(!report.contains("SECRET_SALT"));
    assert!(report.contains("## PUBLIC_URL"));
}

#[test]
fn test_generate_with_builtin_plugins() {
    let test = CliTest::new();
    test.write_file(
        "env-doc.config.json",
        r#"{
            "plugins": ["mask-secrets", "toc"],
            "input": { "files": [".env"], "patterns": [] },
            "scan": { "patterns": ["src/**/*.js"], "ignore": [] },
            "output": { "format": "md", "file": "env-vars.md" }
        }"#,
    );
    test.write_file(".env", "AUTH_TOKEN=supersecret\nPORT=3000\n");

    test.command().arg("generate").assert().success();

    let report = test.read_file("docs/env-vars.md");
    assert!(report.contains("## Contents"));
    assert!(report.contains("- [AUTH_TOKEN](#auth_token)"));
    assert!(!report.contains("supersecret"));
    assert!(report.contains("********"));
    assert!(report.contains("- Default: `3000`"));
}

#[test]
fn test_generate_unknown_plugin_is_skipped() {
    let test = basic_project();
    test.write_file(
        "env-doc.config.json",
        r#"{
            "plugins": ["does-not-exist"],
            "input": { "files": [".env"], "patterns": [] },
            "scan": { "patterns": ["src/**/*.js"], "ignore": [] },
            "output": { "format": "md", "file": "env-vars.md" }
        }"#,
    );

    test.command()
        .arg("generate")
        .assert()
        .success()
        .stderr(predicate::str::contains("unknown plugin \"does-not-exist\""));

    assert!(test.exists("docs/env-vars.md"));
}

#[test]
fn test_generate_missing_config_is_fatal() {
    let test = CliTest::new();

    test.command()
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot read config file"));
}

#[test]
fn test_generate_missing_declaration_file_is_not_fatal() {
    let test = CliTest::new();
    test.write_file("env-doc.config.json", BASIC_CONFIG);

    test.command()
        .arg("generate")
        .assert()
        .success()
        .stderr(predicate::str::contains("Cannot read declaration file"));

    let report = test.read_file("docs/env-vars.md");
    assert!(report.starts_with("# Environment Variables\n"));
}

#[test]
fn test_generate_respects_scan_ignore() {
    let test = CliTest::new();
    test.write_file(
        "env-doc.config.json",
        r#"{
            "input": { "files": [".env"], "patterns": [] },
            "scan": { "patterns": ["**/*.js"], "ignore": ["**/vendor/**"] },
            "output": { "format": "md", "file": "env-vars.md" }
        }"#,
    );
    test.write_file(".env", "API_KEY=x\n");
    test.write_file("src/app.js", "process.env.API_KEY;");
    test.write_file("vendor/lib.js", "process.env.API_KEY; process.env.API_KEY;");

    test.command().arg("generate").assert().success();

    let report = test.read_file("docs/env-vars.md");
    assert!(report.contains("- Used 1 time in 1 file:\n"));
    assert!(!report.contains("vendor/lib.js"));
}

#[test]
fn test_generate_custom_output_directory() {
    let test = basic_project();

    test.command()
        .args(["generate", "--output", "build/documentation"])
        .assert()
        .success();

    assert!(test.exists("build/documentation/env-vars.md"));
}
