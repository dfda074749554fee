//! Usage-audit mode.
//!
//! A simplified, self-contained variant of the pipeline: exactly one
//! declaration file, the whole project tree (minus ignore patterns), the
//! three fixed `process.env` access patterns, and a minimal renderer.
//! No plugins, no exclusion filtering.

use std::{env, fs, path::{Path, PathBuf}};

use anyhow::{Context, Result};
use walkdir::WalkDir;

use super::super::args::AuditCommand;
use super::super::exit_status::ExitStatus;
use crate::discovery::{compile_patterns, relative_to};
use crate::env_file::{EnvVar, FileVariables, parse_env_source};
use crate::report::{Format, html::escape};
use crate::reporter::{self, pluralize};
use crate::scanner::{PatternSet, UsageScanner};

/// Always skipped, on top of user-supplied ignore patterns. The report
/// files themselves are excluded so a second run does not scan the first
/// run's output.
const DEFAULT_IGNORE: &[&str] = &[
    "**/node_modules/**",
    "**/.git/**",
    "env-usage.*",
];

pub fn audit(cmd: AuditCommand) -> Result<ExitStatus> {
    let root = match cmd.root {
        Some(root) => root,
        None => env::current_dir().context("Cannot determine working directory")?,
    };
    let env_path = if cmd.env.is_absolute() {
        cmd.env.clone()
    } else {
        root.join(&cmd.env)
    };

    // Unlike the generate mode, a missing declaration file is fatal here:
    // there is nothing to audit without it.
    let source = fs::read_to_string(&env_path)
        .with_context(|| format!("Cannot read declaration file: {}", env_path.display()))?;
    let mut variables = parse_env_source(&source);

    let files = walk_tree(&root, &cmd.ignore);
    let scanner = UsageScanner::new(variables.keys().cloned().collect::<Vec<_>>(), &PatternSet::audit())?;
    let aggregates = scanner.scan_files(&root, &files);
    for (name, var) in variables.iter_mut() {
        var.usage = Some(aggregates.get(name).cloned().unwrap_or_default());
    }

    let env_label = relative_to(&root, &env_path);
    let rendered = match cmd.output {
        Format::Md => render_markdown(&env_label, &variables),
        Format::Json => render_json(&variables)?,
        Format::Html => render_html(&env_label, &variables),
    };

    let output_name = format!("env-usage.{}", cmd.output.extension());
    let output_path = root.join(&output_name);
    fs::write(&output_path, rendered)
        .with_context(|| format!("Cannot write report: {}", output_path.display()))?;

    reporter::success(format!(
        "Audited {} against {} -> {}",
        pluralize(variables.len(), "variable", "variables"),
        pluralize(files.len(), "file", "files"),
        output_name
    ));
    Ok(ExitStatus::Success)
}

/// Every regular file under `root`, in deterministic walk order, minus
/// ignored paths. Ignore patterns without wildcards are treated as
/// literal path prefixes.
fn walk_tree(root: &Path, ignore: &[String]) -> Vec<PathBuf> {
    let mut literal_prefixes: Vec<String> = Vec::new();
    let mut glob_sources: Vec<String> = DEFAULT_IGNORE.iter().map(|s| s.to_string()).collect();
    for pattern in ignore {
        if pattern.contains('*') || pattern.contains('?') {
            glob_sources.push(pattern.clone());
        } else {
            literal_prefixes.push(pattern.trim_end_matches('/').to_string());
        }
    }
    let globs = compile_patterns(&glob_sources);

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                reporter::warn(format!("Cannot access path: {}", err));
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = relative_to(root, entry.path());
        if literal_prefixes
            .iter()
            .any(|p| relative == *p || relative.starts_with(&format!("{}/", p)))
        {
            continue;
        }
        if globs.iter().any(|g| g.matches(&relative)) {
            continue;
        }
        files.push(entry.into_path());
    }
    files
}

fn render_markdown(env_file: &str, variables: &FileVariables) -> String {
    let mut out = format!("# Usage report for `{}`\n\n", env_file);
    for var in variables.values() {
        let usage = var.usage.clone().unwrap_or_default();
        if usage.is_unused() {
            out.push_str(&format!("- **{}** — ⚠ unused\n", var.name));
            continue;
        }
        out.push_str(&format!(
            "- **{}** — {}\n",
            var.name,
            pluralize(usage.total, "reference", "references")
        ));
        for occurrence in &usage.occurrences {
            out.push_str(&format!(
                "  - `{}` ({})\n",
                occurrence.file,
                pluralize(occurrence.count, "occurrence", "occurrences")
            ));
        }
    }
    out
}

fn render_json(variables: &FileVariables) -> Result<String> {
    serde_json::to_string_pretty(variables).context("Failed to serialize report to JSON")
}

fn render_html(env_file: &str, variables: &FileVariables) -> String {
    let mut items = String::new();
    for var in variables.values() {
        items.push_str(&render_html_item(var));
    }
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Usage report for {}</title>\n</head>\n<body>\n\
         <h1>Usage report for <code>{}</code></h1>\n<ul>\n{}</ul>\n</body>\n</html>\n",
        escape(env_file),
        escape(env_file),
        items
    )
}

fn render_html_item(var: &EnvVar) -> String {
    let usage = var.usage.clone().unwrap_or_default();
    if usage.is_unused() {
        return format!("<li><strong>{}</strong> — ⚠ unused</li>\n", escape(&var.name));
    }
    let locations: Vec<String> = usage
        .occurrences
        .iter()
        .map(|o| format!("<code>{}</code> ({})", escape(&o.file), o.count))
        .collect();
    format!(
        "<li><strong>{}</strong> — {}: {}</li>\n",
        escape(&var.name),
        pluralize(usage.total, "reference", "references"),
        locations.join(", ")
    )
}
