//! Primary mode: config-driven documentation generation.
//!
//! Fixed pipeline: load config → apply plugins → discover declaration
//! files → parse each, run the `before_parse` chain, filter excluded
//! names → discover scan files → scan → attach aggregates → render →
//! run the `before_output` chain → write. Only config loading and the
//! final write are fatal; everything else degrades to warnings.

use std::{env, fs, path::PathBuf};

use anyhow::{Context, Result};
use indexmap::IndexSet;

use super::super::args::GenerateCommand;
use super::super::exit_status::ExitStatus;
use crate::config::load_config;
use crate::discovery::{discover, relative_to};
use crate::env_file::{AllVariables, FileVariables, parse_env_file};
use crate::plugins::load_plugins;
use crate::report;
use crate::reporter::{self, pluralize};
use crate::scanner::{PatternSet, UsageScanner};
use crate::usage::UsageAggregate;
use crate::wildcard;

pub fn generate(cmd: GenerateCommand) -> Result<ExitStatus> {
    let root = match cmd.root {
        Some(root) => root,
        None => env::current_dir().context("Cannot determine working directory")?,
    };

    let config = load_config(&cmd.config)?;
    let host = load_plugins(&config.plugins, &config);

    // Declaration files: explicit paths first, then expanded patterns.
    let mut declaration_files: Vec<PathBuf> =
        config.input.files.iter().map(|f| root.join(f)).collect();
    for path in discover(&root, &config.input.patterns, &[]) {
        if !declaration_files.contains(&path) {
            declaration_files.push(path);
        }
    }

    let mut all_variables = AllVariables::new();
    for path in &declaration_files {
        let relative = relative_to(&root, path);
        let parsed = parse_env_file(path);
        let parsed = host.run_before_parse(&relative, parsed);
        let kept = apply_exclude(parsed, &config.exclude);
        all_variables.insert(relative, kept);
    }

    let scan_files = discover(&root, &config.scan.patterns, &config.scan.ignore);
    let names: IndexSet<String> = all_variables
        .values()
        .flat_map(|vars| vars.keys().cloned())
        .collect();
    let scanner = UsageScanner::new(names, &PatternSet::standard())?;
    let aggregates = scanner.scan_files(&root, &scan_files);

    for variables in all_variables.values_mut() {
        for (name, var) in variables.iter_mut() {
            var.usage = Some(aggregates.get(name).cloned().unwrap_or_default());
        }
    }

    let rendered = report::render(config.output.format, &all_variables)?;
    let final_text = host.run_before_output(rendered, &all_variables);

    fs::create_dir_all(&cmd.output).with_context(|| {
        format!("Cannot create output directory: {}", cmd.output.display())
    })?;
    let output_path = cmd.output.join(&config.output.file);
    fs::write(&output_path, final_text)
        .with_context(|| format!("Cannot write report: {}", output_path.display()))?;

    print_summary(&all_variables, scan_files.len(), &output_path);
    Ok(ExitStatus::Success)
}

/// Drop variables whose name matches any exclude wildcard. Applied after
/// `before_parse`, before scanning, so excluded names are neither scanned
/// for nor rendered.
fn apply_exclude(variables: FileVariables, patterns: &[String]) -> FileVariables {
    if patterns.is_empty() {
        return variables;
    }
    variables
        .into_iter()
        .filter(|(name, _)| !wildcard::matches_any(patterns, name))
        .collect()
}

fn print_summary(
    all_variables: &AllVariables,
    scanned_files: usize,
    output_path: &std::path::Path,
) {
    let variable_count: usize = all_variables.values().map(FileVariables::len).sum();
    let unused = all_variables
        .values()
        .flat_map(FileVariables::values)
        .filter(|var| var.usage.as_ref().is_some_and(UsageAggregate::is_unused))
        .count();

    reporter::success(format!(
        "Documented {} from {} (scanned {}) -> {}",
        pluralize(variable_count, "variable", "variables"),
        pluralize(all_variables.len(), "declaration file", "declaration files"),
        pluralize(scanned_files, "file", "files"),
        output_path.display()
    ));
    if unused > 0 {
        reporter::warn(format!(
            "{} never referenced in the scanned files",
            pluralize(unused, "variable is", "variables are")
        ));
    }
}
