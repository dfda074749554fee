//! Glob-based file discovery.
//!
//! Patterns are expanded relative to an explicit root directory rather
//! than the process working directory, so callers (and tests) control
//! where resolution happens. Matches of each pattern are sorted and the
//! union is deduplicated in first-seen order, which makes discovery
//! deterministic across runs.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use glob::{Pattern, glob};

use crate::reporter;

/// Expand `patterns` against `root`, dropping files that match any ignore
/// pattern. A pattern matching zero files is not an error.
pub fn discover(root: &Path, patterns: &[String], ignore: &[String]) -> Vec<PathBuf> {
    let ignore = compile_patterns(ignore);
    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut files = Vec::new();

    for pattern in patterns {
        let full_pattern = root.join(pattern);
        let entries = match glob(&full_pattern.to_string_lossy()) {
            Ok(entries) => entries,
            Err(err) => {
                reporter::warn(format!("Invalid glob pattern '{}': {}", pattern, err));
                continue;
            }
        };

        let mut matched: Vec<PathBuf> = entries
            .filter_map(|entry| match entry {
                Ok(path) if path.is_file() => Some(path),
                Ok(_) => None,
                Err(err) => {
                    reporter::warn(format!("Cannot access path: {}", err));
                    None
                }
            })
            .collect();
        matched.sort();

        for path in matched {
            let relative = relative_to(root, &path);
            if ignore.iter().any(|p| p.matches(&relative)) {
                continue;
            }
            if seen.insert(path.clone()) {
                files.push(path);
            }
        }
    }

    files
}

/// Compile glob patterns, reporting and skipping invalid ones.
pub fn compile_patterns(patterns: &[String]) -> Vec<Pattern> {
    patterns
        .iter()
        .filter_map(|p| match Pattern::new(p) {
            Ok(pattern) => Some(pattern),
            Err(err) => {
                reporter::warn(format!("Invalid ignore pattern '{}': {}", p, err));
                None
            }
        })
        .collect()
}

/// Root-relative, forward-slash path string used in reports and for
/// matching ignore patterns.
pub fn relative_to(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let text = relative.to_string_lossy();
    if std::path::MAIN_SEPARATOR == '/' {
        text.into_owned()
    } else {
        text.replace(std::path::MAIN_SEPARATOR, "/")
    }
}
