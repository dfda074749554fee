//! Usage scanning over source file contents.
//!
//! Detection is textual: an ordered set of regular expression templates
//! describes how a variable name can appear in source code. Each template
//! is instantiated per variable (the name is regex-escaped), applied
//! independently, and the non-overlapping match counts are summed. This
//! is a heuristic by design; the template list is a configuration point,
//! not a closed set.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indexmap::IndexMap;
use rayon::prelude::*;
use regex::Regex;

use crate::discovery::relative_to;
use crate::reporter;
use crate::usage::UsageAggregate;

/// Placeholder replaced with the escaped variable name in each template.
const NAME_PLACEHOLDER: &str = "{name}";

/// Ordered set of regex templates describing variable access syntax.
///
/// Dot-access templates end in `\b` so that `API_KEY` never matches inside
/// `API_KEY_BACKUP`; bracket and call templates are delimited by their own
/// closing quote.
#[derive(Debug, Clone)]
pub struct PatternSet {
    templates: Vec<String>,
}

impl PatternSet {
    /// Templates for the primary mode: `process.env` dot and bracket
    /// access, `import.meta.env` dot access, and the `env("NAME")`
    /// config-helper call idiom.
    pub fn standard() -> Self {
        Self {
            templates: vec![
                r"process\.env\.{name}\b".to_string(),
                r"process\.env\[\s*'{name}'\s*\]".to_string(),
                r#"process\.env\[\s*"{name}"\s*\]"#.to_string(),
                r"import\.meta\.env\.{name}\b".to_string(),
                r"\benv\(\s*'{name}'\s*\)".to_string(),
                r#"\benv\(\s*"{name}"\s*\)"#.to_string(),
            ],
        }
    }

    /// The three fixed templates used by the usage-audit mode.
    pub fn audit() -> Self {
        Self {
            templates: vec![
                r"process\.env\.{name}\b".to_string(),
                r"process\.env\[\s*'{name}'\s*\]".to_string(),
                r#"process\.env\[\s*"{name}"\s*\]"#.to_string(),
            ],
        }
    }

    /// Append an extra template. `{name}` marks where the escaped variable
    /// name is substituted.
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.templates.push(template.into());
        self
    }

    /// Instantiate every template for one variable name.
    pub fn compile(&self, name: &str) -> Result<Vec<Regex>> {
        let escaped = regex::escape(name);
        self.templates
            .iter()
            .map(|template| {
                let source = template.replace(NAME_PLACEHOLDER, &escaped);
                Regex::new(&source)
                    .with_context(|| format!("Invalid usage pattern template: {}", template))
            })
            .collect()
    }
}

/// Counts pattern matches for a fixed set of variable names.
pub struct UsageScanner {
    compiled: Vec<(String, Vec<Regex>)>,
}

impl UsageScanner {
    pub fn new<I>(names: I, patterns: &PatternSet) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let compiled = names
            .into_iter()
            .map(|name| {
                let regexes = patterns.compile(&name)?;
                Ok((name, regexes))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { compiled })
    }

    /// Count matches in one file's contents. Only names with at least one
    /// match are returned.
    pub fn scan_content(&self, content: &str) -> Vec<(&str, usize)> {
        self.compiled
            .iter()
            .filter_map(|(name, regexes)| {
                let count: usize = regexes
                    .iter()
                    .map(|regex| regex.find_iter(content).count())
                    .sum();
                (count > 0).then_some((name.as_str(), count))
            })
            .collect()
    }

    /// Scan `files`, folding per-file counts into one aggregate per
    /// variable. Files are read in parallel; results are folded in the
    /// given file order so occurrence order stays deterministic. Files
    /// that cannot be read, or that are not valid UTF-8, are skipped with
    /// a warning.
    pub fn scan_files(&self, root: &Path, files: &[PathBuf]) -> IndexMap<String, UsageAggregate> {
        let per_file: Vec<Option<Vec<(&str, usize)>>> = files
            .par_iter()
            .map(|path| read_text(path).map(|content| self.scan_content(&content)))
            .collect();

        let mut aggregates: IndexMap<String, UsageAggregate> = self
            .compiled
            .iter()
            .map(|(name, _)| (name.clone(), UsageAggregate::default()))
            .collect();

        for (path, counts) in files.iter().zip(per_file) {
            let Some(counts) = counts else { continue };
            let relative = relative_to(root, path);
            for (name, count) in counts {
                if let Some(aggregate) = aggregates.get_mut(name) {
                    aggregate.record(relative.clone(), count);
                }
            }
        }

        aggregates
    }
}

/// Read a file as UTF-8 text. Binary content and read failures are
/// non-fatal: the file is skipped with a warning.
fn read_text(path: &Path) -> Option<String> {
    match fs::read(path) {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(text) => Some(text),
            Err(_) => {
                reporter::warn(format!(
                    "Skipping binary file: {}",
                    path.display()
                ));
                None
            }
        },
        Err(err) => {
            reporter::warn(format!("Cannot read {}: {}", path.display(), err));
            None
        }
    }
}
