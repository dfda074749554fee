//! Declaration file parsing.
//!
//! A declaration file is a newline-delimited `KEY=VALUE` list. A run of
//! `#`-prefixed comment lines immediately preceding a declaration becomes
//! that variable's description. Blank and malformed lines are skipped and
//! do not reset the pending comment block, so a description may be
//! separated from its variable by empty lines.

use std::path::Path;
use std::fs;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::reporter;
use crate::usage::UsageAggregate;

/// One variable declared in a `.env`-style file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVar {
    pub name: String,
    /// Raw default value, trimmed, surrounding quotes stripped. May be empty.
    pub value: String,
    /// Comment block preceding the declaration, joined with newlines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Attached after the scan phase; `None` until then.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<UsageAggregate>,
}

/// Variables of one declaration file, in declaration order.
pub type FileVariables = IndexMap<String, EnvVar>;

/// All parsed declaration files, keyed by relative path in discovery order.
pub type AllVariables = IndexMap<String, FileVariables>;

/// Parse the contents of a declaration file.
pub fn parse_env_source(source: &str) -> FileVariables {
    let mut variables = FileVariables::new();
    let mut pending_comments: Vec<String> = Vec::new();

    for line in source.lines() {
        let trimmed = line.trim();

        if let Some(comment) = trimmed.strip_prefix('#') {
            pending_comments.push(comment.trim().to_string());
            continue;
        }

        let Some((raw_key, raw_value)) = trimmed.split_once('=') else {
            // Blank or malformed line: skipped, comments keep accumulating.
            continue;
        };

        let name = strip_export_prefix(raw_key.trim());
        if name.is_empty() {
            continue;
        }

        let description = if pending_comments.is_empty() {
            None
        } else {
            Some(pending_comments.join("\n"))
        };
        pending_comments.clear();

        variables.insert(
            name.to_string(),
            EnvVar {
                name: name.to_string(),
                value: unquote(raw_value.trim()).to_string(),
                description,
                usage: None,
            },
        );
    }

    variables
}

/// Read and parse a declaration file. An unreadable file is reported as a
/// warning and contributes an empty variable set; the run continues.
pub fn parse_env_file(path: &Path) -> FileVariables {
    match fs::read_to_string(path) {
        Ok(source) => parse_env_source(&source),
        Err(err) => {
            reporter::warn(format!(
                "Cannot read declaration file {}: {}",
                path.display(),
                err
            ));
            FileVariables::new()
        }
    }
}

/// `export KEY=...` is a common shell-compatible spelling; the prefix is
/// not part of the variable name.
fn strip_export_prefix(key: &str) -> &str {
    key.strip_prefix("export ").map(str::trim).unwrap_or(key)
}

/// Strip one pair of matching surrounding quotes. Interpolation inside the
/// value is left untouched.
fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}
