use std::{fs, path::Path};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::report::Format;

pub const CONFIG_FILE_NAME: &str = "env-doc.config.json";

/// Top-level configuration consumed by the primary (generate) mode.
///
/// Loaded once at startup and read-only thereafter. Every field has a
/// default so a partial config file parses.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Plugin identifiers, applied in order. Resolved against the
    /// built-in registry.
    #[serde(default)]
    pub plugins: Vec<String>,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub output: OutputConfig,
    /// Wildcard patterns on variable names to drop from the report.
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Declaration-file sources: explicit paths and/or glob patterns.
#[derive(Debug, Deserialize, Serialize)]
pub struct InputConfig {
    #[serde(default = "default_input_files")]
    pub files: Vec<String>,
    #[serde(default)]
    pub patterns: Vec<String>,
}

/// Files to scan for usage, and exclusions applied at discovery time.
#[derive(Debug, Deserialize, Serialize)]
pub struct ScanConfig {
    #[serde(default = "default_scan_patterns")]
    pub patterns: Vec<String>,
    #[serde(default = "default_scan_ignore")]
    pub ignore: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: Format,
    #[serde(default = "default_output_file")]
    pub file: String,
}

fn default_input_files() -> Vec<String> {
    vec![".env".to_string()]
}

fn default_scan_patterns() -> Vec<String> {
    ["**/*.js", "**/*.mjs", "**/*.cjs", "**/*.jsx", "**/*.ts", "**/*.tsx"]
        .map(String::from)
        .to_vec()
}

fn default_scan_ignore() -> Vec<String> {
    ["**/node_modules/**", "**/dist/**", "**/build/**", "**/.git/**"]
        .map(String::from)
        .to_vec()
}

fn default_output_file() -> String {
    "env-vars.md".to_string()
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            files: default_input_files(),
            patterns: Vec::new(),
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            patterns: default_scan_patterns(),
            ignore: default_scan_ignore(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: Format::default(),
            file: default_output_file(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern is invalid.
    pub fn validate(&self) -> Result<()> {
        for (field, patterns) in [
            ("input.patterns", &self.input.patterns),
            ("scan.patterns", &self.scan.patterns),
            ("scan.ignore", &self.scan.ignore),
        ] {
            for pattern in patterns {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in '{}': \"{}\"", field, pattern)
                })?;
            }
        }
        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

/// Load and validate the configuration file. A missing or malformed file
/// is fatal for the generate mode.
pub fn load_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Cannot read config file: {}", path.display()))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    config.validate()?;
    Ok(config)
}
