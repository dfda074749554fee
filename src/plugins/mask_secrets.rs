//! Built-in plugin: mask secret-looking default values.
//!
//! Documentation generated from a `.env` file can otherwise leak real
//! credentials; this replaces the default value of any variable whose
//! name looks like a secret before it reaches the report.

use crate::config::Config;
use crate::env_file::FileVariables;
use crate::wildcard;

use super::{Plugin, PluginHost};

/// Replacement text for masked values.
pub const MASK: &str = "********";

const SECRET_NAME_PATTERNS: &[&str] = &["*SECRET*", "*TOKEN*", "*PASSWORD*", "*_KEY"];

pub struct MaskSecrets {
    patterns: Vec<String>,
}

impl MaskSecrets {
    pub fn from_config(_config: &Config) -> Self {
        Self {
            patterns: SECRET_NAME_PATTERNS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl Plugin for MaskSecrets {
    fn apply(self: Box<Self>, host: &mut PluginHost) {
        let patterns = self.patterns;
        host.on_before_parse(move |_file: &str, mut variables: FileVariables| {
            for var in variables.values_mut() {
                if !var.value.is_empty() && wildcard::matches_any(&patterns, &var.name) {
                    var.value = MASK.to_string();
                }
            }
            variables
        });
    }
}
