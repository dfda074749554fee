//! JSON rendering.
//!
//! A direct structural serialization of the variable mapping. Key order is
//! the input (declaration/discovery) order, so the output is stable and
//! round-trips through `serde_json` back to the same value.

use anyhow::{Context, Result};

use crate::env_file::AllVariables;

pub fn render(variables: &AllVariables) -> Result<String> {
    serde_json::to_string_pretty(variables).context("Failed to serialize report to JSON")
}
