//! Report rendering.
//!
//! Renderers are pure functions from the parsed variable mapping to a
//! `String`; writing the result to disk is the orchestrator's job.

pub mod html;
pub mod json;
pub mod markdown;

use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::env_file::AllVariables;

/// Output format for rendered reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Md,
    Json,
    Html,
}

impl Format {
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Md => "md",
            Format::Json => "json",
            Format::Html => "html",
        }
    }
}

/// Render the full variable mapping in the requested format.
pub fn render(format: Format, variables: &AllVariables) -> Result<String> {
    match format {
        Format::Md => Ok(markdown::render(variables)),
        Format::Json => json::render(variables),
        Format::Html => Ok(html::render(variables)),
    }
}
