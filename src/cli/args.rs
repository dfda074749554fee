//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `generate`: build full documentation from a configuration file
//! - `audit`: quick usage report for a single `.env` file
//! - `init`: initialize an envdoc configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::report::Format;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Path to the configuration file
    #[arg(long, default_value = "./env-doc.config.json")]
    pub config: PathBuf,

    /// Directory the report is written into
    #[arg(long, default_value = "./docs")]
    pub output: PathBuf,

    /// Project root that input and scan patterns resolve against
    /// (defaults to the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct AuditCommand {
    /// Declaration file to audit
    #[arg(long, default_value = "./.env")]
    pub env: PathBuf,

    /// Report format; the report is written to env-usage.<ext> in the
    /// current directory
    #[arg(long = "output", value_enum, default_value = "md")]
    pub output: Format,

    /// Comma-separated patterns to skip while scanning the tree
    #[arg(long, value_delimiter = ',')]
    pub ignore: Vec<String>,

    /// Project root to scan (defaults to the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate environment variable documentation from the config file
    Generate(GenerateCommand),
    /// Audit one .env file against the project tree and report usage
    Audit(AuditCommand),
    /// Initialize a new env-doc.config.json configuration file
    Init,
}
