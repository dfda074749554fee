//! Envdoc - environment variable documentation generator
//!
//! Envdoc is a CLI tool and library that cross-references the variables
//! declared in `.env`-style files with their usage sites in a project's
//! source tree, and renders the result as Markdown, HTML, or JSON.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands and dispatch)
//! - `config`: Configuration file loading and parsing
//! - `discovery`: Glob-based file discovery
//! - `env_file`: Declaration file parsing
//! - `plugins`: Plugin host, registry, and built-in plugins
//! - `report`: Markdown/HTML/JSON renderers
//! - `reporter`: Console output helpers
//! - `scanner`: Textual usage pattern scanning
//! - `usage`: Usage aggregation types
//! - `wildcard`: Variable-name wildcard matching

pub mod cli;
pub mod config;
pub mod discovery;
pub mod env_file;
pub mod plugins;
pub mod report;
pub mod reporter;
pub mod scanner;
pub mod usage;
pub mod wildcard;
