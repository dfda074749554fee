//! Console output helpers.
//!
//! Kept separate from the pipeline logic so envdoc can be used as a
//! library without printing side effects.

use colored::Colorize;

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓
/// Failure mark for consistent output formatting
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a non-fatal diagnostic to stderr.
pub fn warn(message: impl AsRef<str>) {
    eprintln!("{} {}", "warning:".bold().yellow(), message.as_ref());
}

/// Print a success line to stdout.
pub fn success(message: impl AsRef<str>) {
    println!("{} {}", SUCCESS_MARK.green(), message.as_ref().green());
}

/// "1 file" / "2 files" style counts for summary lines.
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}
