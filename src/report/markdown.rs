//! Markdown rendering.

use crate::env_file::{AllVariables, EnvVar};
use crate::reporter::pluralize;
use crate::usage::UsageAggregate;

/// Warning marker rendered for variables with no references.
pub const UNUSED_MARK: &str = "⚠ **unused** — no references found";

pub fn render(variables: &AllVariables) -> String {
    let mut out = String::from("# Environment Variables\n");

    for (file, vars) in variables {
        for var in vars.values() {
            out.push('\n');
            render_variable(&mut out, file, var);
        }
    }

    out
}

fn render_variable(out: &mut String, file: &str, var: &EnvVar) {
    out.push_str(&format!("## {}\n\n", var.name));

    if let Some(description) = &var.description {
        out.push_str(description);
        out.push_str("\n\n");
    }

    out.push_str(&format!("- Declared in: `{}`\n", file));
    out.push_str(&format!("- Default: `{}`\n", var.value));

    let usage = var.usage.clone().unwrap_or_default();
    render_usage(out, &usage);
}

fn render_usage(out: &mut String, usage: &UsageAggregate) {
    if usage.is_unused() {
        out.push_str(&format!("- {}\n", UNUSED_MARK));
        return;
    }

    out.push_str(&format!(
        "- Used {} in {}:\n",
        pluralize(usage.total, "time", "times"),
        pluralize(usage.occurrences.len(), "file", "files")
    ));
    for occurrence in &usage.occurrences {
        out.push_str(&format!(
            "  - `{}` ({})\n",
            occurrence.file,
            pluralize(occurrence.count, "occurrence", "occurrences")
        ));
    }
}
