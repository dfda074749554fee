//! Self-contained HTML rendering.
//!
//! One document, embedded stylesheet, no external assets. Every variable
//! name, value, and description is escaped before interpolation so that a
//! declaration like `<script>=x` cannot inject markup into the report.

use crate::env_file::{AllVariables, EnvVar};
use crate::reporter::pluralize;
use crate::usage::UsageAggregate;

const STYLE: &str = "\
  body { font-family: system-ui, sans-serif; max-width: 54rem; margin: 2rem auto; padding: 0 1rem; color: #222; }\n\
  h2 { border-bottom: 1px solid #ddd; padding-bottom: .25rem; }\n\
  code { background: #f4f4f4; padding: .1rem .3rem; border-radius: 3px; }\n\
  .unused { color: #b45309; font-weight: 600; }\n\
  ul { margin: .25rem 0 1rem 1.25rem; }\n";

/// Escape text for interpolation into HTML element content or attribute
/// values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render(variables: &AllVariables) -> String {
    let mut body = String::new();
    for (file, vars) in variables {
        for var in vars.values() {
            render_variable(&mut body, file, var);
        }
    }

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Environment Variables</title>\n<style>\n{STYLE}</style>\n</head>\n<body>\n\
         <h1>Environment Variables</h1>\n{body}</body>\n</html>\n"
    )
}

fn render_variable(out: &mut String, file: &str, var: &EnvVar) {
    out.push_str(&format!("<h2>{}</h2>\n", escape(&var.name)));

    if let Some(description) = &var.description {
        out.push_str(&format!("<p>{}</p>\n", escape(description)));
    }

    out.push_str(&format!(
        "<p>Declared in <code>{}</code>, default <code>{}</code></p>\n",
        escape(file),
        escape(&var.value)
    ));

    let usage = var.usage.clone().unwrap_or_default();
    render_usage(out, &usage);
}

fn render_usage(out: &mut String, usage: &UsageAggregate) {
    if usage.is_unused() {
        out.push_str("<p class=\"unused\">⚠ unused — no references found</p>\n");
        return;
    }

    out.push_str(&format!(
        "<p>Used {} in {}:</p>\n<ul>\n",
        pluralize(usage.total, "time", "times"),
        pluralize(usage.occurrences.len(), "file", "files")
    ));
    for occurrence in &usage.occurrences {
        out.push_str(&format!(
            "<li><code>{}</code> ({})</li>\n",
            escape(&occurrence.file),
            pluralize(occurrence.count, "occurrence", "occurrences")
        ));
    }
    out.push_str("</ul>\n");
}
