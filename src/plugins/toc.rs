//! Built-in plugin: table of contents for Markdown reports.

use crate::env_file::AllVariables;

use super::{Plugin, PluginHost};

const MARKDOWN_HEADING: &str = "# Environment Variables";

pub struct TableOfContents;

impl Plugin for TableOfContents {
    fn apply(self: Box<Self>, host: &mut PluginHost) {
        host.on_before_output(|rendered: String, all: &AllVariables| {
            // Only Markdown reports start with the known heading; JSON and
            // HTML (or a report already replaced by an earlier hook) pass
            // through untouched.
            let Some(rest) = rendered.strip_prefix(MARKDOWN_HEADING) else {
                return rendered;
            };

            let mut toc = String::from("\n\n## Contents\n\n");
            for variables in all.values() {
                for name in variables.keys() {
                    toc.push_str(&format!("- [{}](#{})\n", name, anchor(name)));
                }
            }

            format!("{}{}{}", MARKDOWN_HEADING, toc, rest)
        });
    }
}

/// GitHub-style heading anchor: lowercased, spaces to dashes,
/// punctuation other than `-` and `_` dropped.
fn anchor(name: &str) -> String {
    name.chars()
        .filter_map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                Some(c.to_ascii_lowercase())
            } else if c == ' ' {
                Some('-')
            } else {
                None
            }
        })
        .collect()
}
