//! Simple `*` wildcard matching for variable names.
//!
//! Used by the `exclude` configuration (drop variables from the report by
//! name) and by the `mask-secrets` plugin. `*` matches any run of
//! characters, including none; matching is case-sensitive.

/// Match a variable name against a wildcard pattern.
pub fn matches(pattern: &str, name: &str) -> bool {
    if pattern == "*" {
        return true;
    }
    if !pattern.contains('*') {
        return pattern == name;
    }

    let parts: Vec<&str> = pattern.split('*').collect();

    let mut pos = 0;

    // First part must be a prefix
    if !parts[0].is_empty() {
        if !name.starts_with(parts[0]) {
            return false;
        }
        pos = parts[0].len();
    }

    // Last part must be a suffix
    let last = parts[parts.len() - 1];
    let end = if last.is_empty() {
        name.len()
    } else {
        if !name.ends_with(last) {
            return false;
        }
        // Check for overlap between prefix and suffix
        if pos + last.len() > name.len() {
            return false;
        }
        name.len() - last.len()
    };

    // Middle parts must appear in order
    for part in &parts[1..parts.len() - 1] {
        if part.is_empty() {
            continue;
        }
        if let Some(found) = name[pos..end].find(part) {
            pos = pos + found + part.len();
        } else {
            return false;
        }
    }

    true
}

/// True if `name` matches any of the given patterns.
pub fn matches_any<I, S>(patterns: I, name: &str) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    patterns.into_iter().any(|p| matches(p.as_ref(), name))
}
