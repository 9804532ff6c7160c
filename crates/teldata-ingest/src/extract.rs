//! Line cleaning: trim, drop blanks, strip manual enumeration ("12. ").

use once_cell::sync::Lazy;
use regex::Regex;

static ENUMERATION_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\s*").expect("valid enumeration regex"));

/// Remove a leading `<digits>.<optional whitespace>` marker, if present.
pub fn strip_enumeration(line: &str) -> &str {
    match ENUMERATION_PREFIX.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

/// Split raw file content into cleaned, non-empty entries in file order.
pub fn extract_lines(content: &str) -> Vec<String> {
    content
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let cleaned = strip_enumeration(line).trim();
            if cleaned.is_empty() {
                tracing::debug!("Dropping enumeration-only line: {:?}", line);
                None
            } else {
                Some(cleaned.to_string())
            }
        })
        .collect()
}
