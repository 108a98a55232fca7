/*!
 * Input canonicalization and output whitespace normalization.
 */

use once_cell::sync::Lazy;
use regex::Regex;

static SPACE_RUN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r" {2,}").expect("Invalid space run regex")
});

static LINE_EDGE_SPACES_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^ +| +$").expect("Invalid line edge regex")
});

static BLANK_RUN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n{3,}").expect("Invalid blank run regex")
});

/// Drop a byte-order mark and convert CRLF line endings to LF
pub fn canonicalize(text: &str) -> String {
    text.strip_prefix('\u{feff}')
        .unwrap_or(text)
        .replace("\r\n", "\n")
}

/// Collapse spaces and blank lines and end non-empty text with exactly one newline
pub fn normalize(text: &str) -> String {
    let collapsed = SPACE_RUN_REGEX.replace_all(text, " ");
    // Lines holding only spaces become empty here, before blank runs collapse
    let trimmed_lines = LINE_EDGE_SPACES_REGEX.replace_all(&collapsed, "");
    let compacted = BLANK_RUN_REGEX.replace_all(&trimmed_lines, "\n\n");

    let body = compacted.trim();
    if body.is_empty() {
        return String::new();
    }
    format!("{}\n", body)
}
