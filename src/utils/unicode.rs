use unicode_width::UnicodeWidthStr;

pub fn first_char_as_str(s: &str) -> &str {
    if s.is_empty() {
        return "";
    }
    let end = s.char_indices()
        .nth(1)
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    &s[..end]
}

/// Terminal columns a string occupies.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Horizontal rule as wide as `s` renders, at least `min` columns.
pub fn rule_for(s: &str, min: usize) -> String {
    "─".repeat(display_width(s).max(min))
}
