//! Leading whitespace handling.
//!
//! Indentation in the notation is counted in characters. A line may be
//! indented with tabs or full-width spaces (U+3000), each of which is one
//! indentation step, so nothing here works in bytes.

/// Number of leading whitespace characters in `line`.
///
/// # Example
///
/// ```
/// use scrap2rst_text::leading_whitespace;
/// assert_eq!(leading_whitespace("  item"), 2);
/// assert_eq!(leading_whitespace("\u{3000}item"), 1);
/// assert_eq!(leading_whitespace("item"), 0);
/// ```
pub fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Split `line` into its leading whitespace and the rest.
pub fn split_indent(line: &str) -> (&str, &str) {
    let body = line.trim_start();
    (&line[..line.len() - body.len()], body)
}

/// Remove up to `count` leading whitespace characters from `line`.
///
/// Stops at the first non-whitespace character, so it never eats content.
///
/// # Example
///
/// ```
/// use scrap2rst_text::strip_indent;
/// assert_eq!(strip_indent("    code", 2), "  code");
/// assert_eq!(strip_indent(" x", 3), "x");
/// ```
pub fn strip_indent(line: &str, count: usize) -> &str {
    let offset = line
        .char_indices()
        .take_while(|(_, c)| c.is_whitespace())
        .take(count)
        .last()
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);
    &line[offset..]
}
