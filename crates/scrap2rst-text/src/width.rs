//! East-Asian-width-aware text measurement.
//!
//! RST requires section borders to be at least as wide as the title they
//! decorate. Titles mixing single- and double-width characters are
//! measured per character: Ambiguous, Fullwidth and Wide characters count
//! 2 columns, everything else counts 1.

use unicode_width::UnicodeWidthChar;

/// Column width of a single character.
///
/// Uses the CJK-context width so Ambiguous characters measure 2.
/// Characters without a width of their own (controls, combining marks)
/// still count as one column.
///
/// # Example
///
/// ```
/// use scrap2rst_text::char_width;
/// assert_eq!(char_width('a'), 1);
/// assert_eq!(char_width('あ'), 2);
/// assert_eq!(char_width('Ａ'), 2);
/// ```
pub fn char_width(c: char) -> usize {
    c.width_cjk().unwrap_or(1).max(1)
}

/// Measure the display width of `text`.
///
/// Additive over concatenation: `measure(a + b) == measure(a) + measure(b)`.
///
/// # Example
///
/// ```
/// use scrap2rst_text::measure;
/// assert_eq!(measure(""), 0);
/// assert_eq!(measure("abc"), 3);
/// assert_eq!(measure("タイトル"), 8);
/// ```
pub fn measure(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

/// A line of `=` exactly as wide as `text`.
pub fn border(text: &str) -> String {
    "=".repeat(measure(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_empty() {
        assert_eq!(measure(""), 0);
    }

    #[test]
    fn test_measure_ascii() {
        assert_eq!(measure("title"), 5);
        assert_eq!(measure("heading2"), 8);
        assert_eq!(measure("a b"), 3);
    }

    #[test]
    fn test_measure_wide() {
        // Hiragana, Katakana and CJK ideographs are Wide
        assert_eq!(measure("あいう"), 6);
        assert_eq!(measure("カタカナ"), 8);
        assert_eq!(measure("漢字"), 4);
    }

    #[test]
    fn test_measure_fullwidth() {
        assert_eq!(measure("ＡＢＣ"), 6);
        // Ideographic space
        assert_eq!(measure("\u{3000}"), 2);
    }

    #[test]
    fn test_measure_halfwidth_katakana() {
        assert_eq!(measure("ｶﾀｶﾅ"), 4);
    }

    #[test]
    fn test_measure_ambiguous() {
        // Greek letters and circled digits are East Asian Ambiguous
        assert_eq!(measure("α"), 2);
        assert_eq!(measure("①"), 2);
    }

    #[test]
    fn test_measure_mixed() {
        assert_eq!(measure("Rust入門"), 8);
        assert_eq!(measure("v1.0 リリース"), 5 + 8);
    }

    #[test]
    fn test_measure_additive() {
        let a = "hello ";
        let b = "世界";
        let joined = format!("{}{}", a, b);
        assert_eq!(measure(&joined), measure(a) + measure(b));
    }

    #[test]
    fn test_control_chars_count_one() {
        assert_eq!(measure("\t"), 1);
    }

    #[test]
    fn test_border() {
        assert_eq!(border("title"), "=====");
        assert_eq!(border("見出し"), "======");
        assert_eq!(border(""), "");
    }
}
