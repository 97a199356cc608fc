//! Inline construct parser.
//!
//! A fragment (a plain line, or the body of a bullet) carries at most one
//! recognized inline construct. Constructs are tried in a fixed order and
//! the first one that matches wins:
//!
//! 1. a `code:LANG` token at the end of the fragment opens a code block
//! 2. the whole fragment is a bracketed image URL
//! 3. `[* text]` emphasis, when enabled
//! 4. the first bracketed span is a link
//!
//! Anything else is returned as plain text.

use regex::Regex;
use scrap2rst_core::ConversionMode;
use std::sync::LazyLock;

/// A `code:LANG` token ending the fragment, at its start or after whitespace
static CODE_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s)code:([^\s\[\]]+)$").unwrap());

/// A fragment that is exactly one bracketed image or gyazo URL
pub(crate) static IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\[(https://gyazo\.com/[^\s\[\]]+|https?://[^\s\[\]]+\.(?i:jpe?g|png|gif|svg|webp))\]$",
    )
    .unwrap()
});

/// The first bracketed span of a fragment: pre, target, post
static SPAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)\[([^\[\]]+)\](.*)$").unwrap());

/// An external link target: URL with an optional title
static EXTERNAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(https?://\S+)(?:\s+(.+))?$").unwrap());

/// An emphasis target: one or more `*`, whitespace, text
static STRONG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\*+)\s+(.+)$").unwrap());

/// Where a bracketed link points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// `[https://...]`: a bare URL
    Url(String),
    /// `[https://... title]`: a URL with link text
    Titled { url: String, title: String },
    /// `[page name]`: a page of the same project
    Page(String),
}

/// Result of parsing one fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    /// Unrecognized text, passed through unchanged
    Text(String),
    /// A `code:LANG` marker; a code block was opened at `indent`
    CodeStart { indent: usize, language: String },
    /// A fragment consisting of a single image URL
    Image { url: String },
    /// A bracketed link with the text around it
    Link {
        pre: String,
        target: LinkTarget,
        post: String,
    },
    /// A `[* text]` emphasis span with the text around it
    Strong {
        pre: String,
        level: usize,
        text: String,
        post: String,
    },
}

type InlineRule = fn(&InlineParser, &str, usize, &mut ConversionMode) -> Option<Inline>;

/// Inline rules in precedence order.
const INLINE_RULES: &[(&str, InlineRule)] = &[
    ("code", InlineParser::try_parse_code_marker),
    ("image", InlineParser::try_parse_image),
    ("strong", InlineParser::try_parse_strong),
    ("link", InlineParser::try_parse_link),
];

/// Inline construct parser.
#[derive(Debug, Clone, Default)]
pub struct InlineParser {
    /// Whether `[* text]` spans are emphasis rather than page links
    pub process_strong: bool,
}

impl InlineParser {
    /// Create a new inline parser.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create parser with specific settings.
    pub fn with_settings(process_strong: bool) -> Self {
        Self { process_strong }
    }

    /// Parse one fragment at structural level `indent`.
    ///
    /// A `code:LANG` marker switches `mode` to an active code block.
    pub fn parse(&self, fragment: &str, indent: usize, mode: &mut ConversionMode) -> Inline {
        for (name, rule) in INLINE_RULES {
            if let Some(inline) = rule(self, fragment, indent, mode) {
                log::trace!("inline matched as {}: {:?}", name, fragment);
                return inline;
            }
        }
        Inline::Text(fragment.to_string())
    }

    fn try_parse_code_marker(
        &self,
        fragment: &str,
        indent: usize,
        mode: &mut ConversionMode,
    ) -> Option<Inline> {
        let caps = CODE_MARKER_RE.captures(fragment)?;
        let language = caps.get(1)?.as_str();
        mode.enter(indent, language);
        Some(Inline::CodeStart {
            indent,
            language: language.to_string(),
        })
    }

    fn try_parse_image(&self, fragment: &str, _: usize, _: &mut ConversionMode) -> Option<Inline> {
        image_url(fragment).map(|url| Inline::Image { url })
    }

    fn try_parse_strong(&self, fragment: &str, _: usize, _: &mut ConversionMode) -> Option<Inline> {
        if !self.process_strong {
            return None;
        }
        let (pre, target, post) = first_span(fragment)?;
        let caps = STRONG_RE.captures(target)?;
        Some(Inline::Strong {
            pre: pre.to_string(),
            level: caps.get(1)?.as_str().len(),
            text: caps.get(2)?.as_str().trim_end().to_string(),
            post: post.to_string(),
        })
    }

    fn try_parse_link(&self, fragment: &str, _: usize, _: &mut ConversionMode) -> Option<Inline> {
        let (pre, target, post) = first_span(fragment)?;
        Some(Inline::Link {
            pre: pre.to_string(),
            target: parse_link_target(target),
            post: post.to_string(),
        })
    }
}

/// Split a fragment around its first bracketed span.
fn first_span(fragment: &str) -> Option<(&str, &str, &str)> {
    let caps = SPAN_RE.captures(fragment)?;
    Some((
        caps.get(1)?.as_str(),
        caps.get(2)?.as_str(),
        caps.get(3)?.as_str(),
    ))
}

/// Classify the text between the brackets of a link.
pub fn parse_link_target(target: &str) -> LinkTarget {
    match EXTERNAL_RE.captures(target.trim()) {
        Some(caps) => {
            let url = caps[1].to_string();
            match caps.get(2) {
                Some(title) => LinkTarget::Titled {
                    url,
                    title: title.as_str().trim_end().to_string(),
                },
                None => LinkTarget::Url(url),
            }
        }
        None => LinkTarget::Page(target.to_string()),
    }
}

/// If `text` is exactly one bracketed image URL, return the normalized URL.
pub fn image_url(text: &str) -> Option<String> {
    IMAGE_RE
        .captures(text)
        .map(|caps| normalize_image_url(&caps[1]))
}

/// Give extension-less gyazo URLs a `.png` extension.
///
/// # Example
///
/// ```
/// use scrap2rst_parser::normalize_image_url;
///
/// assert_eq!(normalize_image_url("https://gyazo.com/abcdefg"), "https://gyazo.com/abcdefg.png");
/// assert_eq!(normalize_image_url("https://gyazo.com/abcdefg.jpg"), "https://gyazo.com/abcdefg.jpg");
/// ```
pub fn normalize_image_url(url: &str) -> String {
    if url.starts_with("https://gyazo.com/") {
        let last_segment = url.rsplit('/').next().unwrap_or_default();
        if !last_segment.contains('.') {
            return format!("{}.png", url);
        }
    }
    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(fragment: &str) -> Inline {
        InlineParser::new().parse(fragment, 0, &mut ConversionMode::Inactive)
    }

    #[test]
    fn test_plain_text_passthrough() {
        assert_eq!(parse("just text"), Inline::Text("just text".to_string()));
        assert_eq!(parse(""), Inline::Text(String::new()));
    }

    #[test]
    fn test_code_marker_enters_mode() {
        let mut mode = ConversionMode::Inactive;
        let inline = InlineParser::new().parse("code:setup.py", 2, &mut mode);
        assert_eq!(
            inline,
            Inline::CodeStart {
                indent: 2,
                language: "setup.py".to_string()
            }
        );
        assert_eq!(mode.base_indent(), Some(2));
    }

    #[test]
    fn test_code_marker_must_end_fragment() {
        let mut mode = ConversionMode::Inactive;
        let inline = InlineParser::new().parse("code:python is nice", 0, &mut mode);
        assert_eq!(inline, Inline::Text("code:python is nice".to_string()));
        assert!(!mode.is_active());
    }

    #[test]
    fn test_code_marker_must_be_a_token() {
        let mut mode = ConversionMode::Inactive;
        let inline = InlineParser::new().parse("Scan the barcode:ABC", 0, &mut mode);
        assert_eq!(inline, Inline::Text("Scan the barcode:ABC".to_string()));
        assert!(!mode.is_active());
    }

    #[test]
    fn test_code_inside_link_url_is_link() {
        let mut mode = ConversionMode::Inactive;
        let inline = InlineParser::new().parse("see [https://example.com/code:abc]", 0, &mut mode);
        assert_eq!(
            inline,
            Inline::Link {
                pre: "see ".to_string(),
                target: LinkTarget::Url("https://example.com/code:abc".to_string()),
                post: String::new(),
            }
        );
        assert!(!mode.is_active());
    }

    #[test]
    fn test_code_marker_wins_over_link() {
        let mut mode = ConversionMode::Inactive;
        let inline = InlineParser::new().parse("[page] code:sh", 0, &mut mode);
        assert!(matches!(inline, Inline::CodeStart { .. }));
        assert!(mode.is_active());
    }

    #[test]
    fn test_image() {
        assert_eq!(
            parse("[https://example.com/a.png]"),
            Inline::Image {
                url: "https://example.com/a.png".to_string()
            }
        );
        assert_eq!(
            parse("[https://example.com/a.JPG]"),
            Inline::Image {
                url: "https://example.com/a.JPG".to_string()
            }
        );
    }

    #[test]
    fn test_gyazo_image_normalized() {
        assert_eq!(
            parse("[https://gyazo.com/abcdefg]"),
            Inline::Image {
                url: "https://gyazo.com/abcdefg.png".to_string()
            }
        );
    }

    #[test]
    fn test_image_with_surrounding_text_is_link() {
        let inline = parse("see [https://example.com/a.png] here");
        assert_eq!(
            inline,
            Inline::Link {
                pre: "see ".to_string(),
                target: LinkTarget::Url("https://example.com/a.png".to_string()),
                post: " here".to_string(),
            }
        );
    }

    #[test]
    fn test_bare_url_link() {
        assert_eq!(
            parse("text [https://example.com/] text"),
            Inline::Link {
                pre: "text ".to_string(),
                target: LinkTarget::Url("https://example.com/".to_string()),
                post: " text".to_string(),
            }
        );
    }

    #[test]
    fn test_titled_link() {
        assert_eq!(
            parse("text [https://example.com/ Example Site] text"),
            Inline::Link {
                pre: "text ".to_string(),
                target: LinkTarget::Titled {
                    url: "https://example.com/".to_string(),
                    title: "Example Site".to_string(),
                },
                post: " text".to_string(),
            }
        );
    }

    #[test]
    fn test_page_link() {
        assert_eq!(
            parse("内部リンク[入り]文章"),
            Inline::Link {
                pre: "内部リンク".to_string(),
                target: LinkTarget::Page("入り".to_string()),
                post: "文章".to_string(),
            }
        );
    }

    #[test]
    fn test_only_first_span_is_used() {
        match parse("[one] and [two]") {
            Inline::Link { pre, target, post } => {
                assert_eq!(pre, "");
                assert_eq!(target, LinkTarget::Page("one".to_string()));
                assert_eq!(post, " and [two]");
            }
            other => panic!("expected link, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_brackets_passthrough() {
        assert_eq!(parse("a [] b"), Inline::Text("a [] b".to_string()));
    }

    #[test]
    fn test_strong_disabled_is_page_link() {
        assert_eq!(
            parse("強調1[* 強い1]文章"),
            Inline::Link {
                pre: "強調1".to_string(),
                target: LinkTarget::Page("* 強い1".to_string()),
                post: "文章".to_string(),
            }
        );
    }

    #[test]
    fn test_strong_enabled() {
        let parser = InlineParser::with_settings(true);
        let inline = parser.parse("強調2[** 強い2]文章", 0, &mut ConversionMode::Inactive);
        assert_eq!(
            inline,
            Inline::Strong {
                pre: "強調2".to_string(),
                level: 2,
                text: "強い2".to_string(),
                post: "文章".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_link_target() {
        assert_eq!(
            parse_link_target("http://url"),
            LinkTarget::Url("http://url".to_string())
        );
        assert_eq!(
            parse_link_target("http://url 入り です"),
            LinkTarget::Titled {
                url: "http://url".to_string(),
                title: "入り です".to_string()
            }
        );
        assert_eq!(
            parse_link_target("ftp://host/file"),
            LinkTarget::Page("ftp://host/file".to_string())
        );
        assert_eq!(
            parse_link_target("page with spaces"),
            LinkTarget::Page("page with spaces".to_string())
        );
    }

    #[test]
    fn test_normalize_image_url() {
        assert_eq!(
            normalize_image_url("https://gyazo.com/abcdefg"),
            "https://gyazo.com/abcdefg.png"
        );
        assert_eq!(
            normalize_image_url("https://gyazo.com/abcdefg.jpg"),
            "https://gyazo.com/abcdefg.jpg"
        );
        assert_eq!(
            normalize_image_url("https://example.com/abcdefg"),
            "https://example.com/abcdefg"
        );
    }
}
