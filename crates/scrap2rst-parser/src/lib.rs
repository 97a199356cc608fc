//! scrap2rst Parser
//!
//! Classifies each line of a Scrapbox page into a structural event for
//! the RST renderer.
//!
//! # Overview
//!
//! The parser works one line at a time. The state carried between lines
//! is owned by the caller and passed in explicitly:
//!
//! - a [`LineHistory`], consulted for the previous line's state only
//! - a [`ConversionMode`], tracking an open code block
//!
//! # Example
//!
//! ```
//! use scrap2rst_core::{ConversionMode, LineHistory};
//! use scrap2rst_parser::{ParseEvent, Parser};
//!
//! let parser = Parser::new();
//! let mut history = LineHistory::new();
//! let mut mode = ConversionMode::Inactive;
//!
//! let event = parser.parse_line("My Page", 0, &mut history, &mut mode);
//! assert_eq!(event, ParseEvent::Title("My Page".to_string()));
//!
//! let event = parser.parse_line("[* Section]", 1, &mut history, &mut mode);
//! assert_eq!(event, ParseEvent::Heading("Section".to_string()));
//! ```

pub mod code;
pub mod inline;

pub use code::{continue_code_block, CodeLine};
pub use inline::{
    image_url, normalize_image_url, parse_link_target, Inline, InlineParser, LinkTarget,
};

use regex::Regex;
use scrap2rst_core::{ConversionMode, LineHistory, LineState};
use scrap2rst_text::{leading_whitespace, split_indent};
use std::sync::LazyLock;

// =============================================================================
// Regex patterns
// =============================================================================

/// Regex for a whole-line heading: `[* text]`
static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[\* (.*)\]$").unwrap());

// =============================================================================
// Types
// =============================================================================

/// Events emitted by the parser, one per source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseEvent {
    /// The first line of the page
    Title(String),
    /// A `[* text]` line
    Heading(String),
    /// A whitespace-indented line
    Bullet {
        indent: usize,
        body: Inline,
        /// Whether the previous line was a bullet at the same level
        continues: bool,
    },
    /// A line holding a single image URL
    Figure { url: String },
    /// A line inside an open code block
    CodeLine(CodeLine),
    /// Anything else
    Plain(Inline),
}

impl ParseEvent {
    /// The line state recorded for this event.
    pub fn state(&self) -> LineState {
        match self {
            ParseEvent::Title(_) => LineState::Title,
            ParseEvent::Heading(_) => LineState::Heading,
            ParseEvent::Bullet { indent, .. } => LineState::Bullet(*indent),
            ParseEvent::Figure { .. } => LineState::Figure,
            ParseEvent::CodeLine(line) => LineState::Code(line.base_indent),
            ParseEvent::Plain(_) => LineState::Plain,
        }
    }
}

/// One source line and what the classifier may look at besides it.
#[derive(Debug, Clone, Copy)]
struct LineInput<'a> {
    line: &'a str,
    ordinal: usize,
    history: &'a LineHistory,
}

type BlockRule = fn(&Parser, &LineInput<'_>, &mut ConversionMode) -> Option<ParseEvent>;

/// Block rules in precedence order; the first match wins.
const BLOCK_RULES: &[(&str, BlockRule)] = &[
    ("code", Parser::try_parse_code_line),
    ("title", Parser::try_parse_title),
    ("heading", Parser::try_parse_heading),
    ("bullet", Parser::try_parse_bullet),
    ("figure", Parser::try_parse_figure),
    ("plain", Parser::parse_plain),
];

// =============================================================================
// Parser
// =============================================================================

/// Line classifier for the Scrapbox notation.
///
/// The parser holds settings only; all per-document state is passed to
/// [`Parser::parse_line`].
#[derive(Debug, Clone, Default)]
pub struct Parser {
    inline_parser: InlineParser,
}

impl Parser {
    /// Create a new parser with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with `[* text]` emphasis enabled or disabled.
    pub fn with_settings(process_strong: bool) -> Self {
        Self {
            inline_parser: InlineParser::with_settings(process_strong),
        }
    }

    /// Classify line number `ordinal` (zero-based).
    ///
    /// Appends exactly one entry to `history`. May open or close the code
    /// block tracked by `mode`.
    pub fn parse_line(
        &self,
        line: &str,
        ordinal: usize,
        history: &mut LineHistory,
        mode: &mut ConversionMode,
    ) -> ParseEvent {
        let input = LineInput {
            line,
            ordinal,
            history: &*history,
        };

        let (name, event) = BLOCK_RULES
            .iter()
            .find_map(|(name, rule)| rule(self, &input, mode).map(|event| (*name, event)))
            .unwrap_or_else(|| ("plain", ParseEvent::Plain(Inline::Text(line.to_string()))));

        log::debug!("line {} matched as {}: {:?}", ordinal + 1, name, line);
        history.push(event.state());
        event
    }

    /// Parse a whole document, threading fresh state through every line.
    pub fn parse_document(&self, text: &str) -> Vec<ParseEvent> {
        let mut history = LineHistory::new();
        let mut mode = ConversionMode::Inactive;
        text.lines()
            .enumerate()
            .map(|(ordinal, line)| self.parse_line(line, ordinal, &mut history, &mut mode))
            .collect()
    }

    // =========================================================================
    // Block rules
    // =========================================================================

    fn try_parse_code_line(
        &self,
        input: &LineInput<'_>,
        mode: &mut ConversionMode,
    ) -> Option<ParseEvent> {
        continue_code_block(mode, input.line).map(ParseEvent::CodeLine)
    }

    fn try_parse_title(&self, input: &LineInput<'_>, _: &mut ConversionMode) -> Option<ParseEvent> {
        (input.ordinal == 0).then(|| ParseEvent::Title(input.line.to_string()))
    }

    fn try_parse_heading(
        &self,
        input: &LineInput<'_>,
        _: &mut ConversionMode,
    ) -> Option<ParseEvent> {
        let caps = HEADING_RE.captures(input.line)?;
        Some(ParseEvent::Heading(caps[1].to_string()))
    }

    fn try_parse_bullet(
        &self,
        input: &LineInput<'_>,
        mode: &mut ConversionMode,
    ) -> Option<ParseEvent> {
        let depth = leading_whitespace(input.line);
        if depth == 0 {
            return None;
        }

        let indent = depth - 1;
        let (_, body) = split_indent(input.line);
        Some(ParseEvent::Bullet {
            indent,
            body: self.inline_parser.parse(body, indent, mode),
            continues: input.history.continues_bullet(indent),
        })
    }

    fn try_parse_figure(
        &self,
        input: &LineInput<'_>,
        _: &mut ConversionMode,
    ) -> Option<ParseEvent> {
        image_url(input.line).map(|url| ParseEvent::Figure { url })
    }

    fn parse_plain(&self, input: &LineInput<'_>, mode: &mut ConversionMode) -> Option<ParseEvent> {
        Some(ParseEvent::Plain(self.inline_parser.parse(input.line, 0, mode)))
    }
}
