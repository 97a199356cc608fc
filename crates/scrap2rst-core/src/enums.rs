//! Core enums for scrap2rst conversion state.
//!
//! These enums represent the structural role of each processed line and
//! the code-block mode carried from one line to the next.

/// The structural role assigned to one source line.
///
/// Exactly one entry is recorded per processed line. Indent levels are
/// structural levels (leading whitespace length minus one for bullets),
/// not character counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineState {
    /// First line of the document
    Title,
    /// A whole-line `[* text]` heading
    Heading,
    /// A whitespace-indented bullet at the given level
    Bullet(usize),
    /// A whole-line image rendered as a figure
    Figure,
    /// A code-block body line belonging to a block opened at the given level
    Code(usize),
    /// Anything else, including empty lines
    Plain,
}

impl std::fmt::Display for LineState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineState::Title => write!(f, "title"),
            LineState::Heading => write!(f, "heading"),
            LineState::Bullet(indent) => write!(f, "bullet({})", indent),
            LineState::Figure => write!(f, "figure"),
            LineState::Code(indent) => write!(f, "code({})", indent),
            LineState::Plain => write!(f, "plain"),
        }
    }
}

/// Code-block tracking mode.
///
/// The notation has no closing marker for code blocks, so a block stays
/// active for as long as following lines are indented deeper than
/// `base_indent`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum ConversionMode {
    /// Not inside a code block
    #[default]
    Inactive,
    /// Inside a code block opened by a `code:LANG` marker
    Active {
        /// Structural indent of the line that carried the marker
        base_indent: usize,
        /// The raw `LANG` tag from the marker
        language: String,
    },
}

impl ConversionMode {
    /// Whether a code block is currently open.
    pub fn is_active(&self) -> bool {
        matches!(self, ConversionMode::Active { .. })
    }

    /// Open a code block at `base_indent`.
    pub fn enter(&mut self, base_indent: usize, language: impl Into<String>) {
        *self = ConversionMode::Active {
            base_indent,
            language: language.into(),
        };
    }

    /// Close the open code block, if any.
    pub fn exit(&mut self) {
        *self = ConversionMode::Inactive;
    }

    /// Base indent of the open code block.
    pub fn base_indent(&self) -> Option<usize> {
        match self {
            ConversionMode::Active { base_indent, .. } => Some(*base_indent),
            ConversionMode::Inactive => None,
        }
    }
}

impl std::fmt::Display for ConversionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionMode::Inactive => write!(f, "inactive"),
            ConversionMode::Active {
                base_indent,
                language,
            } => write!(f, "active({}, {})", base_indent, language),
        }
    }
}
