//! Indentation-delimited code blocks.
//!
//! A `code:LANG` marker opens a block (see [`crate::inline`]). There is no
//! closing marker: the block continues while lines are indented deeper
//! than the marker's structural level and ends at the first line that is
//! not. That line is not consumed here; it goes through normal
//! classification.

use scrap2rst_core::ConversionMode;
use scrap2rst_text::{leading_whitespace, strip_indent};

/// A code body line with `base_indent` whitespace characters removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeLine {
    pub base_indent: usize,
    pub text: String,
}

/// Advance the code block state machine by one line.
///
/// Returns the body line while the block continues. Otherwise leaves
/// `mode` inactive and returns `None`.
pub fn continue_code_block(mode: &mut ConversionMode, line: &str) -> Option<CodeLine> {
    let base_indent = mode.base_indent()?;

    if leading_whitespace(line) > base_indent {
        Some(CodeLine {
            base_indent,
            text: strip_indent(line, base_indent).to_string(),
        })
    } else {
        log::trace!("code block at level {} closed by {:?}", base_indent, line);
        mode.exit();
        None
    }
}
