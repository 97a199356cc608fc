//! Code block rendering.
//!
//! The `code:LANG` marker becomes a `.. code::` directive at the marker's
//! level; body lines are indented one level deeper than the directive.

use crate::list::indent_prefix;
use scrap2rst_parser::CodeLine;

/// The directive opening a code block, surrounded by blank lines.
///
/// Returned as one string with embedded newlines, since it replaces the
/// body of a single source line.
pub fn render_code_directive(indent: usize, language: &str) -> String {
    format!("\n{}.. code:: {}\n", indent_prefix(indent), language)
}

/// A code body line, re-indented under its directive.
pub fn render_code_line(line: &CodeLine) -> String {
    format!("{}{}", indent_prefix(line.base_indent + 1), line.text)
}
