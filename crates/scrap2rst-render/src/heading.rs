//! Title and heading rendering.
//!
//! - title: `=` overline and underline, sized with [`measure`]
//! - heading: `=` underline only
//!
//! [`measure`]: scrap2rst_text::measure

use scrap2rst_text::border;

/// Render the page title as an over- and underlined RST title.
pub fn render_title(text: &str) -> Vec<String> {
    let hr = border(text);
    vec![hr.clone(), text.to_string(), hr, String::new()]
}

/// Render a `[* text]` line as an underlined RST section.
pub fn render_heading(text: &str) -> Vec<String> {
    vec![text.to_string(), border(text), String::new()]
}
