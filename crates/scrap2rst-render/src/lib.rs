//! scrap2rst Render
//!
//! Turns [`ParseEvent`]s into reStructuredText lines and drives whole
//! document conversion.
//!
//! # Overview
//!
//! - [`Renderer`] - renders one event at a time and collects link targets
//! - [`LinkTargetTable`] - `.. _title: url` targets written at document end
//! - [`Converter`] - the full `text -> text` conversion
//!
//! # Example
//!
//! ```
//! use scrap2rst_render::convert;
//!
//! let rst = convert("title\ntext [target] text\n", "https://example.com/proj");
//! assert!(rst.starts_with("=====\ntitle\n=====\n\n"));
//! assert!(rst.contains("text `target`_ text"));
//! assert!(rst.ends_with(".. _target: https://example.com/proj/target\n"));
//! ```

pub mod code;
pub mod convert;
pub mod heading;
pub mod links;
pub mod list;

pub use code::{render_code_directive, render_code_line};
pub use convert::{convert, ConvertOptions, Converter};
pub use heading::{render_heading, render_title};
pub use links::LinkTargetTable;
pub use list::render_bullet;

use scrap2rst_parser::{Inline, LinkTarget, ParseEvent};
use scrap2rst_syntax::LanguageTable;

/// Settings the renderer needs to resolve links and code languages.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Base URL for internal page references, without a trailing `/`
    pub base_url: String,
    /// Code block language table
    pub languages: LanguageTable,
}

impl RenderOptions {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            languages: LanguageTable::new(),
        }
    }

    /// URL of an internal page reference.
    pub fn page_url(&self, page: &str) -> String {
        format!("{}/{}", self.base_url, page.replace(' ', "_"))
    }
}

/// RST renderer for one document.
///
/// Link targets accumulate across [`Renderer::render_event`] calls and are
/// emitted by [`Renderer::finish`].
#[derive(Debug)]
pub struct Renderer {
    options: RenderOptions,
    links: LinkTargetTable,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            links: LinkTargetTable::new(),
        }
    }

    /// Link targets registered so far.
    pub fn links(&self) -> &LinkTargetTable {
        &self.links
    }

    /// Render the output lines for one source line.
    pub fn render_event(&mut self, event: &ParseEvent) -> Vec<String> {
        match event {
            ParseEvent::Title(text) => render_title(text),
            ParseEvent::Heading(text) => render_heading(text),
            ParseEvent::Bullet {
                indent,
                body,
                continues,
            } => {
                let body = self.render_inline(body);
                render_bullet(*indent, &body, *continues)
            }
            ParseEvent::Figure { url } => {
                vec![String::new(), format!(".. figure:: {}", url), String::new()]
            }
            ParseEvent::CodeLine(line) => vec![render_code_line(line)],
            ParseEvent::Plain(inline) => vec![self.render_inline(inline)],
        }
    }

    /// Render one inline construct, registering any link target it defines.
    pub fn render_inline(&mut self, inline: &Inline) -> String {
        match inline {
            Inline::Text(text) => text.clone(),
            Inline::CodeStart { indent, language } => {
                let language = self.options.languages.resolve(language);
                render_code_directive(*indent, &language.name)
            }
            Inline::Image { url } => format!(".. image:: {}", url),
            Inline::Link { pre, target, post } => {
                format!("{}{}{}", pre, self.render_link(target), post)
            }
            Inline::Strong {
                pre, text, post, ..
            } => format!("{}**{}**{}", pre, text, post),
        }
    }

    fn render_link(&mut self, target: &LinkTarget) -> String {
        match target {
            LinkTarget::Url(url) => url.clone(),
            LinkTarget::Titled { url, title } => {
                self.links.register(title, url);
                format!("`{}`_", title)
            }
            LinkTarget::Page(page) => {
                let url = self.options.page_url(page);
                self.links.register(page, &url);
                format!("`{}`_", page)
            }
        }
    }

    /// Finish the document, returning the link target block.
    pub fn finish(self) -> Vec<String> {
        self.links.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrap2rst_parser::CodeLine;

    fn renderer() -> Renderer {
        Renderer::new(RenderOptions::new("https://example.com/proj"))
    }

    fn link(pre: &str, target: LinkTarget, post: &str) -> Inline {
        Inline::Link {
            pre: pre.to_string(),
            target,
            post: post.to_string(),
        }
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let options = RenderOptions::new("https://example.com/proj/");
        assert_eq!(options.page_url("a b"), "https://example.com/proj/a_b");
    }

    #[test]
    fn test_render_figure() {
        let lines = renderer().render_event(&ParseEvent::Figure {
            url: "https://example.com/image.png".to_string(),
        });
        assert_eq!(lines, vec!["", ".. figure:: https://example.com/image.png", ""]);
    }

    #[test]
    fn test_render_image_inline_has_no_blank_lines() {
        let out = renderer().render_inline(&Inline::Image {
            url: "https://gyazo.com/x.png".to_string(),
        });
        assert_eq!(out, ".. image:: https://gyazo.com/x.png");
    }

    #[test]
    fn test_render_bare_url() {
        let mut r = renderer();
        let out = r.render_inline(&link(
            "text ",
            LinkTarget::Url("https://example.com/".to_string()),
            " text",
        ));
        assert_eq!(out, "text https://example.com/ text");
        assert!(r.links().is_empty());
    }

    #[test]
    fn test_render_titled_link_registers_target() {
        let mut r = renderer();
        let out = r.render_inline(&link(
            "text ",
            LinkTarget::Titled {
                url: "https://example.com/".to_string(),
                title: "Example".to_string(),
            },
            " text",
        ));
        assert_eq!(out, "text `Example`_ text");
        assert_eq!(r.links().get("Example"), Some("https://example.com/"));
    }

    #[test]
    fn test_render_page_link() {
        let mut r = renderer();
        let out = r.render_inline(&link("", LinkTarget::Page("my page".to_string()), "!"));
        assert_eq!(out, "`my page`_!");
        assert_eq!(
            r.links().get("my page"),
            Some("https://example.com/proj/my_page")
        );
    }

    #[test]
    fn test_render_code_start_resolves_language() {
        let mut r = renderer();
        let out = r.render_inline(&Inline::CodeStart {
            indent: 1,
            language: "install.sh".to_string(),
        });
        assert_eq!(out, "\n  .. code:: shell\n");
    }

    #[test]
    fn test_render_code_start_unknown_language_verbatim() {
        let mut r = renderer();
        let out = r.render_inline(&Inline::CodeStart {
            indent: 0,
            language: "rust".to_string(),
        });
        assert_eq!(out, "\n.. code:: rust\n");
    }

    #[test]
    fn test_render_code_line() {
        let lines = renderer().render_event(&ParseEvent::CodeLine(CodeLine {
            base_indent: 0,
            text: "  block".to_string(),
        }));
        assert_eq!(lines, vec!["    block"]);
    }

    #[test]
    fn test_render_strong() {
        let out = renderer().render_inline(&Inline::Strong {
            pre: "a ".to_string(),
            level: 1,
            text: "bold".to_string(),
            post: " b".to_string(),
        });
        assert_eq!(out, "a **bold** b");
    }

    #[test]
    fn test_finish_dumps_links() {
        let mut r = renderer();
        r.render_inline(&link("", LinkTarget::Page("target".to_string()), ""));
        assert_eq!(
            r.finish(),
            vec!["", "", ".. _target: https://example.com/proj/target"]
        );
    }
}
