//! Whole-document conversion.
//!
//! [`Converter::run`] makes one forward pass over the source lines. The
//! only state carried from line to line is the [`LineHistory`] and the
//! [`ConversionMode`]; both live for a single run, as does the link
//! target table inside the [`Renderer`].

use crate::{RenderOptions, Renderer};
use scrap2rst_config::Config;
use scrap2rst_core::{ConversionMode, LineHistory};
use scrap2rst_parser::Parser;
use scrap2rst_syntax::LanguageTable;

/// Everything that shapes a conversion besides the source text.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Base URL for internal page references
    pub base_url: String,
    /// Render `[* text]` spans as emphasis
    pub strong: bool,
    /// Code block language table
    pub languages: LanguageTable,
}

impl ConvertOptions {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Self::default()
        }
    }

    /// Options from a loaded [`Config`].
    ///
    /// An explicit `base_url` wins over the configured one.
    pub fn from_config(config: &Config, base_url: Option<&str>) -> Self {
        let base_url = base_url
            .or_else(|| config.convert.base_url())
            .unwrap_or_default();
        Self {
            base_url: base_url.to_string(),
            strong: config.features.strong,
            languages: LanguageTable::new().with_overrides(&config.languages),
        }
    }
}

/// Scrapbox-to-RST converter.
#[derive(Debug, Clone)]
pub struct Converter {
    parser: Parser,
    render_options: RenderOptions,
}

impl Converter {
    pub fn new(base_url: &str) -> Self {
        Self::with_options(ConvertOptions::new(base_url))
    }

    pub fn with_options(options: ConvertOptions) -> Self {
        let mut render_options = RenderOptions::new(&options.base_url);
        render_options.languages = options.languages;
        Self {
            parser: Parser::with_settings(options.strong),
            render_options,
        }
    }

    /// Convert one page to RST.
    ///
    /// Every output line is terminated by `\n`; an empty source yields an
    /// empty string.
    pub fn run(&self, source: &str) -> String {
        let mut history = LineHistory::new();
        let mut mode = ConversionMode::Inactive;
        let mut renderer = Renderer::new(self.render_options.clone());
        let mut lines = Vec::new();

        for (ordinal, line) in source.lines().enumerate() {
            let event = self
                .parser
                .parse_line(line, ordinal, &mut history, &mut mode);
            lines.extend(renderer.render_event(&event));
        }
        lines.extend(renderer.finish());

        log::info!(
            "converted {} source lines into {} output lines",
            history.len(),
            lines.len()
        );

        let mut output = String::with_capacity(source.len() * 2);
        for line in &lines {
            output.push_str(line);
            output.push('\n');
        }
        output
    }
}

/// Convert `source` with default options and the given base URL.
pub fn convert(source: &str, base_url: &str) -> String {
    Converter::new(base_url).run(source)
}
