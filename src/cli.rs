//! Command-line interface for scrap2rst.

use clap::Parser;
use std::path::PathBuf;

/// scrap2rst - Convert Scrapbox pages into reStructuredText.
///
/// Reads the raw text of a page (as served by the Scrapbox text API) and
/// writes the equivalent RST document.
#[derive(Parser, Debug)]
#[command(
    name = "scrap2rst",
    version,
    about = "Convert Scrapbox pages into reStructuredText",
    after_help = "Examples:\n  \
                  scrap2rst page.txt -b https://scrapbox.io/proj\n  \
                  curl -s \"$(scrap2rst --api-url -u https://scrapbox.io/proj/page)\" \\\n    \
                  | scrap2rst -u https://scrapbox.io/proj/page -o page.rst"
)]
pub struct Cli {
    /// Page text to convert (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Page URL; internal links resolve against its project
    #[arg(short = 'u', long = "url", value_name = "PAGE_URL")]
    pub url: Option<String>,

    /// Base URL for internal links (overrides --url and the config)
    #[arg(short = 'b', long = "base-url", value_name = "URL")]
    pub base_url: Option<String>,

    /// Write output to a file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Debug mode (same as --loglevel debug)
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,

    /// Render [* text] spans as **text** instead of page links
    #[arg(long = "strong")]
    pub strong: bool,

    /// Print the text API URL for --url and exit
    #[arg(long = "api-url", requires = "url")]
    pub api_url: bool,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,
}

impl Cli {
    /// The log level to use, taking --debug into account.
    pub fn effective_log_level(&self) -> &str {
        if self.debug {
            "debug"
        } else {
            &self.log_level
        }
    }

    /// Check if we should read from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.file.is_none()
    }
}

/// Show paths information.
pub fn show_paths() {
    use scrap2rst_config::Config;

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
}
