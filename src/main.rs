//! scrap2rst - Convert Scrapbox pages into reStructuredText.
//!
//! This binary provides the CLI interface to the scrap2rst library,
//! reading page text from a file or stdin.

mod cli;

use clap::Parser as ClapParser;
use cli::Cli;
use log::{debug, error, info, warn, LevelFilter};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use scrap2rst_config::Config;
use scrap2rst_core::{PageUrl, Result, Scrap2RstError};
use scrap2rst_render::{ConvertOptions, Converter};

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Handle --paths flag
    if cli.show_paths {
        cli::show_paths();
        return;
    }

    setup_logging(cli.effective_log_level());
    info!("scrap2rst v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    let page = cli.url.as_deref().map(PageUrl::parse).transpose()?;

    if cli.api_url {
        if let Some(page) = &page {
            println!("{}", page.api_url());
        }
        return Ok(());
    }

    let config = load_config(cli);
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| page.as_ref().map(PageUrl::base_url));

    let mut options = ConvertOptions::from_config(&config, base_url.as_deref());
    options.strong |= cli.strong;
    if options.base_url.is_empty() {
        warn!("No base URL given; internal links will be relative to /");
    }
    debug!("Base URL: {:?}, strong: {}", options.base_url, options.strong);

    let source = read_source(cli)?;
    let rst = Converter::with_options(options).run(&source);
    write_output(cli, &rst)
}

/// Load configuration with optional overrides.
///
/// A broken config or override is reported and replaced by the defaults.
fn load_config(cli: &Cli) -> Config {
    match Config::load_with_override(cli.config.as_deref()) {
        Ok(config) => {
            if let Some(config_arg) = &cli.config {
                debug!("Merged config override: {}", config_arg);
            }
            config
        }
        Err(e) => {
            error!("Failed to load config: {}", e);
            Config::default()
        }
    }
}

/// Read the page text from the input file or stdin.
fn read_source(cli: &Cli) -> Result<String> {
    let mut bytes = Vec::new();
    match &cli.file {
        Some(path) => {
            info!("Processing file: {}", path.display());
            bytes = fs::read(path)?;
        }
        None => {
            info!("Reading from stdin");
            io::stdin().lock().read_to_end(&mut bytes)?;
        }
    }

    String::from_utf8(bytes).map_err(|e| Scrap2RstError::Input(format!("not UTF-8: {}", e)))
}

/// Write the RST document to the output file or stdout.
fn write_output(cli: &Cli, rst: &str) -> Result<()> {
    match &cli.output {
        Some(path) => write_file(path, rst),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rst.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

fn write_file(path: &Path, rst: &str) -> Result<()> {
    fs::write(path, rst)?;
    info!("Wrote {}", path.display());
    Ok(())
}
