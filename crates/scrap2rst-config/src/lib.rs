//! scrap2rst Config
//!
//! This crate handles configuration loading and management
//! for scrap2rst, supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/scrap2rst/config.toml`
//! - macOS: `~/Library/Application Support/scrap2rst/config.toml`
//! - Windows: `%APPDATA%\scrap2rst\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use scrap2rst_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//!
//! // Or load with an override file
//! let config = Config::load_with_override(Some("./custom.toml")).unwrap();
//! ```

mod convert;
mod features;

pub use convert::ConvertConfig;
pub use features::FeaturesConfig;

use scrap2rst_core::{Result, Scrap2RstError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[features]
Strong = false

[convert]
BaseUrl = ""

# Extra code block languages. Keys starting with "." are file extensions,
# other keys are language names.
[languages]
"#;

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Feature flags configuration
    #[serde(default)]
    pub features: FeaturesConfig,

    /// Conversion settings
    #[serde(default)]
    pub convert: ConvertConfig,

    /// Code block language table additions
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        // Parse the default TOML to ensure consistency
        toml::from_str(DEFAULT_TOML).expect("Default TOML should be valid")
    }
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use scrap2rst_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[features]"));
    /// assert!(toml.contains("[convert]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "scrap2rst")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            Scrap2RstError::Config(format!("Parse error in {}: {}", path.display(), e))
        })
    }

    /// Load configuration with an optional override file or string.
    ///
    /// 1. Load the base config from the default location
    /// 2. If `override_config` is provided:
    ///    - If it's a path to an existing file, load and merge it
    ///    - Otherwise, treat it as a TOML string and parse it
    ///
    /// # Example
    ///
    /// ```no_run
    /// use scrap2rst_config::Config;
    ///
    /// let config = Config::load_with_override(Some("[features]\nStrong = true")).unwrap();
    /// assert!(config.features.strong);
    /// ```
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::load()?;

        if let Some(override_str) = override_config {
            config.merge(&Self::parse_override(override_str)?);
        }

        Ok(config)
    }

    /// Parse an override given either as a file path or inline TOML.
    pub fn parse_override(override_str: &str) -> Result<Self> {
        let override_path = Path::new(override_str);

        let override_toml = if override_path.exists() {
            std::fs::read_to_string(override_path)?
        } else {
            override_str.to_string()
        };

        toml::from_str(&override_toml)
            .map_err(|e| Scrap2RstError::Config(format!("Override parse error: {}", e)))
    }

    /// Merge another config into this one.
    ///
    /// Values from `other` take precedence over values in `self`.
    /// Language entries are added to the existing table.
    ///
    /// # Example
    ///
    /// ```
    /// use scrap2rst_config::Config;
    ///
    /// let mut base = Config::default();
    /// let override_config: Config = toml::from_str(r#"
    ///     [features]
    ///     Strong = true
    /// "#).unwrap();
    ///
    /// base.merge(&override_config);
    /// assert!(base.features.strong);
    /// ```
    pub fn merge(&mut self, other: &Config) {
        self.features.merge(&other.features);
        self.convert.merge(&other.convert);
        self.languages.extend(
            other
                .languages
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );
    }
}
