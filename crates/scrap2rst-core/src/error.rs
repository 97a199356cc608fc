//! Error types for scrap2rst

use thiserror::Error;

/// Main error type for scrap2rst operations.
///
/// The conversion itself never fails; these errors come from the
/// collaborators around it (reading input, configuration, page URLs).
#[derive(Error, Debug)]
pub enum Scrap2RstError {
    /// IO error while reading the source or writing output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The page URL could not be parsed or has no project segment
    #[error("Invalid page URL: {0}")]
    Url(String),

    /// The source document is unusable (e.g. not UTF-8)
    #[error("Input error: {0}")]
    Input(String),
}

impl From<url::ParseError> for Scrap2RstError {
    fn from(err: url::ParseError) -> Self {
        Scrap2RstError::Url(err.to_string())
    }
}

/// Result type alias for scrap2rst operations
pub type Result<T> = std::result::Result<T, Scrap2RstError>;
