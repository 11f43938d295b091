//! Error types for ancestry construction and its host layer.

use thiserror::Error;

/// Errors raised while configuring or running the ancestry pipeline.
///
/// Only configuration can fail once items are in memory; graph construction
/// itself is total over well-formed path strings.
#[derive(Debug, Error)]
pub enum AncestryError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Can't handle matcher: {0}")]
    InvalidMatcher(String),

    #[error("Invalid glob pattern: {0}")]
    InvalidGlob(#[from] globset::Error),

    #[error("Invalid regular expression: {0}")]
    InvalidRegex(#[from] regex::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Path not found: {0}")]
    PathNotFound(String),
}

impl AncestryError {
    /// Raised by option resolution rather than by reading input.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            AncestryError::ConfigError(_)
                | AncestryError::InvalidMatcher(_)
                | AncestryError::InvalidGlob(_)
                | AncestryError::InvalidRegex(_)
        )
    }
}

impl From<config::ConfigError> for AncestryError {
    fn from(err: config::ConfigError) -> Self {
        AncestryError::ConfigError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AncestryError>;
