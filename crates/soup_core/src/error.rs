//! Error types for soup_core.
//!
//! Only configuration loading can fail; the simulation itself is total.

use thiserror::Error;

/// Failure while loading or validating a configuration document.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// File system errors
    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    /// Missing or malformed keys
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Values that parse but make no sense
    #[error("Validation error: {0}")]
    Validation(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    Context {
        context: String,
        source: Box<ConfigError>,
    },
}

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

impl ConfigError {
    #[must_use]
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::Validation(msg.into())
    }

    /// Wraps an error with additional context.
    #[must_use]
    pub fn with_context<S: Into<String>>(self, context: S) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }
}
