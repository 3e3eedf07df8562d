//! Error types for configuration loading and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading, parsing or validating a scoring configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Config text is not valid TOML for [`crate::ScoringConfig`].
    #[error("invalid config toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Values parsed but violate a constraint.
    #[error("invalid config: {0}")]
    Invalid(String),
}
