//! Configuration errors.

use std::path::PathBuf;

use limen_prompts::TemplateError;
use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Source I/O error.
        source: std::io::Error,
    },

    /// The configuration text is not valid TOML for the schema.
    #[error("invalid config: {source}")]
    Parse {
        /// Source TOML error.
        #[from]
        source: toml::de::Error,
    },

    /// The configured reflection template does not reference exactly
    /// `mood` and `text`.
    #[error("invalid reflection template: {source}")]
    Template {
        /// Source template error.
        #[from]
        source: TemplateError,
    },
}

/// Result alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
