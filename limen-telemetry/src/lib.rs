//! Structured logging setup.
//!
//! Installs a `tracing-subscriber` formatter as the global default. The
//! `RUST_LOG` environment variable takes precedence over the configured
//! directive.

#![warn(missing_docs, clippy::pedantic)]

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The filter directive could not be parsed.
    #[error("invalid log filter `{directive}`: {source}")]
    Filter {
        /// Directive that failed to parse.
        directive: String,
        /// Source parse error.
        source: ParseError,
    },

    /// A global subscriber was already installed.
    #[error("tracing subscriber already installed")]
    AlreadyInstalled,
}

/// Builds the filter: `RUST_LOG` when set, otherwise `directive`.
///
/// # Errors
///
/// Returns [`TelemetryError::Filter`] if `directive` is invalid and
/// `RUST_LOG` is unset.
pub fn env_filter(directive: &str) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(directive).map_err(|source| TelemetryError::Filter {
        directive: directive.to_owned(),
        source,
    })
}

/// Installs the global fmt subscriber.
///
/// # Errors
///
/// Returns [`TelemetryError::Filter`] on an invalid directive and
/// [`TelemetryError::AlreadyInstalled`] if called twice.
pub fn try_init(directive: &str) -> Result<(), TelemetryError> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(directive)?)
        .with_target(false)
        .try_init()
        .map_err(|_| TelemetryError::AlreadyInstalled)
}

/// Installs the global fmt subscriber, ignoring a previous installation.
///
/// An invalid directive falls back to `info`.
pub fn init(directive: &str) {
    match try_init(directive) {
        Ok(()) | Err(TelemetryError::AlreadyInstalled) => {}
        Err(e @ TelemetryError::Filter { .. }) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::new("info"))
                .with_target(false)
                .try_init();
            tracing::warn!(error = %e, "falling back to `info` log filter");
        }
    }
}
