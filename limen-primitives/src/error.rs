//! Shared error definitions for Limen primitives.

use thiserror::Error;
use uuid::Error as UuidError;

/// Result alias used throughout the reflection crates.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while manipulating primitive types.
#[derive(Debug, Error)]
pub enum Error {
    /// The provided reflection identifier could not be parsed.
    #[error("invalid reflection id: {source}")]
    InvalidReflectionId {
        /// Source parsing error from the UUID library.
        #[from]
        source: UuidError,
    },

    /// The supplied mood label is not one of the known emotional states.
    #[error("unknown mood `{label}`")]
    UnknownMood {
        /// The offending label.
        label: String,
    },

    /// Reflection record failed validation.
    #[error("invalid reflection: {reason}")]
    InvalidReflection {
        /// Human-readable reason for rejection.
        reason: String,
    },
}
