//! Error types for the reflection journal.

use serde_json::Error as SerdeError;
use thiserror::Error;

/// Errors emitted by journal implementations.
#[derive(Debug, Error)]
pub enum JournalError {
    /// Underlying I/O failure while reading or writing journal files.
    #[error("i/o error: {source}")]
    Io {
        /// Source [`std::io::Error`].
        #[from]
        source: std::io::Error,
    },
    /// A journal line could not be serialized or parsed.
    #[error("serialization error: {source}")]
    Serialization {
        /// Source [`serde_json::Error`].
        #[from]
        source: SerdeError,
    },
}

/// Result type alias for journal operations.
pub type JournalResult<T> = Result<T, JournalError>;
