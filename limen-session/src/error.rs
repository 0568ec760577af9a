//! Error types for session access.

use thiserror::Error;

/// Errors emitted while reading or writing session state.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A writer panicked while holding the session lock.
    #[error("session state lock poisoned")]
    Poisoned,
    /// A host-provided session backend failed.
    #[error("session backend error: {reason}")]
    Backend {
        /// Human-readable reason describing the failure.
        reason: String,
    },
}

impl SessionError {
    /// Helper to construct backend errors from string-like values.
    #[must_use]
    pub fn backend(reason: impl Into<String>) -> Self {
        Self::Backend {
            reason: reason.into(),
        }
    }
}

/// Result type alias for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
