//! Session state access for reflection flows.
//!
//! Session state is owned by the hosting layer. Consumers read it through the
//! [`SessionState`] trait and never retain a handle beyond a single call.

#![warn(missing_docs, clippy::pedantic)]

mod error;
mod memory;
mod state;

pub use error::{SessionError, SessionResult};
pub use memory::MemorySession;
pub use state::SessionState;

/// Loosely typed value stored under a session key.
pub use serde_json::Value as SessionValue;

pub mod keys {
    //! Well-known session keys.

    /// Free-text reflection written by the person.
    pub const TEXT: &str = "text";
    /// Mood label selected before writing.
    pub const MOOD: &str = "mood";
}
