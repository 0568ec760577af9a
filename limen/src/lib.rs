//! Limen reflection space facade.
//!
//! Depend on this crate to get the prompt builder together with the optional
//! session store, reflection journal, configuration, and logging crates behind
//! feature flags.

#![warn(missing_docs, clippy::pedantic)]

/// Re-export shared primitives for convenience.
pub use limen_primitives as primitives;

/// Reflection and companion prompt construction.
pub use limen_prompts as prompts;

/// Session state access (enabled by `session` feature).
#[cfg(feature = "session")]
pub use limen_session as session;

/// Local reflection journal (enabled by `journal` feature).
#[cfg(feature = "journal")]
pub use limen_journal as journal;

/// TOML configuration (enabled by `config` feature).
#[cfg(feature = "config")]
pub use limen_config as config;

/// Structured logging setup (enabled by `telemetry` feature).
#[cfg(feature = "telemetry")]
pub use limen_telemetry as telemetry;
