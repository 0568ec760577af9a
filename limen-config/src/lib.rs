//! Configuration management for Limen.
//!
//! Settings live in a single TOML file. Every section is optional and falls
//! back to built-in defaults; the reflection template is validated on load so
//! a template with the wrong placeholders is reported as a configuration
//! error instead of surfacing on the first prompt build.

#![warn(missing_docs, clippy::pedantic)]

mod error;
mod loader;
mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::CONFIG_ENV_VAR;
pub use schema::{JournalConfig, LimenConfig, PromptsConfig, TelemetryConfig};
