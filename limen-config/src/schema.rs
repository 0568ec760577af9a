//! Strongly typed configuration schema.

use std::path::PathBuf;

use limen_prompts::{PromptTemplate, ReflectionPromptBuilder};
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LimenConfig {
    /// Prompt construction settings.
    pub prompts: PromptsConfig,
    /// Reflection journal settings.
    pub journal: JournalConfig,
    /// Logging settings.
    pub telemetry: TelemetryConfig,
}

/// `[prompts]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PromptsConfig {
    /// Template with `{mood}` and `{text}` placeholders.
    pub reflection_template: PromptTemplate,
}

impl PromptsConfig {
    /// Returns a prompt builder using the configured template.
    #[must_use]
    pub fn reflection_builder(&self) -> ReflectionPromptBuilder {
        ReflectionPromptBuilder::new(self.reflection_template.clone())
    }
}

impl Default for PromptsConfig {
    fn default() -> Self {
        Self {
            reflection_template: ReflectionPromptBuilder::default().template().clone(),
        }
    }
}

/// `[journal]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JournalConfig {
    /// Newline-delimited JSON file holding saved reflections.
    pub path: PathBuf,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("limen-reflections.ndjson"),
        }
    }
}

/// `[telemetry]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TelemetryConfig {
    /// `tracing` filter directive, overridden by `RUST_LOG` when set.
    pub filter: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_owned(),
        }
    }
}
