//! Configuration loading.

use std::path::Path;

use limen_prompts::REFLECTION_FIELDS;
use tracing::{debug, warn};

use crate::{ConfigError, ConfigResult, LimenConfig};

/// Environment variable naming the configuration file.
pub const CONFIG_ENV_VAR: &str = "LIMEN_CONFIG";

impl LimenConfig {
    /// Parses and validates configuration text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for invalid TOML and
    /// [`ConfigError::Template`] when the reflection template does not
    /// reference exactly `mood` and `text`.
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks cross-field invariants that the schema cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Template`] on a placeholder mismatch.
    pub fn validate(&self) -> ConfigResult<()> {
        self.prompts
            .reflection_template
            .check_fields(&REFLECTION_FIELDS)?;
        Ok(())
    }

    /// Loads configuration from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read, otherwise any
    /// error from [`LimenConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        debug!(path = %path.display(), "loaded config from file");
        Ok(config)
    }

    /// Loads configuration from `path`, falling back to defaults when the file
    /// is missing or invalid.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(ConfigError::Read { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                debug!(path = %path.display(), "config file not found, using defaults");
                Self::default()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load config file, using defaults");
                Self::default()
            }
        }
    }

    /// Loads the file named by [`CONFIG_ENV_VAR`], or defaults when unset.
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load_or_default(path),
            None => {
                debug!("{CONFIG_ENV_VAR} not set, using default config");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use limen_prompts::{DEFAULT_REFLECTION_TEMPLATE, TemplateError};
    use uuid::Uuid;

    use super::*;

    fn temp_path() -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("limen-config-{}.toml", Uuid::new_v4()));
        path
    }

    #[test]
    fn parses_full_config() {
        let toml = r#"
[prompts]
reflection_template = "Mood: {mood}. Reflection: {text}"

[journal]
path = "/var/lib/limen/reflections.ndjson"

[telemetry]
filter = "limen=debug"
"#;
        let config = LimenConfig::from_toml_str(toml).unwrap();
        assert_eq!(
            config.prompts.reflection_template.source(),
            "Mood: {mood}. Reflection: {text}"
        );
        assert_eq!(
            config.journal.path,
            PathBuf::from("/var/lib/limen/reflections.ndjson")
        );
        assert_eq!(config.telemetry.filter, "limen=debug");
    }

    #[test]
    fn parses_empty_config() {
        let config = LimenConfig::from_toml_str("").unwrap();
        assert_eq!(
            config.prompts.reflection_template.source(),
            DEFAULT_REFLECTION_TEMPLATE
        );
        assert_eq!(config.telemetry.filter, "info");
    }

    #[test]
    fn template_missing_text_is_rejected() {
        let err = LimenConfig::from_toml_str("[prompts]\nreflection_template = \"Mood: {mood}\"")
            .expect_err("should fail");
        assert!(matches!(
            err,
            ConfigError::Template {
                source: TemplateError::Mismatch { .. }
            }
        ));
    }

    #[test]
    fn malformed_template_is_a_parse_error() {
        let err = LimenConfig::from_toml_str("[prompts]\nreflection_template = \"{mood\"")
            .expect_err("should fail");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = LimenConfig::from_toml_str("[prompts]\ntemplate = \"x\"").expect_err("typo");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn loads_from_file() {
        let path = temp_path();
        std::fs::write(&path, "[telemetry]\nfilter = \"warn\"\n").unwrap();

        let config = LimenConfig::load(&path).unwrap();
        assert_eq!(config.telemetry.filter, "warn");

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = temp_path();
        assert!(matches!(
            LimenConfig::load(&path),
            Err(ConfigError::Read { .. })
        ));

        let config = LimenConfig::load_or_default(&path);
        assert_eq!(config.telemetry.filter, "info");
    }

    #[test]
    fn invalid_file_falls_back_to_defaults() {
        let path = temp_path();
        std::fs::write(&path, "[prompts]\nreflection_template = \"{text} only\"\n").unwrap();

        let config = LimenConfig::load_or_default(&path);
        assert_eq!(
            config.prompts.reflection_template.source(),
            DEFAULT_REFLECTION_TEMPLATE
        );

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn configured_builder_uses_template() {
        let config =
            LimenConfig::from_toml_str("[prompts]\nreflection_template = \"{mood}|{text}\"").unwrap();
        let builder = config.prompts.reflection_builder();
        let prompt = builder
            .render(&limen_prompts::ReflectionInput::new("t", "m"))
            .unwrap();
        assert_eq!(prompt, "m|t");
    }
}
