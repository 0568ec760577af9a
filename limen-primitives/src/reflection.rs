//! Reflections a person explicitly chose to keep.

use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::{Mood, ReflectionId};

/// A single written reflection, tagged with the mood it was written in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reflection {
    id: ReflectionId,
    created_at: SystemTime,
    mood: Mood,
    text: String,
}

impl Reflection {
    /// Starts building a [`Reflection`] for the supplied mood.
    #[must_use]
    pub fn builder(mood: Mood) -> ReflectionBuilder {
        ReflectionBuilder {
            id: ReflectionId::random(),
            created_at: SystemTime::now(),
            mood,
            text: None,
        }
    }

    /// Returns the reflection identifier.
    #[must_use]
    pub const fn id(&self) -> ReflectionId {
        self.id
    }

    /// Returns when the reflection was written.
    #[must_use]
    pub const fn created_at(&self) -> SystemTime {
        self.created_at
    }

    /// Returns the mood selected before writing.
    #[must_use]
    pub const fn mood(&self) -> Mood {
        self.mood
    }

    /// Returns the written text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Builder for [`Reflection`].
#[derive(Debug)]
pub struct ReflectionBuilder {
    id: ReflectionId,
    created_at: SystemTime,
    mood: Mood,
    text: Option<String>,
}

impl ReflectionBuilder {
    /// Sets the written text.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidReflection`] when the text is blank.
    pub fn text(mut self, text: impl Into<String>) -> crate::Result<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(crate::Error::InvalidReflection {
                reason: "reflection text cannot be empty".into(),
            });
        }
        self.text = Some(text);
        Ok(self)
    }

    /// Overrides the generated identifier.
    #[must_use]
    pub fn id(mut self, id: ReflectionId) -> Self {
        self.id = id;
        self
    }

    /// Overrides the creation timestamp.
    #[must_use]
    pub fn created_at(mut self, created_at: SystemTime) -> Self {
        self.created_at = created_at;
        self
    }

    /// Consumes the builder and returns the reflection.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidReflection`] if no text was provided.
    pub fn build(self) -> crate::Result<Reflection> {
        let text = self.text.ok_or_else(|| crate::Error::InvalidReflection {
            reason: "reflection text must be provided".into(),
        })?;

        Ok(Reflection {
            id: self.id,
            created_at: self.created_at,
            mood: self.mood,
            text,
        })
    }
}
