//! Reflection prompt construction from session state.

use std::collections::HashMap;

use limen_session::{SessionError, SessionState, SessionValue, keys};
use tracing::debug;

use crate::template::{PromptTemplate, TemplateError};
use crate::truncate::truncate_chars;

/// Maximum number of characters of reflection text carried into a prompt.
pub const MAX_TEXT_CHARS: usize = 500;

/// Placeholders a reflection template must reference, and nothing else.
pub const REFLECTION_FIELDS: [&str; 2] = [keys::MOOD, keys::TEXT];

/// Template used when configuration does not supply one.
pub const DEFAULT_REFLECTION_TEMPLATE: &str = "The person is feeling: {mood}.\n\n\
     This is what they wrote:\n{text}\n\n\
     Offer a short, gentle reflection that stays with what they shared. \
     Do not give advice or interpret their experience.";

/// Result alias for prompt builds.
pub type BuildResult<T> = Result<T, BuildError>;

/// Errors raised while building a reflection prompt.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Reading session state failed.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// A session value is present but is not text.
    #[error("session value `{key}` is {found}, expected a string")]
    TypeMismatch {
        /// Session key that held the value.
        key: &'static str,
        /// JSON kind of the value that was found.
        found: &'static str,
    },

    /// The template does not match the reflection fields.
    #[error(transparent)]
    Template(#[from] TemplateError),
}

/// Typed view of the session values a reflection prompt needs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReflectionInput {
    /// Free text written by the person.
    pub text: String,
    /// Mood label, inserted verbatim.
    pub mood: String,
}

impl ReflectionInput {
    /// Creates an input from already-typed values.
    #[must_use]
    pub fn new(text: impl Into<String>, mood: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            mood: mood.into(),
        }
    }

    /// Reads `text` then `mood` from the session. Absent keys become empty
    /// strings.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Session`] if the session read fails and
    /// [`BuildError::TypeMismatch`] if a value is not a string.
    pub fn from_session<S: SessionState + ?Sized>(session: &S) -> BuildResult<Self> {
        let text = read_text(session, keys::TEXT)?;
        let mood = read_text(session, keys::MOOD)?;
        Ok(Self { text, mood })
    }
}

fn read_text<S: SessionState + ?Sized>(session: &S, key: &'static str) -> BuildResult<String> {
    match session.get(key)? {
        Some(SessionValue::String(value)) => Ok(value),
        Some(other) => Err(BuildError::TypeMismatch {
            key,
            found: value_kind(&other),
        }),
        None => {
            debug!(key, "session key absent, using empty string");
            Ok(String::new())
        }
    }
}

fn value_kind(value: &SessionValue) -> &'static str {
    match value {
        SessionValue::Null => "null",
        SessionValue::Bool(_) => "a boolean",
        SessionValue::Number(_) => "a number",
        SessionValue::String(_) => "a string",
        SessionValue::Array(_) => "an array",
        SessionValue::Object(_) => "an object",
    }
}

/// Builds bounded reflection prompts from session state.
///
/// # Examples
///
/// ```
/// use limen_prompts::{PromptTemplate, ReflectionPromptBuilder};
/// use limen_session::MemorySession;
///
/// let builder = ReflectionPromptBuilder::new(
///     PromptTemplate::parse("Mood: {mood}. Reflection: {text}").unwrap(),
/// );
/// let session = MemorySession::new();
/// session.set("mood", "calm").unwrap();
/// session.set("text", "Today was fine.").unwrap();
///
/// let prompt = builder.build(&session).unwrap();
/// assert_eq!(prompt, "Mood: calm. Reflection: Today was fine.");
/// ```
#[derive(Clone, Debug)]
pub struct ReflectionPromptBuilder {
    template: PromptTemplate,
}

impl ReflectionPromptBuilder {
    /// Creates a builder around the supplied template.
    #[must_use]
    pub const fn new(template: PromptTemplate) -> Self {
        Self { template }
    }

    /// Returns the template in use.
    #[must_use]
    pub const fn template(&self) -> &PromptTemplate {
        &self.template
    }

    /// Reads the session and renders the prompt.
    ///
    /// The template is checked before the session is read.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Template`] if the template does not reference
    /// exactly `mood` and `text`, otherwise any error from
    /// [`ReflectionInput::from_session`].
    pub fn build<S: SessionState + ?Sized>(&self, session: &S) -> BuildResult<String> {
        self.template.check_fields(&REFLECTION_FIELDS)?;
        let input = ReflectionInput::from_session(session)?;
        self.render(&input)
    }

    /// Renders the prompt from typed input, truncating the text to
    /// [`MAX_TEXT_CHARS`].
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Template`] on a placeholder mismatch.
    pub fn render(&self, input: &ReflectionInput) -> BuildResult<String> {
        let text = truncate_chars(&input.text, MAX_TEXT_CHARS);
        let fields = HashMap::from([(keys::MOOD, input.mood.as_str()), (keys::TEXT, text)]);
        let prompt = self.template.substitute(&fields)?;

        debug!(
            text_bytes = text.len(),
            truncated = text.len() < input.text.len(),
            mood_bytes = input.mood.len(),
            prompt_bytes = prompt.len(),
            "reflection prompt built"
        );
        Ok(prompt)
    }
}

impl Default for ReflectionPromptBuilder {
    fn default() -> Self {
        Self::new(PromptTemplate::parse(DEFAULT_REFLECTION_TEMPLATE).expect("valid template"))
    }
}
