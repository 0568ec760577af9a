//! Prompt construction for the Limen reflection space.
//!
//! The centre of the crate is [`ReflectionPromptBuilder`], which reads the
//! written text and mood from session state, bounds the text to
//! [`MAX_TEXT_CHARS`] characters, and substitutes both into a
//! [`PromptTemplate`]. Companion prompts for the empathic response and the
//! guiding question live in [`companion`].

#![warn(missing_docs, clippy::pedantic)]

mod builder;
pub mod companion;
mod system;
mod template;
mod truncate;

pub use builder::{
    BuildError, BuildResult, DEFAULT_REFLECTION_TEMPLATE, MAX_TEXT_CHARS, REFLECTION_FIELDS,
    ReflectionInput, ReflectionPromptBuilder,
};
pub use companion::{CompanionPrompt, PromptKind, companion_prompt, normalize_guiding_question};
pub use system::SystemInstruction;
pub use template::{PromptTemplate, TemplateError, TemplateResult};
pub use truncate::truncate_chars;
