//! Companion prompts: the empathic response and the guiding question.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use limen_primitives::Mood;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::system::SystemInstruction;
use crate::template::{PromptTemplate, TemplateResult};

const EMPATHIC_RESPONSE_INSTRUCTION: &str = include_str!("../instructions/empathic_response.md");
const GUIDING_QUESTION_INSTRUCTION: &str = include_str!("../instructions/guiding_question.md");

const EMPATHIC_RESPONSE_MESSAGE: &str = "## EMOTIONAL CONTEXT\n\
     The person chose \"{name}\" to describe their current state.\n\
     It usually carries: {qualities}\n\
     How to meet it: {approach}\n\
     \n\
     ## WHAT THEY WROTE\n\
     {text}\n\
     \n\
     ---\n\
     \n\
     Write a short, empathic response that witnesses what they shared. \
     No advice, no interpretation. Only presence and acknowledgement.";

const GUIDING_QUESTION_MESSAGE: &str = "## EMOTIONAL CONTEXT\n\
     The person is in a \"{name}\" state.\n\
     It usually carries: {qualities}\n\
     How to meet it: {approach}\n\
     \n\
     ---\n\
     \n\
     Write ONE reflective question of at most 12 words that gently invites them \
     to explore what is present right now. Let it resonate with their state \
     without naming it or leading them.";

static EMPATHIC_RESPONSE_TEMPLATE: LazyLock<TemplateResult<PromptTemplate>> =
    LazyLock::new(|| PromptTemplate::parse(EMPATHIC_RESPONSE_MESSAGE));
static GUIDING_QUESTION_TEMPLATE: LazyLock<TemplateResult<PromptTemplate>> =
    LazyLock::new(|| PromptTemplate::parse(GUIDING_QUESTION_MESSAGE));

/// Which companion generation a prompt is for.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptKind {
    /// A four-paragraph witnessing response to a written reflection.
    EmpathicResponse,
    /// A single open question offered before writing.
    GuidingQuestion,
}

impl PromptKind {
    /// Returns the system instruction for this kind.
    #[must_use]
    pub fn system_instruction(self) -> SystemInstruction {
        match self {
            Self::EmpathicResponse => EMPATHIC_RESPONSE_INSTRUCTION.into(),
            Self::GuidingQuestion => GUIDING_QUESTION_INSTRUCTION.into(),
        }
    }

    /// Built-in user message template, parsed on first use.
    fn message_template(self) -> TemplateResult<&'static PromptTemplate> {
        let parsed = match self {
            Self::EmpathicResponse => &*EMPATHIC_RESPONSE_TEMPLATE,
            Self::GuidingQuestion => &*GUIDING_QUESTION_TEMPLATE,
        };
        parsed.as_ref().map_err(Clone::clone)
    }
}

impl fmt::Display for PromptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::EmpathicResponse => "empathic_response",
            Self::GuidingQuestion => "guiding_question",
        })
    }
}

/// System instruction plus user message for one companion generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompanionPrompt {
    /// Instruction steering the model.
    pub system: SystemInstruction,
    /// User message carrying the emotional context.
    pub user: String,
}

/// Builds the companion prompt for `kind`.
///
/// Unknown mood labels fall back to [`Mood::Free`]. The reflection text is only
/// used for [`PromptKind::EmpathicResponse`].
///
/// # Errors
///
/// Returns a [`crate::TemplateError`] if a built-in message template fails to
/// render.
pub fn companion_prompt(
    kind: PromptKind,
    mood: &str,
    text: &str,
) -> TemplateResult<CompanionPrompt> {
    let resolved = Mood::resolve(mood);
    let profile = resolved.profile();

    let mut fields = HashMap::from([
        ("name", profile.label),
        ("qualities", profile.qualities),
        ("approach", profile.approach),
    ]);
    if kind == PromptKind::EmpathicResponse {
        fields.insert("text", text);
    }

    let user = kind.message_template()?.substitute(&fields)?;
    debug!(%kind, mood = %resolved, "companion prompt built");

    Ok(CompanionPrompt {
        system: kind.system_instruction(),
        user,
    })
}

/// Cleans a generated guiding question: trims whitespace, drops one wrapping
/// quote on either end, and makes sure it ends with `?`.
#[must_use]
pub fn normalize_guiding_question(raw: &str) -> String {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix(['"', '\'']).unwrap_or(trimmed);
    let trimmed = trimmed
        .strip_suffix(['"', '\''])
        .unwrap_or(trimmed)
        .trim();

    let mut question = trimmed.to_owned();
    if !question.ends_with('?') {
        question.push('?');
    }
    question
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_templates_reference_expected_fields() {
        let empathic = PromptKind::EmpathicResponse.message_template().unwrap();
        assert_eq!(
            empathic.placeholders().into_iter().collect::<Vec<_>>(),
            ["approach", "name", "qualities", "text"]
        );

        let guiding = PromptKind::GuidingQuestion.message_template().unwrap();
        assert_eq!(
            guiding.placeholders().into_iter().collect::<Vec<_>>(),
            ["approach", "name", "qualities"]
        );

        let again = PromptKind::GuidingQuestion.message_template().unwrap();
        assert!(std::ptr::eq(guiding, again));
    }

    #[test]
    fn empathic_prompt_carries_text_and_profile() {
        let prompt = companion_prompt(
            PromptKind::EmpathicResponse,
            "overwhelm",
            "Too much at once.",
        )
        .unwrap();

        assert!(prompt.user.contains("\"Storm\""));
        assert!(prompt.user.contains(Mood::Overwhelm.profile().qualities));
        assert!(prompt.user.contains("Too much at once."));
        assert!(prompt.system.content().contains("four paragraphs"));
    }

    #[test]
    fn guiding_prompt_ignores_text() {
        let prompt = companion_prompt(PromptKind::GuidingQuestion, "confusion", "secret").unwrap();

        assert!(prompt.user.contains("\"Fog\""));
        assert!(!prompt.user.contains("secret"));
        assert!(prompt.system.content().contains("twelve words"));
    }

    #[test]
    fn unknown_mood_uses_clearing() {
        let prompt = companion_prompt(PromptKind::GuidingQuestion, "elated", "").unwrap();
        assert!(prompt.user.contains("\"Clearing\""));
    }

    #[test]
    fn text_with_braces_is_inserted_verbatim() {
        let prompt = companion_prompt(PromptKind::EmpathicResponse, "free", "{name} }{").unwrap();
        assert!(prompt.user.contains("{name} }{"));
    }

    #[test]
    fn normalizes_questions() {
        assert_eq!(normalize_guiding_question("  \"What remains?\"  "), "What remains?");
        assert_eq!(normalize_guiding_question("'What is here'"), "What is here?");
        assert_eq!(normalize_guiding_question("What is alive now?"), "What is alive now?");
        assert_eq!(normalize_guiding_question(""), "?");
    }
}
