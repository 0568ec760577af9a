use std::cell::Cell;
use std::collections::HashMap;

use limen_prompts::{
    BuildError, MAX_TEXT_CHARS, PromptTemplate, ReflectionPromptBuilder, TemplateError,
    truncate_chars,
};
use limen_session::{MemorySession, SessionError, SessionResult, SessionState, SessionValue};
use serde_json::json;

const TEMPLATE: &str = "Mood: {mood}. Reflection: {text}";

fn builder() -> ReflectionPromptBuilder {
    ReflectionPromptBuilder::new(PromptTemplate::parse(TEMPLATE).unwrap())
}

fn session(text: &str, mood: &str) -> MemorySession {
    let session = MemorySession::new();
    session.set("text", text).unwrap();
    session.set("mood", mood).unwrap();
    session
}

/// Session whose reads always fail, counting how often it was consulted.
#[derive(Default)]
struct BrokenSession {
    reads: Cell<usize>,
}

impl SessionState for BrokenSession {
    fn get(&self, _key: &str) -> SessionResult<Option<SessionValue>> {
        self.reads.set(self.reads.get() + 1);
        Err(SessionError::backend("store offline"))
    }
}

#[test]
fn substitutes_mood_and_text() {
    let prompt = builder().build(&session("Today was fine.", "calm")).unwrap();
    assert_eq!(prompt, "Mood: calm. Reflection: Today was fine.");
}

#[test]
fn long_text_keeps_first_five_hundred_characters() {
    let prompt = builder().build(&session(&"x".repeat(600), "tired")).unwrap();

    let reflection = prompt.strip_prefix("Mood: tired. Reflection: ").unwrap();
    assert_eq!(reflection.len(), 500);
    assert!(reflection.chars().all(|c| c == 'x'));
}

#[test]
fn remainder_of_long_text_is_absent() {
    let text = format!("{}{}", "a".repeat(MAX_TEXT_CHARS), "TAIL");
    let prompt = builder().build(&session(&text, "free")).unwrap();

    assert!(prompt.ends_with(&"a".repeat(MAX_TEXT_CHARS)));
    assert!(!prompt.contains("TAIL"));
}

#[test]
fn exactly_five_hundred_characters_are_kept_whole() {
    let text = "ü".repeat(MAX_TEXT_CHARS);
    let prompt = builder().build(&session(&text, "fog")).unwrap();
    assert_eq!(prompt, format!("Mood: fog. Reflection: {text}"));
}

#[test]
fn short_values_appear_verbatim() {
    let cases = [
        ("", ""),
        ("one line", "anxiety"),
        ("multi\nline {with} braces }{", "a mood that is long and unusual"),
        ("🌊 emoji and accents: ação", "😶‍🌫️"),
    ];

    for (text, mood) in cases {
        let prompt = builder().build(&session(text, mood)).unwrap();
        assert_eq!(prompt, format!("Mood: {mood}. Reflection: {text}"));
    }
}

#[test]
fn mood_is_never_truncated() {
    let mood = "m".repeat(800);
    let prompt = builder().build(&session("short", &mood)).unwrap();
    assert!(prompt.contains(&mood));
}

#[test]
fn missing_keys_default_to_empty() {
    let empty = MemorySession::new();
    assert_eq!(builder().build(&empty).unwrap(), "Mood: . Reflection: ");

    let only_mood = HashMap::from([("mood".to_owned(), json!("calm"))]);
    assert_eq!(builder().build(&only_mood).unwrap(), "Mood: calm. Reflection: ");
}

#[test]
fn truncation_is_idempotent() {
    let text = "é🌫x".repeat(300);
    let once = truncate_chars(&text, MAX_TEXT_CHARS);
    assert_eq!(truncate_chars(once, MAX_TEXT_CHARS), once);
}

#[test]
fn template_without_text_is_a_mismatch_regardless_of_session() {
    let builder = ReflectionPromptBuilder::new(PromptTemplate::parse("Mood: {mood}.").unwrap());

    for candidate in [session("hello", "calm"), MemorySession::new()] {
        let err = builder.build(&candidate).expect_err("template lacks text");
        assert!(matches!(
            err,
            BuildError::Template(TemplateError::Mismatch { ref unused, .. }) if unused == &["text"]
        ));
    }

    let broken = BrokenSession::default();
    let err = builder.build(&broken).expect_err("template lacks text");
    assert!(matches!(err, BuildError::Template(_)));
    assert_eq!(broken.reads.get(), 0);
}

#[test]
fn template_with_extra_placeholder_is_a_mismatch() {
    let builder = ReflectionPromptBuilder::new(
        PromptTemplate::parse("{greeting} Mood: {mood}. Reflection: {text}").unwrap(),
    );
    let err = builder.build(&session("t", "m")).expect_err("extra placeholder");
    assert!(matches!(
        err,
        BuildError::Template(TemplateError::Mismatch { ref unfilled, .. }) if unfilled == &["greeting"]
    ));
}

#[test]
fn session_errors_pass_through() {
    let err = builder().build(&BrokenSession::default()).expect_err("broken");
    assert!(matches!(err, BuildError::Session(SessionError::Backend { .. })));
    assert_eq!(err.to_string(), "session backend error: store offline");
}

#[test]
fn build_leaves_session_untouched() {
    let shared = session(&"z".repeat(700), "heavy");
    let before = shared.snapshot().unwrap();

    builder().build(&shared).unwrap();
    assert_eq!(shared.snapshot().unwrap(), before);
}

#[test]
fn builds_are_deterministic() {
    let state = session("same input", "same mood");
    let first = builder().build(&state).unwrap();
    let second = builder().build(&state).unwrap();
    assert_eq!(first, second);
}

#[test]
fn works_through_trait_objects() {
    let state = session("dyn", "boxed");
    let handle: &dyn SessionState = &state;
    assert_eq!(builder().build(handle).unwrap(), "Mood: boxed. Reflection: dyn");
}
