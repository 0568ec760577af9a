//! Walks one reflection through the session, the prompt builders, and the journal.
//!
//! Usage: `reflection-prompt [--save] [MOOD] [TEXT]`
//!
//! Nothing is written to the journal unless `--save` is given.

use anyhow::Result;
use limen::config::LimenConfig;
use limen::journal::{FileJournal, ReflectionJournal};
use limen::primitives::{Mood, Reflection};
use limen::prompts::{PromptKind, companion_prompt};
use limen::session::{MemorySession, SessionState, keys};
use tracing::info;

/// Command-line arguments of the walkthrough.
#[derive(Debug, PartialEq, Eq)]
struct Args {
    mood: String,
    text: String,
    save: bool,
}

impl Args {
    fn parse(raw: impl IntoIterator<Item = String>) -> Self {
        let (flags, positional): (Vec<_>, Vec<_>) =
            raw.into_iter().partition(|arg| arg == "--save");
        let mut positional = positional.into_iter();
        let mood = positional.next().unwrap_or_else(|| Mood::Overwhelm.to_string());
        let text = positional.next().unwrap_or_else(|| {
            "Everything arrived at once this week and I could not put any of it down.".to_owned()
        });
        Self {
            mood,
            text,
            save: !flags.is_empty(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = LimenConfig::from_env();
    limen::telemetry::init(&config.telemetry.filter);

    let Args { mood, text, save } = Args::parse(std::env::args().skip(1));

    println!("=== Limen: Reflection Prompt Example ===\n");

    let session = MemorySession::new();
    session.set(keys::MOOD, mood.as_str())?;

    // Step 1: a guiding question before writing
    let guiding = companion_prompt(PromptKind::GuidingQuestion, &mood, "")?;
    println!("--- Guiding question prompt ---\n{}\n", guiding.user);
    let profile = Mood::resolve(&mood).profile();
    println!("Offline fallback question: {}\n", profile.guiding_questions[0]);

    // Step 2: the written reflection
    session.set(keys::TEXT, text.as_str())?;
    let builder = config.prompts.reflection_builder();
    let prompt = builder.build(&session)?;
    println!("--- Reflection prompt ---\n{prompt}\n");

    let empathic = companion_prompt(PromptKind::EmpathicResponse, &mood, &text)?;
    println!(
        "--- Empathic response prompt ({} chars of system instruction) ---\n{}\n",
        empathic.system.content().chars().count(),
        empathic.user
    );

    // Step 3: keep it, only when asked to
    let written = session.get_or(keys::TEXT, "")?;
    let written = written.as_str().filter(|t| !t.trim().is_empty());
    if !save {
        info!("journal untouched; pass --save to keep this reflection");
    } else if let Some(written) = written {
        let journal = FileJournal::open(&config.journal.path).await?;
        let reflection = Reflection::builder(Mood::resolve(&mood)).text(written)?.build()?;
        journal.save(&reflection).await?;
        let saved = journal.list().await?.len();
        info!(path = %journal.path().display(), saved, "reflection kept");
    }

    session.clear()?;
    Ok(())
}
