//! Core shared types for the Limen reflection space.

#![warn(missing_docs, clippy::pedantic)]

mod error;
mod ids;
mod mood;
mod reflection;

/// Error type and result alias shared across the workspace.
pub use error::{Error, Result};
/// Unique identifier for a saved reflection.
pub use ids::ReflectionId;
/// Emotional states a person can select before writing.
pub use mood::{Mood, MoodProfile};
/// Saved reflection entries and their builder.
pub use reflection::{Reflection, ReflectionBuilder};
