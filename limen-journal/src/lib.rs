//! Local-only journal of reflections a person chose to keep.
//!
//! Nothing is written unless the caller asks for it: saving is always an
//! explicit action, and deletion is immediate.

#![warn(missing_docs, clippy::pedantic)]

mod error;
mod journal;

pub use error::{JournalError, JournalResult};
pub use journal::{FileJournal, ReflectionJournal};
