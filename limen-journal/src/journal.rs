//! Durable reflection journal implementations.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use limen_primitives::{Reflection, ReflectionId};
use tokio::fs::{self, File, OpenOptions};
use tokio::io::{AsyncSeekExt, AsyncWriteExt};
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use crate::{JournalError, JournalResult};

/// Trait implemented by reflection journals.
#[async_trait]
pub trait ReflectionJournal: Send + Sync {
    /// Saves a reflection.
    async fn save(&self, reflection: &Reflection) -> JournalResult<()>;

    /// Returns every saved reflection, newest first.
    async fn list(&self) -> JournalResult<Vec<Reflection>>;

    /// Deletes the reflection with the given identifier.
    ///
    /// Returns whether a reflection was removed.
    async fn delete(&self, id: ReflectionId) -> JournalResult<bool>;

    /// Deletes every saved reflection.
    async fn clear(&self) -> JournalResult<()>;
}

/// File-backed journal writing newline-delimited JSON entries.
pub struct FileJournal {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileJournal {
    /// Opens (or creates) a journal file at the provided path.
    ///
    /// # Errors
    ///
    /// Propagates I/O errors encountered while preparing the file.
    pub async fn open(path: impl Into<PathBuf>) -> JournalResult<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let file = open_append(&path).await?;
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    /// Returns the underlying path of the journal file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every entry in file order (oldest first).
    async fn read_all(&self) -> JournalResult<Vec<Reflection>> {
        let data = fs::read(&self.path).await?;
        data.split(|byte| *byte == b'\n')
            .filter(|chunk| !chunk.is_empty())
            .map(|chunk| serde_json::from_slice::<Reflection>(chunk).map_err(JournalError::from))
            .collect()
    }
}

async fn open_append(path: &Path) -> JournalResult<File> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .read(true)
        .open(path)
        .await?;
    Ok(file)
}

async fn write_entry(file: &mut File, reflection: &Reflection) -> JournalResult<()> {
    let line = serde_json::to_vec(reflection)?;
    file.write_all(&line).await?;
    file.write_u8(b'\n').await?;
    Ok(())
}

#[async_trait]
impl ReflectionJournal for FileJournal {
    async fn save(&self, reflection: &Reflection) -> JournalResult<()> {
        let mut guard = self.file.lock().await;
        write_entry(&mut guard, reflection).await?;
        guard.flush().await?;
        debug!(id = %reflection.id(), mood = %reflection.mood(), "reflection saved");
        Ok(())
    }

    async fn list(&self) -> JournalResult<Vec<Reflection>> {
        let _guard = self.file.lock().await;
        let mut reflections = self.read_all().await?;
        reflections.reverse();
        Ok(reflections)
    }

    async fn delete(&self, id: ReflectionId) -> JournalResult<bool> {
        let mut guard = self.file.lock().await;
        let reflections = self.read_all().await?;
        let before = reflections.len();
        let kept: Vec<_> = reflections.into_iter().filter(|r| r.id() != id).collect();
        if kept.len() == before {
            return Ok(false);
        }

        // The journal is only replaced once the staged copy is complete.
        let staging = self.path.with_extension(format!("{}.tmp", Uuid::new_v4()));
        let mut replacement = File::create(&staging).await?;
        for reflection in &kept {
            write_entry(&mut replacement, reflection).await?;
        }
        replacement.sync_all().await?;
        drop(replacement);
        if let Err(err) = fs::rename(&staging, &self.path).await {
            let _ = fs::remove_file(&staging).await;
            return Err(err.into());
        }

        *guard = open_append(&self.path).await?;
        debug!(%id, remaining = kept.len(), "reflection deleted");
        Ok(true)
    }

    async fn clear(&self) -> JournalResult<()> {
        let mut guard = self.file.lock().await;
        guard.rewind().await?;
        guard.set_len(0).await?;
        guard.flush().await?;
        debug!(path = %self.path.display(), "journal cleared");
        Ok(())
    }
}
