//! In-process session store shared between the flow steps of one interaction.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::Value;
use tracing::debug;

use crate::{SessionError, SessionResult, SessionState};

/// Thread-safe in-memory session state.
///
/// Reads take a shared lock, so independent prompt builds can run in parallel
/// against the same session.
#[derive(Debug, Default)]
pub struct MemorySession {
    entries: RwLock<HashMap<String, Value>>,
}

impl MemorySession {
    /// Creates an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`, returning the previous value if any.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Poisoned`] if a previous writer panicked.
    pub fn set(
        &self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> SessionResult<Option<Value>> {
        let mut guard = self.write()?;
        Ok(guard.insert(key.into(), value.into()))
    }

    /// Removes the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Poisoned`] if a previous writer panicked.
    pub fn remove(&self, key: &str) -> SessionResult<Option<Value>> {
        let mut guard = self.write()?;
        Ok(guard.remove(key))
    }

    /// Drops every entry, ending the interaction.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Poisoned`] if a previous writer panicked.
    pub fn clear(&self) -> SessionResult<()> {
        let mut guard = self.write()?;
        let dropped = guard.len();
        guard.clear();
        debug!(dropped, "session cleared");
        Ok(())
    }

    /// Returns a point-in-time copy of every entry.
    ///
    /// A snapshot is itself a [`SessionState`], which gives callers consistent
    /// reads across several keys.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Poisoned`] if a previous writer panicked.
    pub fn snapshot(&self) -> SessionResult<HashMap<String, Value>> {
        Ok(self.read()?.clone())
    }

    /// Returns the number of stored entries.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Poisoned`] if a previous writer panicked.
    pub fn len(&self) -> SessionResult<usize> {
        Ok(self.read()?.len())
    }

    /// Returns whether the session holds no entries.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Poisoned`] if a previous writer panicked.
    pub fn is_empty(&self) -> SessionResult<bool> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> SessionResult<RwLockReadGuard<'_, HashMap<String, Value>>> {
        self.entries.read().map_err(|_| SessionError::Poisoned)
    }

    fn write(&self) -> SessionResult<RwLockWriteGuard<'_, HashMap<String, Value>>> {
        self.entries.write().map_err(|_| SessionError::Poisoned)
    }
}

impl SessionState for MemorySession {
    fn get(&self, key: &str) -> SessionResult<Option<Value>> {
        Ok(self.read()?.get(key).cloned())
    }
}

impl FromIterator<(String, Value)> for MemorySession {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            entries: RwLock::new(iter.into_iter().collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use serde_json::json;

    use super::*;
    use crate::keys;

    #[test]
    fn set_get_remove() {
        let session = MemorySession::new();
        assert!(session.set(keys::MOOD, "free").unwrap().is_none());
        assert_eq!(session.get(keys::MOOD).unwrap(), Some(json!("free")));

        let previous = session.set(keys::MOOD, "anxiety").unwrap();
        assert_eq!(previous, Some(json!("free")));

        assert_eq!(session.remove(keys::MOOD).unwrap(), Some(json!("anxiety")));
        assert!(session.get(keys::MOOD).unwrap().is_none());
    }

    #[test]
    fn clear_empties_session() {
        let session: MemorySession = [
            (keys::TEXT.to_owned(), json!("hello")),
            (keys::MOOD.to_owned(), json!("fog")),
        ]
        .into_iter()
        .collect();

        assert_eq!(session.len().unwrap(), 2);
        session.clear().unwrap();
        assert!(session.is_empty().unwrap());
    }

    #[test]
    fn snapshot_is_detached() {
        let session = MemorySession::new();
        session.set(keys::TEXT, "before").unwrap();
        let snapshot = session.snapshot().unwrap();
        session.set(keys::TEXT, "after").unwrap();

        assert_eq!(snapshot.get_or(keys::TEXT, "").unwrap(), json!("before"));
    }

    #[test]
    fn concurrent_readers() {
        let session = Arc::new(MemorySession::new());
        session.set(keys::TEXT, "shared").unwrap();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let session = Arc::clone(&session);
                thread::spawn(move || session.get_or(keys::TEXT, "").unwrap())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), json!("shared"));
        }
    }
}
