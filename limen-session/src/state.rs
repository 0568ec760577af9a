//! Read-only view over session state.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde_json::{Map, Value};

use crate::SessionResult;

/// Read access to the key-value state of the current interaction.
///
/// Implementations must not mutate state on read. Hosts that allow concurrent
/// writers are responsible for whatever consistency they need across reads.
pub trait SessionState {
    /// Returns the value stored under `key`, or `None` when it is absent.
    ///
    /// # Errors
    ///
    /// Implementations report backend failures as [`crate::SessionError`].
    fn get(&self, key: &str) -> SessionResult<Option<Value>>;

    /// Returns the value stored under `key`, or `default` as a string value.
    ///
    /// # Errors
    ///
    /// Propagates any error raised by [`SessionState::get`].
    fn get_or(&self, key: &str, default: &str) -> SessionResult<Value> {
        Ok(self
            .get(key)?
            .unwrap_or_else(|| Value::String(default.to_owned())))
    }
}

impl<S: BuildHasher> SessionState for HashMap<String, Value, S> {
    fn get(&self, key: &str) -> SessionResult<Option<Value>> {
        Ok(HashMap::get(self, key).cloned())
    }
}

impl SessionState for BTreeMap<String, Value> {
    fn get(&self, key: &str) -> SessionResult<Option<Value>> {
        Ok(BTreeMap::get(self, key).cloned())
    }
}

impl SessionState for Map<String, Value> {
    fn get(&self, key: &str) -> SessionResult<Option<Value>> {
        Ok(Map::get(self, key).cloned())
    }
}
