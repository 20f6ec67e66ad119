use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::KeyValueStore;

/// In-memory key-value store.
///
/// Used when no data directory can be resolved, and by tests. An
/// `unavailable` store fails every call, like a browser with storage disabled.
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
    unavailable: bool,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects every read and write.
    pub fn unavailable() -> Self {
        Self { entries: Arc::default(), unavailable: true }
    }

    fn entries(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, AppError> {
        if self.unavailable {
            return Err(AppError::StorageUnavailable("storage is disabled".into()));
        }
        self.entries
            .lock()
            .map_err(|_| AppError::StorageUnavailable("storage lock poisoned".into()))
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
