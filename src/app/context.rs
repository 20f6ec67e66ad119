use crate::app::config::VpromptConfig;
use crate::app::store::SessionStore;
use crate::ports::KeyValueStore;

/// Application context holding dependencies for command execution.
pub struct AppContext<S: KeyValueStore> {
    storage: S,
    config: VpromptConfig,
}

impl<S: KeyValueStore> AppContext<S> {
    /// Create a new application context.
    pub fn new(storage: S, config: VpromptConfig) -> Self {
        Self { storage, config }
    }

    /// Get a reference to the key-value storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn config(&self) -> &VpromptConfig {
        &self.config
    }

    /// Open a fresh editing session backed by this context's storage.
    pub fn open_session(&self) -> SessionStore<&S> {
        SessionStore::open(&self.storage, self.config.storage.presets_key.as_str())
    }
}
