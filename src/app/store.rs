//! Session store: holds the current snapshot and persists user presets.

use tracing::debug;

use crate::domain::{Action, Outcome, SessionState, reduce};
use crate::ports::KeyValueStore;
use crate::services::{load_user_presets, save_user_presets};

/// Owns the current [`SessionState`] and routes every change through [`reduce`].
///
/// User presets are loaded once on construction. Changes to the collection
/// are written back when the store settles, so a burst of actions costs one
/// write. Dropping the store settles it.
pub struct SessionStore<S: KeyValueStore> {
    storage: S,
    presets_key: String,
    state: SessionState,
    dirty: bool,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Open a fresh session, loading user presets from `storage`.
    pub fn open(storage: S, presets_key: impl Into<String>) -> Self {
        let presets_key = presets_key.into();
        let user_presets = load_user_presets(&storage, &presets_key);
        Self { storage, presets_key, state: SessionState::new(user_presets), dirty: false }
    }

    /// Current snapshot.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Apply one action.
    pub fn dispatch(&mut self, action: Action) -> Outcome {
        let (next, outcome) = reduce(&self.state, action);
        if outcome.changes_user_presets() {
            self.dirty = true;
        }
        debug!(?outcome, "dispatched action");
        self.state = next;
        outcome
    }

    /// True when user preset changes are waiting to be written.
    pub fn has_pending_writes(&self) -> bool {
        self.dirty
    }

    /// Persist the user preset collection if it changed since the last settle.
    pub fn settle(&mut self) {
        if !self.dirty {
            return;
        }
        save_user_presets(&self.storage, &self.presets_key, self.state.catalog.user());
        self.dirty = false;
    }
}

impl<S: KeyValueStore> Drop for SessionStore<S> {
    fn drop(&mut self) {
        self.settle();
    }
}
