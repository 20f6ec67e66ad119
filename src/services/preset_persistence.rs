//! Best-effort persistence of the user preset collection.

use serde_json::Value;
use tracing::{debug, error, warn};

use crate::domain::Preset;
use crate::ports::KeyValueStore;

/// Default storage key for user presets.
pub const USER_PRESETS_KEY: &str = "veo3-user-presets";

/// Load user presets from `store`.
///
/// Never fails: unavailable storage, a missing key, or content that is not a
/// JSON array all yield an empty list. Array entries that are not valid
/// presets are skipped.
pub fn load_user_presets<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Vec<Preset> {
    let stored = match store.get_item(key) {
        Ok(Some(stored)) if !stored.trim().is_empty() => stored,
        Ok(_) => return Vec::new(),
        Err(err) => {
            warn!(error = %err, "failed to read user presets; continuing without them");
            return Vec::new();
        }
    };

    let entries = match serde_json::from_str::<Value>(&stored) {
        Ok(Value::Array(entries)) => entries,
        Ok(_) => {
            warn!(key, "stored user presets are not an array; ignoring them");
            return Vec::new();
        }
        Err(err) => {
            warn!(key, error = %err, "stored user presets are not valid JSON; ignoring them");
            return Vec::new();
        }
    };

    let presets: Vec<Preset> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(preset) => Some(preset),
            Err(err) => {
                warn!(index, error = %err, "skipping malformed user preset");
                None
            }
        })
        .collect();
    debug!(count = presets.len(), "loaded user presets");
    presets
}

/// Save user presets to `store`. Failures are logged and swallowed.
pub fn save_user_presets<S: KeyValueStore + ?Sized>(store: &S, key: &str, presets: &[Preset]) {
    let serialized = match serde_json::to_string(presets) {
        Ok(serialized) => serialized,
        Err(err) => {
            error!(error = %err, "failed to serialize user presets");
            return;
        }
    };

    match store.set_item(key, &serialized) {
        Ok(()) => debug!(count = presets.len(), "saved user presets"),
        Err(err) => error!(error = %err, "failed to save user presets"),
    }
}
