mod file_key_value_store;
mod memory_key_value_store;
mod preset_persistence;

pub use file_key_value_store::{FileKeyValueStore, STORAGE_FILE};
pub use memory_key_value_store::MemoryKeyValueStore;
pub use preset_persistence::{USER_PRESETS_KEY, load_user_presets, save_user_presets};
