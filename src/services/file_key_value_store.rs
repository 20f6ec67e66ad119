use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::AppError;
use crate::ports::KeyValueStore;

/// File name of the store inside the data directory.
pub const STORAGE_FILE: &str = "storage.json";

/// Key-value store persisted as a single JSON object on disk.
///
/// Every value is a string, as in browser local storage. Writes replace the
/// file atomically via a temporary sibling.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    path: PathBuf,
}

impl FileKeyValueStore {
    /// Create a store backed by `path`. The file is created on first write.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create a store at `<data_dir>/storage.json`.
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(STORAGE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, AppError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(AppError::Json(err)) => {
                debug!(
                    path = %self.path.display(),
                    error = %err,
                    "replacing unreadable storage file"
                );
                BTreeMap::new()
            }
            Err(err) => return Err(err),
        };
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, serde_json::to_string_pretty(&entries)?)?;
        fs::rename(&tmp_path, &self.path)?;
        debug!(path = %self.path.display(), key, "wrote storage entry");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::in_dir(dir.path());
        assert_eq!(store.get_item("anything").unwrap(), None);
    }

    #[test]
    fn set_then_get_returns_value() {
        let dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::in_dir(&dir.path().join("nested"));

        store.set_item("a", "1").unwrap();
        store.set_item("b", "2").unwrap();
        store.set_item("a", "3").unwrap();

        assert_eq!(store.get_item("a").unwrap().as_deref(), Some("3"));
        assert_eq!(store.get_item("b").unwrap().as_deref(), Some("2"));
        assert!(!dir.path().join("nested/storage.json.tmp").exists());
    }

    #[test]
    fn corrupt_file_fails_reads_but_is_replaced_on_write() {
        let dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::in_dir(dir.path());
        fs::write(store.path(), "{not json").unwrap();

        assert!(matches!(store.get_item("a"), Err(AppError::Json(_))));

        store.set_item("a", "fresh").unwrap();
        assert_eq!(store.get_item("a").unwrap().as_deref(), Some("fresh"));
    }

    #[test]
    fn write_fails_when_parent_is_a_file() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let store = FileKeyValueStore::in_dir(&blocker);

        assert!(store.set_item("a", "1").is_err());
    }
}
