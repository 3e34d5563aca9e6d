//! Durable key-value storage for installation-scoped values.
//!
//! The SDK persists exactly one value (the device identifier), but the
//! storage seam is a small string map so hosts can plug in whatever their
//! platform offers.  Two implementations ship with the crate:
//!
//! * [`MemoryStore`] — process-local, lost on exit.
//! * [`FileStore`] — a JSON object on disk, by default under the platform
//!   config directory (`<config_dir>/cutie-link/store.json`).

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::error::StoreError;

const APP_DIR: &str = "cutie-link";
const STORE_FILE: &str = "store.json";

/// String key-value storage scoped to one installation.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// In-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// FileStore
// ---------------------------------------------------------------------------

/// JSON-file backed store.
///
/// The whole map is rewritten on every `set`; writes from one process are
/// serialised by an internal lock.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    /// Store backed by the file at `path`.  Parent directories are created
    /// on first write.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Store under the platform config directory.
    pub fn in_config_dir() -> Result<Self, StoreError> {
        let dir = dirs::config_dir().ok_or(StoreError::NoConfigDir)?;
        Ok(Self::at(dir.join(APP_DIR).join(STORE_FILE)))
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<HashMap<String, String>, StoreError> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);

        // An unreadable file is replaced rather than blocking the write.
        let mut values = self.load().unwrap_or_else(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "discarding unreadable store");
            HashMap::new()
        });
        values.insert(key.to_string(), value.to_string());

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(&values)?;
        fs::write(&self.path, json)?;

        tracing::debug!(path = %self.path.display(), key, "store updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("cutie-link-test-{}", uuid::Uuid::new_v4()))
            .join(name)
    }

    #[test]
    fn memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn file_store_missing_file_is_empty() {
        let store = FileStore::at(temp_path("store.json"));
        assert_eq!(store.get("anything").unwrap(), None);
    }

    #[test]
    fn file_store_creates_parent_dirs_and_persists() {
        let path = temp_path("nested/store.json");
        FileStore::at(&path).set("com.cutie.link.deviceId", "abc").unwrap();

        let reopened = FileStore::at(&path);
        assert_eq!(
            reopened.get("com.cutie.link.deviceId").unwrap().as_deref(),
            Some("abc")
        );

        fs::remove_dir_all(path.parent().unwrap().parent().unwrap()).ok();
    }

    #[test]
    fn file_store_keeps_other_keys() {
        let path = temp_path("store.json");
        let store = FileStore::at(&path);
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();

        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));

        fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn file_store_corrupt_file_errors_on_read_and_recovers_on_write() {
        let path = temp_path("store.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();

        let store = FileStore::at(&path);
        assert!(matches!(store.get("k"), Err(StoreError::Serialization(_))));

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));

        fs::remove_dir_all(path.parent().unwrap()).ok();
    }
}
