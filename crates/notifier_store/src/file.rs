//! JSON-file backed store.
//!
//! The whole map is kept in memory and rewritten on every change. Writes go to a
//! sibling temp file first and are then renamed over the target, so a crash never
//! leaves a half-written file behind.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use notifier_common::services::KeyValueStore;
use notifier_common::NotifierError;
use tracing::{debug, warn};

use crate::error::StoreError;

#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl JsonFileStore {
    /// Opens the store at `path`, creating nothing until the first write.
    ///
    /// A missing file is an empty store. A file that is not a JSON object of strings
    /// is logged and treated as empty; it is overwritten on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<BTreeMap<String, String>>(&raw) {
                Ok(entries) => entries,
                Err(err) => {
                    warn!(path = %path.display(), "ignoring unreadable preference file: {}", err);
                    BTreeMap::new()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };
        debug!(path = %path.display(), keys = entries.len(), "opened preference store");
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(entries)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn update<F>(&self, f: F) -> Result<(), NotifierError>
    where
        F: FnOnce(&mut BTreeMap<String, String>),
    {
        let mut entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        let mut next = entries.clone();
        f(&mut next);
        // memory only changes once the file write went through
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), NotifierError> {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<(), NotifierError> {
        self.update(|entries| {
            entries.remove(key);
        })
    }

    fn clear(&self) -> Result<(), NotifierError> {
        self.update(BTreeMap::clear)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let store = JsonFileStore::open(&path).unwrap();
        store.set("class_id", "10A").unwrap();
        store.set("language", "en").unwrap();
        store.remove("language").unwrap();
        drop(store);

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("class_id").as_deref(), Some("10A"));
        assert_eq!(reopened.get("language"), None);
    }

    #[test]
    fn test_missing_file_is_empty_and_not_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get("anything"), None);
        assert!(!path.exists());

        store.set("k", "v").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "not json at all").unwrap();

        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get("class_id"), None);
        store.set("class_id", "9B").unwrap();
        assert_eq!(
            JsonFileStore::open(&path).unwrap().get("class_id").as_deref(),
            Some("9B")
        );
    }

    #[test]
    fn test_clear_removes_everything_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let store = JsonFileStore::open(&path).unwrap();
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        store.clear().unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert_eq!(raw.trim(), "{}");
    }
}
