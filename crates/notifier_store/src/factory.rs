//! Builds the store configured for this client.

use std::sync::Arc;

use notifier_common::services::KeyValueStore;
use notifier_config::StorageConfig;
use tracing::info;

use crate::error::StoreError;
use crate::file::JsonFileStore;
use crate::memory::MemoryStore;

/// Opens the configured store.
///
/// An empty path selects a [`MemoryStore`] (nothing survives a restart); any other
/// path is a [`JsonFileStore`].
pub fn open_store(config: &StorageConfig) -> Result<Arc<dyn KeyValueStore>, StoreError> {
    if config.path.trim().is_empty() {
        info!("no storage path configured, preferences stay in memory");
        return Ok(Arc::new(MemoryStore::new()));
    }
    let store = JsonFileStore::open(config.path.trim())?;
    info!("preferences stored in {}", store.path().display());
    Ok(Arc::new(store))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path_gives_memory_store() {
        let store = open_store(&StorageConfig {
            path: "  ".to_string(),
        })
        .unwrap();
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn test_path_gives_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        let store = open_store(&StorageConfig {
            path: path.display().to_string(),
        })
        .unwrap();
        store.set("k", "v").unwrap();
        assert!(path.exists());
    }
}
