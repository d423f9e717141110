//! String-keyed JSON persistence
//!
//! The store's persistence model is a handful of string-keyed JSON blobs,
//! one file per key under the data directory. Reads that fail to parse are
//! logged and treated as absent so the caller can fall back to defaults;
//! writes are best-effort and never fail a mutation.

use crate::store::error::StoreResult;
use serde::{de::DeserializeOwned, Serialize};
use std::path::{Path, PathBuf};

/// Persisted key for the driver list
pub const KEY_DRIVERS: &str = "drivers";
/// Persisted key for the race list
pub const KEY_RACES: &str = "races";
/// Persisted key for the site content record
pub const KEY_CONTENT: &str = "content";
/// Persisted key for the admin session flag
pub const KEY_SESSION: &str = "session";

/// File-backed key-value store for JSON blobs
#[derive(Debug, Clone)]
pub struct Keystore {
    data_dir: PathBuf,
}

impl Keystore {
    /// Open a keystore rooted at `data_dir`, creating the directory
    pub fn open(data_dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let data_dir = data_dir.into();
        std::fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    /// Path of the file backing a key
    pub fn path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }

    /// Load and deserialize a key
    ///
    /// Returns `None` when the file is missing or unreadable, and also when
    /// it fails to parse; a corrupt blob for one key must never block the
    /// other keys from hydrating.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.path(key);
        if !path.exists() {
            return None;
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to read persisted data, using defaults");
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to parse persisted data, using defaults");
                None
            }
        }
    }

    /// Serialize and persist a key, best-effort
    ///
    /// Failures are logged and swallowed; in-memory state stays
    /// authoritative for the session.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) {
        if let Err(e) = self.try_save(key, value) {
            tracing::error!(key, error = %e, "Failed to persist data, in-memory state unchanged");
        }
    }

    /// Serialize and persist a key, returning the error
    pub fn try_save<T: Serialize>(&self, key: &str, value: &T) -> StoreResult<()> {
        let content = serde_json::to_string_pretty(value)?;
        std::fs::write(self.path(key), content)?;
        Ok(())
    }

    /// Remove a key's backing file; missing file is fine
    pub fn clear(&self, key: &str) {
        let path = self.path(key);
        if path.exists() {
            if let Err(e) = std::fs::remove_file(&path) {
                tracing::error!(key, error = %e, "Failed to clear persisted data");
            }
        }
    }

    /// The data directory this keystore is rooted at
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::types::{default_drivers, Driver};
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let store = Keystore::open(dir.path()).unwrap();

        let drivers = default_drivers();
        store.save(KEY_DRIVERS, &drivers);

        let loaded: Vec<Driver> = store.load(KEY_DRIVERS).unwrap();
        assert_eq!(loaded, drivers);
    }

    #[test]
    fn test_missing_key_is_none() {
        let dir = tempdir().unwrap();
        let store = Keystore::open(dir.path()).unwrap();

        let loaded: Option<Vec<Driver>> = store.load(KEY_DRIVERS);
        assert!(loaded.is_none());
    }

    #[test]
    fn test_corrupt_blob_is_none() {
        let dir = tempdir().unwrap();
        let store = Keystore::open(dir.path()).unwrap();

        std::fs::write(store.path(KEY_RACES), "not json {").unwrap();

        let loaded: Option<Vec<Driver>> = store.load(KEY_RACES);
        assert!(loaded.is_none());
    }

    #[test]
    fn test_corrupt_key_does_not_block_others() {
        let dir = tempdir().unwrap();
        let store = Keystore::open(dir.path()).unwrap();

        let drivers = default_drivers();
        store.save(KEY_DRIVERS, &drivers);
        std::fs::write(store.path(KEY_RACES), "][").unwrap();

        let races: Option<Vec<Driver>> = store.load(KEY_RACES);
        assert!(races.is_none());
        let loaded: Vec<Driver> = store.load(KEY_DRIVERS).unwrap();
        assert_eq!(loaded, drivers);
    }

    #[test]
    fn test_clear() {
        let dir = tempdir().unwrap();
        let store = Keystore::open(dir.path()).unwrap();

        store.save(KEY_SESSION, &true);
        assert!(store.path(KEY_SESSION).exists());

        store.clear(KEY_SESSION);
        assert!(!store.path(KEY_SESSION).exists());

        // Clearing an absent key is a no-op
        store.clear(KEY_SESSION);
    }
}
