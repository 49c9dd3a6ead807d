use crate::domain::{PrefValue, StoreError, StoreResult};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Durable string-keyed storage for primitive settings.
///
/// Last write wins; reads and writes are synchronous.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<PrefValue>;
    fn set(&mut self, key: &str, value: PrefValue) -> StoreResult<()>;
}

/// Preferences persisted as a flat JSON object on disk.
///
/// Every `set` writes the whole map back through to the file. A missing or
/// unreadable file loads as an empty store.
pub struct FilePreferences {
    path: PathBuf,
    entries: HashMap<String, PrefValue>,
}

impl FilePreferences {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = fs::read_to_string(&path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default();
        Self { path, entries }
    }

    fn flush(&self) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| StoreError::Io(e.to_string()))
    }
}

impl KeyValueStore for FilePreferences {
    fn get(&self, key: &str) -> Option<PrefValue> {
        self.entries.get(key).copied()
    }

    fn set(&mut self, key: &str, value: PrefValue) -> StoreResult<()> {
        self.entries.insert(key.to_string(), value);
        self.flush()
    }
}

/// Volatile store for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    entries: HashMap<String, PrefValue>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<PrefValue> {
        self.entries.get(key).copied()
    }

    fn set(&mut self, key: &str, value: PrefValue) -> StoreResult<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePreferences::open(dir.path().join("prefs.json"));
        assert_eq!(store.get("appState"), None);
    }

    #[test]
    fn test_open_corrupt_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "not json {").unwrap();

        let store = FilePreferences::open(&path);
        assert_eq!(store.get("appState"), None);
    }

    #[test]
    fn test_set_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FilePreferences::open(dir.path().join("prefs.json"));

        store.set("appState", PrefValue::Int(2)).unwrap();
        store.set("isOnboarded", PrefValue::Bool(true)).unwrap();

        assert_eq!(store.get("appState"), Some(PrefValue::Int(2)));
        assert_eq!(store.get("isOnboarded"), Some(PrefValue::Bool(true)));
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let mut store = FilePreferences::open(&path);
        store.set("paymentStatus", PrefValue::Int(0)).unwrap();
        store.set("paymentStatus", PrefValue::Int(1)).unwrap();
        drop(store);

        let store = FilePreferences::open(&path);
        assert_eq!(store.get("paymentStatus"), Some(PrefValue::Int(1)));
    }

    #[test]
    fn test_file_is_flat_json_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let mut store = FilePreferences::open(&path);
        store.set("appState", PrefValue::Int(1)).unwrap();
        store.set("isOnboarded", PrefValue::Bool(false)).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["appState"], 1);
        assert_eq!(parsed["isOnboarded"], false);
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryPreferences::new();
        assert_eq!(store.get("appState"), None);

        store.set("appState", PrefValue::Int(0)).unwrap();
        store.set("appState", PrefValue::Int(2)).unwrap();
        assert_eq!(store.get("appState"), Some(PrefValue::Int(2)));
    }
}
