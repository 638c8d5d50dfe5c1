//! Search-query history persisted in a small key-value store.
//!
//! The history is a most-recent-first list of distinct query strings, stored as a JSON
//! array under a single key. Stores implement [`KeyValueStore`]:
//!
//! - [`MemoryStore`] — in-process map, used in tests
//! - [`FileStore`] — one JSON file on disk (desktop and CLI)
//! - `BrowserStore` — browser `localStorage` (`web` feature)

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{GalleryError, Result};

/// Minimal persistent string map.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

// ---------------------------------------------------------------------------
// Stores
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// All keys live in one JSON object file, rewritten on every change.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `storage.json` in the platform data directory.
    pub fn in_data_dir() -> Option<Self> {
        crate::config::data_dir().map(|d| Self::new(d.join("storage.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, serde_json::to_string_pretty(entries)?)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut entries = self.read_all()?;
        if entries.remove(key).is_some() {
            self.write_all(&entries)?;
        }
        Ok(())
    }
}

#[cfg(feature = "web")]
pub use browser::BrowserStore;

#[cfg(feature = "web")]
mod browser {
    use gloo_storage::{LocalStorage, Storage};

    use super::KeyValueStore;
    use crate::error::{GalleryError, Result};

    /// The browser's `localStorage`.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct BrowserStore;

    fn js_err(e: impl std::fmt::Debug) -> GalleryError {
        GalleryError::Storage(format!("localStorage: {e:?}"))
    }

    impl KeyValueStore for BrowserStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            LocalStorage::raw().get_item(key).map_err(js_err)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<()> {
            LocalStorage::raw().set_item(key, value).map_err(js_err)
        }

        fn remove(&mut self, key: &str) -> Result<()> {
            LocalStorage::raw().remove_item(key).map_err(js_err)
        }
    }
}

// ---------------------------------------------------------------------------
// Query history
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct QueryHistory<S> {
    store: S,
    key: String,
    entries: Vec<String>,
}

impl<S: KeyValueStore> QueryHistory<S> {
    /// Read the persisted list. Unreadable or corrupt entries start an empty history.
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let entries = match store.get(&key) {
            Ok(Some(raw)) => serde_json::from_str::<Vec<String>>(&raw).unwrap_or_else(|e| {
                warn!(key = key.as_str(), "Discarding unreadable search history: {e}");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(key = key.as_str(), "Could not read search history: {e}");
                Vec::new()
            }
        };
        let mut history = Self { store, key, entries: Vec::new() };
        for entry in entries.into_iter().rev() {
            history.push_front(entry);
        }
        history
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Move `query` to the front (adding it if new) and persist. Empty queries are
    /// ignored and return `false`.
    pub fn record(&mut self, query: &str) -> Result<bool> {
        if query.is_empty() {
            return Ok(false);
        }
        self.push_front(query.to_string());
        debug!(query, entries = self.entries.len(), "history updated");
        self.persist()?;
        Ok(true)
    }

    /// Drop every entry, in memory and in the store.
    pub fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        self.store.remove(&self.key)
    }

    /// Autocomplete options for `input`: every entry containing it (case-insensitive),
    /// most recent first. Empty input offers the whole history.
    pub fn suggestions(&self, input: &str) -> Vec<&str> {
        let needle = input.trim().to_lowercase();
        self.entries
            .iter()
            .filter(|e| needle.is_empty() || e.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect()
    }

    fn push_front(&mut self, query: String) {
        self.entries.retain(|e| *e != query);
        self.entries.insert(0, query);
    }

    fn persist(&mut self) -> Result<()> {
        let encoded = serde_json::to_string(&self.entries)
            .map_err(|e| GalleryError::Storage(e.to_string()))?;
        self.store.set(&self.key, &encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "searchQueries";

    #[test]
    fn record_moves_existing_query_to_front() {
        let mut h = QueryHistory::load(MemoryStore::new(), KEY);
        h.record("cat").unwrap();
        h.record("dog").unwrap();
        h.record("cat").unwrap();
        assert_eq!(h.entries(), ["cat", "dog"]);
    }

    #[test]
    fn empty_query_is_not_recorded() {
        let mut h = QueryHistory::load(MemoryStore::new(), KEY);
        assert!(!h.record("").unwrap());
        assert!(h.is_empty());
        assert_eq!(h.store().get(KEY).unwrap(), None);
    }

    #[test]
    fn persists_as_json_list() {
        let mut h = QueryHistory::load(MemoryStore::new(), KEY);
        h.record("cat").unwrap();
        h.record("sea otter").unwrap();
        assert_eq!(h.store().get(KEY).unwrap().as_deref(), Some(r#"["sea otter","cat"]"#));
    }

    #[test]
    fn clear_empties_memory_and_store() {
        let mut h = QueryHistory::load(MemoryStore::new(), KEY);
        h.record("cat").unwrap();
        h.clear().unwrap();
        assert!(h.is_empty());
        assert_eq!(h.store().get(KEY).unwrap(), None);
    }

    #[test]
    fn load_deduplicates_and_tolerates_garbage() {
        let mut store = MemoryStore::new();
        store.set(KEY, r#"["a","b","a"]"#).unwrap();
        let h = QueryHistory::load(store, KEY);
        assert_eq!(h.entries(), ["a", "b"]);

        let mut store = MemoryStore::new();
        store.set(KEY, "not json").unwrap();
        assert!(QueryHistory::load(store, KEY).is_empty());
    }

    #[test]
    fn suggestions_filter_case_insensitively() {
        let mut h = QueryHistory::load(MemoryStore::new(), KEY);
        h.record("Sunset").unwrap();
        h.record("cat").unwrap();
        h.record("sunrise").unwrap();
        assert_eq!(h.suggestions("SUN"), vec!["sunrise", "Sunset"]);
        assert_eq!(h.suggestions("").len(), 3);
    }

    #[test]
    fn file_store_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let mut h = QueryHistory::load(FileStore::new(&path), KEY);
        h.record("cat").unwrap();
        h.record("dog").unwrap();

        let reloaded = QueryHistory::load(FileStore::new(&path), KEY);
        assert_eq!(reloaded.entries(), ["dog", "cat"]);
    }

    #[test]
    fn file_store_remove_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("storage.json"));
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        store.remove("a").unwrap();
        assert_eq!(store.get("a").unwrap(), None);
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
    }
}
