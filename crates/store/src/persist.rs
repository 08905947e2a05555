//! Key-value persistence backends. The record collection is stored as one
//! serialized value under a fixed namespace key, localStorage-style.

use ads_core::AdsResult;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// A minimal string key-value store. Values are opaque to the backend;
/// callers serialize/deserialize whole collections themselves.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> AdsResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> AdsResult<()>;
}

/// In-memory backend for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AdsResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AdsResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File backend: a single JSON object mapping keys to string values.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> AdsResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let raw = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> AdsResult<Option<String>> {
        // A missing or unreadable file is "no stored value", never fatal.
        let entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Unreadable store file, treating as empty");
                return Ok(None);
            }
        };
        Ok(entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AdsResult<()> {
        let mut entries = self.read_entries().unwrap_or_default();
        entries.insert(key.to_string(), value.to_string());
        std::fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
        Ok(())
    }
}
