use super::files::{atomic_write, entry_file};
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error from the key-value store boundary
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read entry '{key}': {source}")]
    Read {
        key: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to write entry '{key}': {source}")]
    Write {
        key: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode entry '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// String-keyed store of serialized values
pub trait Store {
    /// Fetch the serialized value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    /// Overwrite the value stored under `key`
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Store keeping one JSON file per entry in the data directory
pub struct FsStore {
    dir: PathBuf,
}

impl FsStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }
}

impl Store for FsStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = entry_file(&self.dir, key);
        if !path.exists() {
            return Ok(None);
        }
        std::fs::read_to_string(&path)
            .map(Some)
            .map_err(|source| StoreError::Read {
                key: key.to_string(),
                source,
            })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        atomic_write(entry_file(&self.dir, key), value).map_err(|source| StoreError::Write {
            key: key.to_string(),
            source,
        })
    }
}

/// In-memory store (for testing and programmatic use); records the exact
/// sequence of writes it receives
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    pub writes: Vec<(String, String)>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an entry without recording a write
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.writes.push((key.to_string(), value.to_string()));
        Ok(())
    }
}
