//! Key-value settings storage
//!
//! The persistence collaborator behind every record store: a flat map from
//! collection name to an opaque serialized blob. There are no transactions
//! across keys.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use crate::error::RamError;

use super::file_io::{read_bytes, write_bytes_atomic};

/// A synchronous key-value sink/source
pub trait KeyValueStore: Send + Sync {
    /// Read the blob stored under `key`, or `None` if the key was never written
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, RamError>;

    /// Overwrite the blob stored under `key`
    fn set(&self, key: &str, value: &[u8]) -> Result<(), RamError>;
}

/// Stores each key as `<key>.json` inside a directory
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, RamError> {
        read_bytes(self.path_for(key))
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), RamError> {
        write_bytes_atomic(self.path_for(key), value)
    }
}

/// In-process store; counts writes so callers can check when persistence happened
#[derive(Default)]
pub struct MemoryKeyValueStore {
    entries: RwLock<HashMap<String, Vec<u8>>>,
    writes: AtomicUsize,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set` calls made so far
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, RamError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| RamError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), RamError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| RamError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        entries.insert(key.to_string(), value.to_vec());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
