//! Generic record repository
//!
//! Keeps one ordered collection in memory and mirrors it to a key-value
//! store. Every mutation rewrites the whole collection before returning.

use std::collections::BTreeSet;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{RamError, RamResult};
use crate::models::Record;

use super::kv::KeyValueStore;

/// Repository for one collection of records
pub struct RecordStore<T: Record> {
    key: &'static str,
    backend: Arc<dyn KeyValueStore>,
    records: RwLock<Vec<T>>,
}

impl<T: Record> RecordStore<T> {
    /// Create a store persisted under the record type's collection key
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self {
            key: T::COLLECTION,
            backend,
            records: RwLock::new(Vec::new()),
        }
    }

    /// Replace the in-memory collection with the persisted one
    ///
    /// A missing key, an unreadable blob, or a blob that doesn't decode all
    /// yield an empty collection. Only lock poisoning is reported.
    pub fn load(&self) -> RamResult<Vec<T>> {
        let loaded = match self.backend.get(self.key) {
            Ok(Some(bytes)) => match serde_json::from_slice::<Vec<T>>(&bytes) {
                Ok(records) => records,
                Err(e) => {
                    tracing::warn!(collection = %self.key, error = %e, "Discarding undecodable collection");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(collection = %self.key, error = %e, "Failed to read collection");
                Vec::new()
            }
        };

        tracing::debug!(collection = %self.key, count = loaded.len(), "Loaded collection");

        let mut records = self.write_lock()?;
        *records = loaded.clone();
        Ok(loaded)
    }

    /// Append a record and persist the collection
    pub fn append(&self, record: T) -> RamResult<()> {
        let mut records = self.write_lock()?;

        let id = record.id();
        if records.iter().any(|r| r.id() == id) {
            return Err(RamError::Duplicate {
                entity_type: T::ENTITY,
                identifier: id.to_string(),
            });
        }

        records.push(record);
        self.write_through(&records)
    }

    /// Remove the records at `positions` and persist the collection
    ///
    /// Positions index the collection as it was before the call. If any
    /// position is out of range nothing is removed. Returns the removed
    /// records in ascending position order.
    pub fn delete_at(&self, positions: &BTreeSet<usize>) -> RamResult<Vec<T>> {
        let mut records = self.write_lock()?;

        if let Some(&last) = positions.iter().next_back() {
            if last >= records.len() {
                return Err(RamError::position_out_of_range(last, records.len()));
            }
        }

        let mut removed: Vec<T> = positions
            .iter()
            .rev()
            .map(|&position| records.remove(position))
            .collect();
        removed.reverse();

        self.write_through(&records)?;
        Ok(removed)
    }

    /// Serialize the full collection and overwrite the stored blob
    pub fn persist(&self) -> RamResult<()> {
        let records = self.read_lock()?;
        self.write_through(&records)
    }

    /// Snapshot of the collection in insertion order
    pub fn records(&self) -> RamResult<Vec<T>> {
        Ok(self.read_lock()?.clone())
    }

    pub fn len(&self) -> RamResult<usize> {
        Ok(self.read_lock()?.len())
    }

    pub fn is_empty(&self) -> RamResult<bool> {
        Ok(self.read_lock()?.is_empty())
    }

    fn write_through(&self, records: &[T]) -> RamResult<()> {
        let bytes = serde_json::to_vec(records)
            .map_err(|e| RamError::Storage(format!("Failed to serialize {}: {}", self.key, e)))?;

        self.backend.set(self.key, &bytes).map_err(|e| {
            tracing::error!(collection = %self.key, error = %e, "Failed to persist collection");
            e
        })?;

        tracing::debug!(collection = %self.key, count = records.len(), "Persisted collection");
        Ok(())
    }

    fn read_lock(&self) -> RamResult<RwLockReadGuard<'_, Vec<T>>> {
        self.records
            .read()
            .map_err(|e| RamError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_lock(&self) -> RamResult<RwLockWriteGuard<'_, Vec<T>>> {
        self.records
            .write()
            .map_err(|e| RamError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}
