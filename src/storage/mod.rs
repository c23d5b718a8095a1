//! Storage layer for RAM
//!
//! Two independently keyed record collections on top of a key-value
//! settings store. A crash between persisting one collection and the other
//! can leave them out of step; there is no cross-collection transaction.

pub mod file_io;
pub mod kv;
pub mod record_store;

pub use kv::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
pub use record_store::RecordStore;

use std::sync::Arc;

use crate::config::paths::RamPaths;
use crate::error::RamError;
use crate::models::{CredentialRecord, DebtRecord};

/// Main storage coordinator that provides access to both collections
pub struct Storage {
    pub debts: RecordStore<DebtRecord>,
    pub credentials: RecordStore<CredentialRecord>,
}

impl Storage {
    /// Create storage over an arbitrary key-value backend
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self {
            debts: RecordStore::new(backend.clone()),
            credentials: RecordStore::new(backend),
        }
    }

    /// Create file-backed storage in the data directory
    pub fn open(paths: &RamPaths) -> Result<Self, RamError> {
        paths.ensure_directories()?;
        Ok(Self::new(Arc::new(FileKeyValueStore::new(paths.data_dir()))))
    }

    /// Load both collections
    ///
    /// Credentials are loaded whether or not anyone has authenticated;
    /// the gate only controls whether they are shown.
    pub fn load_all(&self) -> Result<(), RamError> {
        self.debts.load()?;
        self.credentials.load()?;
        Ok(())
    }
}
