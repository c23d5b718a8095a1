//! Credential service
//!
//! Every read and write of stored credentials goes through the
//! authentication gate here.

use std::collections::BTreeSet;

use crate::auth::AuthGate;
use crate::error::{RamError, RamResult};
use crate::models::CredentialRecord;
use crate::storage::Storage;

/// Service for credential management
pub struct CredentialService<'a> {
    storage: &'a Storage,
    gate: &'a AuthGate,
}

impl<'a> CredentialService<'a> {
    /// Create a new credential service
    pub fn new(storage: &'a Storage, gate: &'a AuthGate) -> Self {
        Self { storage, gate }
    }

    /// Refuse `action` unless the gate is unlocked
    pub fn require_unlocked(&self, action: &'static str) -> RamResult<()> {
        if self.gate.is_authenticated() {
            return Ok(());
        }
        tracing::warn!("Authentication required to {}.", action);
        Err(RamError::AuthenticationRequired(action))
    }

    /// Add a credential
    ///
    /// Refused while the gate is locked: the store is left untouched and
    /// nothing is persisted.
    pub fn add(&self, website: &str, username: &str, password: &str) -> RamResult<CredentialRecord> {
        self.require_unlocked("add passwords")?;

        let credential = CredentialRecord::new(website, username, password);
        self.storage.credentials.append(credential.clone())?;

        tracing::info!(id = %credential.id, "Added credential");
        Ok(credential)
    }

    /// The credentials, or `None` while the gate is locked
    pub fn visible(&self) -> RamResult<Option<Vec<CredentialRecord>>> {
        if !self.gate.is_authenticated() {
            return Ok(None);
        }
        self.storage.credentials.records().map(Some)
    }

    /// Delete credentials by position in the visible list
    pub fn delete(&self, positions: &BTreeSet<usize>) -> RamResult<Vec<CredentialRecord>> {
        self.require_unlocked("delete passwords")?;

        let removed = self.storage.credentials.delete_at(positions)?;
        tracing::info!(count = removed.len(), "Deleted credentials");
        Ok(removed)
    }
}
