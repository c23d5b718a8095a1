//! Application session
//!
//! One `Session` is built at process start and handed to the command
//! layer. It owns both record stores and the authentication gate, so all
//! state lives in one explicitly owned place.

use std::sync::Arc;

use crate::auth::{AuthGate, AuthRequest, Authenticator, PinAuthenticator};
use crate::config::{RamPaths, Settings};
use crate::error::RamResult;
use crate::services::{CredentialService, DebtService};
use crate::storage::Storage;

pub struct Session {
    pub storage: Storage,
    pub gate: AuthGate,
}

impl Session {
    /// Build a session and load both collections
    ///
    /// Credentials are read into memory here, before any authentication;
    /// the gate only decides whether they are shown.
    pub fn new(storage: Storage, gate: AuthGate) -> RamResult<Self> {
        storage.load_all()?;
        Ok(Self { storage, gate })
    }

    /// Open the on-disk session described by `paths` and `settings`
    pub fn open(paths: &RamPaths, settings: &Settings, pin: Option<String>) -> RamResult<Self> {
        let authenticator: Arc<dyn Authenticator> =
            Arc::new(PinAuthenticator::from_settings(settings, pin));
        let gate = AuthGate::new(authenticator, settings.auth.justification.clone());
        Self::new(Storage::open(paths)?, gate)
    }

    /// The authentication attempt made when the app comes up
    ///
    /// Does nothing if already authenticated or if the authenticator can't
    /// run on this host; otherwise requests authentication once.
    pub async fn on_launch(&self) -> Option<AuthRequest> {
        if self.gate.is_authenticated() {
            return None;
        }

        if self.gate.can_authenticate() {
            Some(self.gate.request_authentication().await)
        } else {
            None
        }
    }

    pub fn debts(&self) -> DebtService<'_> {
        DebtService::new(&self.storage)
    }

    pub fn credentials(&self) -> CredentialService<'_> {
        CredentialService::new(&self.storage, &self.gate)
    }
}
