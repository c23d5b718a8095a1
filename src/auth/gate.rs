//! Authentication gate
//!
//! Tracks whether the user has authenticated in this session and makes
//! sure at most one authentication attempt is outstanding at a time.
//! Credential visibility and credential appends are conditioned on it.

use std::fmt;
use std::sync::Arc;

use tokio::sync::watch;

use super::authenticator::{AuthFailure, Authenticator};

/// Snapshot of the gate's flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AuthState {
    /// False at process start; set by a successful attempt
    pub authenticated: bool,
    /// True only while an attempt is outstanding
    pub authenticating: bool,
}

/// The state machine view of [`AuthState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPhase {
    Unauthenticated,
    Authenticating,
    Authenticated,
}

impl AuthState {
    pub fn phase(&self) -> AuthPhase {
        if self.authenticating {
            AuthPhase::Authenticating
        } else if self.authenticated {
            AuthPhase::Authenticated
        } else {
            AuthPhase::Unauthenticated
        }
    }
}

impl fmt::Display for AuthPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthenticated => write!(f, "locked"),
            Self::Authenticating => write!(f, "authenticating"),
            Self::Authenticated => write!(f, "unlocked"),
        }
    }
}

/// Result of one call to [`AuthGate::request_authentication`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRequest {
    /// Another attempt was already outstanding; this call did nothing
    InFlight,
    /// The attempt succeeded
    Authenticated,
    /// The attempt failed or could not run
    Denied(AuthFailure),
}

/// Mediates access to credentials
pub struct AuthGate {
    authenticator: Arc<dyn Authenticator>,
    justification: String,
    state: watch::Sender<AuthState>,
}

impl AuthGate {
    pub fn new(authenticator: Arc<dyn Authenticator>, justification: impl Into<String>) -> Self {
        let (state, _) = watch::channel(AuthState::default());
        Self {
            authenticator,
            justification: justification.into(),
            state,
        }
    }

    /// Current flags
    pub fn state(&self) -> AuthState {
        *self.state.borrow()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().authenticated
    }

    pub fn is_authenticating(&self) -> bool {
        self.state.borrow().authenticating
    }

    /// Observe state transitions
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    /// Whether the authenticator can run a check on this host
    pub fn can_authenticate(&self) -> bool {
        match self.authenticator.can_evaluate() {
            Ok(()) => true,
            Err(reason) => {
                tracing::warn!(%reason, "Biometric authentication unavailable");
                false
            }
        }
    }

    /// Ask the user to authenticate
    ///
    /// Once authenticated the session stays that way and further calls
    /// return [`AuthRequest::Authenticated`] without asking again. If an
    /// attempt is already outstanding this returns [`AuthRequest::InFlight`]
    /// without touching the authenticator. Failures leave the gate
    /// unauthenticated and are never retried.
    pub async fn request_authentication(&self) -> AuthRequest {
        let mut already_authenticated = false;
        let started = self.state.send_if_modified(|state| {
            if state.authenticated {
                already_authenticated = true;
                false
            } else if state.authenticating {
                false
            } else {
                state.authenticating = true;
                true
            }
        });

        if already_authenticated {
            return AuthRequest::Authenticated;
        }
        if !started {
            tracing::debug!("Authentication already in progress");
            return AuthRequest::InFlight;
        }

        let mut in_flight = InFlight {
            state: &self.state,
            settled: false,
        };

        let result = match self.authenticator.can_evaluate() {
            Ok(()) => {
                tracing::debug!("Requesting authentication");
                self.authenticator.evaluate(&self.justification).await
            }
            Err(failure) => Err(failure),
        };

        let authenticated = result.is_ok();
        in_flight.settle(authenticated);

        match result {
            Ok(()) => {
                tracing::info!("Authentication succeeded");
                AuthRequest::Authenticated
            }
            Err(failure) => {
                tracing::warn!(reason = %failure, "Authentication failed");
                AuthRequest::Denied(failure)
            }
        }
    }
}

/// Clears the in-flight flag exactly once, even if the request future is dropped
struct InFlight<'a> {
    state: &'a watch::Sender<AuthState>,
    settled: bool,
}

impl InFlight<'_> {
    fn settle(&mut self, authenticated: bool) {
        self.state.send_modify(|state| {
            state.authenticated = authenticated;
            state.authenticating = false;
        });
        self.settled = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            self.settle(false);
        }
    }
}
