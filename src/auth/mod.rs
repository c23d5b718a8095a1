//! Authentication for RAM
//!
//! - `Authenticator`: the collaborator contract (capability check plus an
//!   asynchronous identity check)
//! - `AuthGate`: the session's authenticated/authenticating state machine
//! - `PinAuthenticator`: the host implementation backed by an enrolled PIN

pub mod authenticator;
pub mod gate;
pub mod pin;

pub use authenticator::{AuthFailure, Authenticator};
pub use gate::{AuthGate, AuthPhase, AuthRequest, AuthState};
pub use pin::{hash_pin, verify_pin, PinAuthenticator, PinSource};
