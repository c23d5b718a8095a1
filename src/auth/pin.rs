//! PIN-based authenticator
//!
//! Hosts without a biometric API fall back to a PIN enrolled with
//! `ram pin set`. Only an Argon2id hash of the PIN is stored; a missing
//! hash plays the part of "no biometrics enrolled".

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use async_trait::async_trait;
use zeroize::Zeroizing;

use super::authenticator::{AuthFailure, Authenticator};
use crate::config::Settings;
use crate::error::{RamError, RamResult};

/// Shortest PIN accepted at enrollment
pub const MIN_PIN_LEN: usize = 4;

/// Where the PIN comes from when a check runs
#[derive(Clone)]
pub enum PinSource {
    /// Ask on the terminal with echo disabled
    Prompt,
    /// Supplied up front (`--pin` / `RAM_PIN`)
    Provided(Zeroizing<String>),
}

/// Authenticator that verifies a PIN against the enrolled hash
pub struct PinAuthenticator {
    pin_hash: Option<String>,
    source: PinSource,
}

impl PinAuthenticator {
    pub fn new(pin_hash: Option<String>, source: PinSource) -> Self {
        Self { pin_hash, source }
    }

    /// Build from settings, using `pin` when given and prompting otherwise
    pub fn from_settings(settings: &Settings, pin: Option<String>) -> Self {
        let source = match pin {
            Some(pin) => PinSource::Provided(Zeroizing::new(pin)),
            None => PinSource::Prompt,
        };
        Self::new(settings.auth.pin_hash.clone(), source)
    }
}

#[async_trait]
impl Authenticator for PinAuthenticator {
    fn can_evaluate(&self) -> Result<(), AuthFailure> {
        let hash = self.pin_hash.as_deref().ok_or_else(|| {
            AuthFailure::Unavailable("no PIN enrolled (run `ram pin set`)".into())
        })?;

        PasswordHash::new(hash)
            .map(|_| ())
            .map_err(|e| AuthFailure::Unavailable(format!("stored PIN hash is unreadable: {}", e)))
    }

    async fn evaluate(&self, justification: &str) -> Result<(), AuthFailure> {
        let hash = self
            .pin_hash
            .clone()
            .ok_or_else(|| AuthFailure::Unavailable("no PIN enrolled".into()))?;
        let source = self.source.clone();
        let prompt = format!("{} PIN: ", justification);

        // Terminal reads and Argon2 both block
        tokio::task::spawn_blocking(move || {
            let pin = match source {
                PinSource::Provided(pin) => pin,
                PinSource::Prompt => read_pin(&prompt)?,
            };
            verify_pin(&pin, &hash)
        })
        .await
        .map_err(|e| AuthFailure::Unavailable(format!("authentication task failed: {}", e)))?
    }
}

/// Read a PIN from the terminal without echo
fn read_pin(prompt: &str) -> Result<Zeroizing<String>, AuthFailure> {
    match rpassword::prompt_password(prompt) {
        Ok(pin) => Ok(Zeroizing::new(pin)),
        Err(e) if e.kind() == std::io::ErrorKind::Interrupted => Err(AuthFailure::Canceled),
        Err(e) => Err(AuthFailure::Unavailable(format!("could not read PIN: {}", e))),
    }
}

/// Check a PIN against a stored Argon2 PHC string
pub fn verify_pin(pin: &str, pin_hash: &str) -> Result<(), AuthFailure> {
    let parsed = PasswordHash::new(pin_hash)
        .map_err(|e| AuthFailure::Unavailable(format!("stored PIN hash is unreadable: {}", e)))?;

    Argon2::default()
        .verify_password(pin.as_bytes(), &parsed)
        .map_err(|_| AuthFailure::Rejected("incorrect PIN".into()))
}

/// Reject PINs too short to be worth enrolling
pub fn validate_pin(pin: &str) -> RamResult<()> {
    if pin.chars().count() < MIN_PIN_LEN {
        return Err(RamError::InvalidInput(format!(
            "PIN must be at least {} characters",
            MIN_PIN_LEN
        )));
    }
    Ok(())
}

/// Hash a PIN for storage in settings
pub fn hash_pin(pin: &str) -> RamResult<String> {
    validate_pin(pin)?;

    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(pin.as_bytes(), &salt)
        .map_err(|e| RamError::Authentication(format!("PIN hashing failed: {}", e)))?;

    Ok(hash.to_string())
}
