//! The authentication collaborator contract
//!
//! The gate never performs an identity check itself. It asks an
//! [`Authenticator`] whether a check is possible on this host and, if so,
//! awaits its verdict.

use async_trait::async_trait;
use thiserror::Error;

/// Why an authentication attempt did not succeed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthFailure {
    /// The host cannot run the check (nothing enrolled, no input device, ...)
    #[error("authentication unavailable: {0}")]
    Unavailable(String),

    /// The check ran and the user failed it
    #[error("authentication failed: {0}")]
    Rejected(String),

    /// The user backed out of the check
    #[error("authentication canceled")]
    Canceled,
}

/// A facility that can verify the user's identity
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Whether an identity check can run right now; a pure query
    fn can_evaluate(&self) -> Result<(), AuthFailure>;

    /// Run the identity check, showing `justification` to the user
    async fn evaluate(&self, justification: &str) -> Result<(), AuthFailure>;
}
