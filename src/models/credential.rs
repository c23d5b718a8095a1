//! Credential model
//!
//! A stored website login. Fields are kept in plaintext on disk; in memory
//! the strings are zeroed when the record is dropped.

use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::ids::CredentialId;
use super::record::Record;

/// A website credential
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct CredentialRecord {
    /// Unique identifier
    #[zeroize(skip)]
    pub id: CredentialId,

    pub website: String,

    pub username: String,

    pub password: String,
}

impl CredentialRecord {
    /// Create a new credential with a fresh id
    pub fn new(
        website: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: CredentialId::new(),
            website: website.into(),
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Record for CredentialRecord {
    type Id = CredentialId;

    const ENTITY: &'static str = "Credential";
    const COLLECTION: &'static str = "passwords";

    fn id(&self) -> CredentialId {
        self.id
    }
}

// Keeps the password out of log lines and panic messages.
impl fmt::Debug for CredentialRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialRecord")
            .field("id", &self.id)
            .field("website", &self.website)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_password() {
        let cred = CredentialRecord::new("example.com", "alice", "hunter2");
        let debug = format!("{:?}", cred);
        assert!(debug.contains("example.com"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_zeroize_clears_fields() {
        let mut cred = CredentialRecord::new("example.com", "alice", "hunter2");
        let id = cred.id;
        cred.zeroize();
        assert!(cred.password.is_empty());
        assert!(cred.website.is_empty());
        assert_eq!(cred.id, id);
    }

    #[test]
    fn test_json_field_order() {
        let cred = CredentialRecord::new("example.com", "alice", "hunter2");
        let json = serde_json::to_string(&cred).unwrap();
        let expected = format!(
            r#"{{"id":{},"website":"example.com","username":"alice","password":"hunter2"}}"#,
            serde_json::to_string(&cred.id).unwrap()
        );
        assert_eq!(json, expected);
    }
}
