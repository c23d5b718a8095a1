//! Credential display formatting

use crate::models::CredentialRecord;

/// Shown in place of the list while the gate is locked
pub const LOCKED_PLACEHOLDER: &str = "Authenticate to view passwords";

/// Format the "Passwords" section; `None` renders the locked placeholder
pub fn format_credential_list(credentials: Option<&[CredentialRecord]>) -> String {
    let mut output = String::from("Passwords\n");

    match credentials {
        None => {
            output.push_str(&format!("  {}\n", LOCKED_PLACEHOLDER));
        }
        Some([]) => {
            output.push_str("  No passwords stored.\n");
        }
        Some(credentials) => {
            for (position, credential) in credentials.iter().enumerate() {
                output.push_str(&format!("  [{}] Website: {}\n", position, credential.website));
                output.push_str(&format!("      Username: {}\n", credential.username));
                output.push_str(&format!("      Password: {}\n", credential.password));
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locked() {
        let output = format_credential_list(None);
        assert!(output.contains(LOCKED_PLACEHOLDER));
    }

    #[test]
    fn test_unlocked() {
        let credentials = vec![CredentialRecord::new("example.com", "alice", "hunter2")];
        let output = format_credential_list(Some(credentials.as_slice()));

        assert!(output.contains("[0] Website: example.com"));
        assert!(output.contains("Username: alice"));
        assert!(output.contains("Password: hunter2"));
        assert!(!output.contains(LOCKED_PLACEHOLDER));
    }

    #[test]
    fn test_unlocked_empty() {
        let output = format_credential_list(Some(&[][..]));
        assert!(output.contains("No passwords stored."));
    }
}
