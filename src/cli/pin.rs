//! PIN enrollment commands
//!
//! The PIN is what the authentication gate checks on hosts without a
//! biometric API. Changing or clearing an enrolled PIN requires the
//! current one.

use std::sync::Arc;

use clap::Subcommand;
use zeroize::Zeroizing;

use crate::auth::{hash_pin, AuthGate, AuthRequest, PinAuthenticator};
use crate::config::{RamPaths, Settings};
use crate::error::{RamError, RamResult};

/// PIN subcommands
#[derive(Subcommand)]
pub enum PinCommands {
    /// Enroll a PIN, or replace the current one
    Set {
        /// New PIN (prompted twice without echo when omitted)
        #[arg(long, env = "RAM_NEW_PIN", hide_env_values = true)]
        new_pin: Option<String>,
    },
    /// Remove the enrolled PIN; passwords stay locked until a new one is set
    Clear,
    /// Show whether a PIN is enrolled
    Status,
}

/// Handle a PIN command
pub async fn handle_pin_command(
    paths: &RamPaths,
    settings: &mut Settings,
    current_pin: Option<String>,
    cmd: PinCommands,
) -> RamResult<()> {
    match cmd {
        PinCommands::Set { new_pin } => {
            if settings.has_pin() {
                confirm_current_pin(settings, current_pin).await?;
            }

            let new_pin = match new_pin {
                Some(pin) => Zeroizing::new(pin),
                None => prompt_new_pin().await?,
            };

            settings.auth.pin_hash = Some(hash_pin(&new_pin)?);
            settings.save(paths)?;
            tracing::info!("PIN enrolled");
            println!("PIN set.");
        }

        PinCommands::Clear => {
            if !settings.has_pin() {
                println!("No PIN is enrolled.");
                return Ok(());
            }

            confirm_current_pin(settings, current_pin).await?;
            settings.auth.pin_hash = None;
            settings.save(paths)?;
            tracing::info!("PIN cleared");
            println!("PIN cleared. Passwords stay locked until a new PIN is set.");
        }

        PinCommands::Status => {
            if settings.has_pin() {
                println!("PIN: enrolled");
            } else {
                println!("PIN: not enrolled (run 'ram pin set')");
            }
        }
    }

    Ok(())
}

/// Run the regular authentication flow against the enrolled PIN
async fn confirm_current_pin(settings: &Settings, current_pin: Option<String>) -> RamResult<()> {
    let authenticator = PinAuthenticator::from_settings(settings, current_pin);
    let gate = AuthGate::new(Arc::new(authenticator), "Enter your current PIN.");

    match gate.request_authentication().await {
        AuthRequest::Authenticated => Ok(()),
        _ => Err(RamError::AuthenticationRequired("change the PIN")),
    }
}

async fn prompt_new_pin() -> RamResult<Zeroizing<String>> {
    tokio::task::spawn_blocking(|| -> RamResult<Zeroizing<String>> {
        let read = |prompt: &str| {
            rpassword::prompt_password(prompt)
                .map(Zeroizing::new)
                .map_err(|e| RamError::Io(format!("Failed to read PIN: {}", e)))
        };

        let first = read("New PIN: ")?;
        let second = read("Confirm PIN: ")?;
        if *first != *second {
            return Err(RamError::InvalidInput("PINs do not match".into()));
        }
        Ok(first)
    })
    .await
    .map_err(|e| RamError::Io(format!("PIN prompt failed: {}", e)))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::verify_pin;
    use tempfile::TempDir;

    fn setup() -> (TempDir, RamPaths) {
        let temp_dir = TempDir::new().unwrap();
        let paths = RamPaths::with_base_dir(temp_dir.path().to_path_buf());
        (temp_dir, paths)
    }

    #[tokio::test]
    async fn test_set_first_pin() {
        let (_temp_dir, paths) = setup();
        let mut settings = Settings::default();

        let cmd = PinCommands::Set {
            new_pin: Some("2468".into()),
        };
        handle_pin_command(&paths, &mut settings, None, cmd).await.unwrap();

        let saved = Settings::load_or_create(&paths).unwrap();
        assert!(verify_pin("2468", saved.auth.pin_hash.as_deref().unwrap()).is_ok());
    }

    #[tokio::test]
    async fn test_replace_requires_current_pin() {
        let (_temp_dir, paths) = setup();
        let mut settings = Settings::default();
        settings.auth.pin_hash = Some(hash_pin("2468").unwrap());

        let cmd = PinCommands::Set {
            new_pin: Some("1357".into()),
        };
        let result = handle_pin_command(&paths, &mut settings, Some("0000".into()), cmd).await;
        assert!(matches!(result, Err(RamError::AuthenticationRequired(_))));

        let cmd = PinCommands::Set {
            new_pin: Some("1357".into()),
        };
        handle_pin_command(&paths, &mut settings, Some("2468".into()), cmd)
            .await
            .unwrap();
        assert!(verify_pin("1357", settings.auth.pin_hash.as_deref().unwrap()).is_ok());
    }

    #[tokio::test]
    async fn test_clear() {
        let (_temp_dir, paths) = setup();
        let mut settings = Settings::default();
        settings.auth.pin_hash = Some(hash_pin("2468").unwrap());

        handle_pin_command(&paths, &mut settings, Some("2468".into()), PinCommands::Clear)
            .await
            .unwrap();

        assert!(!settings.has_pin());
        assert!(!Settings::load_or_create(&paths).unwrap().has_pin());
    }
}
