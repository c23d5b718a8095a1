//! Credential CLI commands
//!
//! Each command first makes the launch-time authentication attempt, so a
//! single invocation behaves like opening the app and then acting.

use clap::Subcommand;
use zeroize::Zeroizing;

use super::position_set;
use crate::auth::AuthRequest;
use crate::display::format_credential_list;
use crate::error::{RamError, RamResult};
use crate::session::Session;

/// Credential subcommands
#[derive(Subcommand)]
pub enum CredentialCommands {
    /// Store a website login
    Add {
        /// Website the login belongs to
        website: String,
        /// Username for the website
        username: String,
        /// Password (prompted without echo when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Show stored logins
    List,
    /// Delete logins by the numbers shown in `credential list`
    Delete {
        /// Numbers from `credential list`
        #[arg(required = true)]
        positions: Vec<usize>,
    },
    /// Authenticate and report whether the list is unlocked
    Unlock,
}

/// Handle a credential command
pub async fn handle_credential_command(session: &Session, cmd: CredentialCommands) -> RamResult<()> {
    // `unlock` makes its own attempt
    if !matches!(cmd, CredentialCommands::Unlock) {
        session.on_launch().await;
    }
    let service = session.credentials();

    match cmd {
        CredentialCommands::Add {
            website,
            username,
            password,
        } => {
            // Don't prompt for a password that would be refused
            service.require_unlocked("add passwords")?;

            let password = match password {
                Some(password) => Zeroizing::new(password),
                None => prompt_password().await?,
            };

            let credential = service.add(&website, &username, &password)?;
            println!(
                "Added password for {} ({})",
                credential.website, credential.username
            );
        }

        CredentialCommands::List => {
            let visible = service.visible()?;
            print!("{}", format_credential_list(visible.as_deref()));
        }

        CredentialCommands::Delete { positions } => {
            let removed = service.delete(&position_set(&positions))?;
            for credential in &removed {
                println!(
                    "Deleted password for {} ({})",
                    credential.website, credential.username
                );
            }
        }

        CredentialCommands::Unlock => unlock(session).await,
    }

    Ok(())
}

async fn unlock(session: &Session) {
    if let AuthRequest::Denied(reason) = session.gate.request_authentication().await {
        println!("Authentication failed: {}", reason);
    }
    println!("Passwords: {}", session.gate.state().phase());
}

async fn prompt_password() -> RamResult<Zeroizing<String>> {
    tokio::task::spawn_blocking(|| rpassword::prompt_password("Password: "))
        .await
        .map_err(|e| RamError::Io(format!("Password prompt failed: {}", e)))?
        .map(Zeroizing::new)
        .map_err(|e| RamError::Io(format!("Failed to read password: {}", e)))
}
