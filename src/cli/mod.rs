//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod credential;
pub mod debt;
pub mod pin;

pub use credential::{handle_credential_command, CredentialCommands};
pub use debt::{handle_debt_command, DebtCommands};
pub use pin::{handle_pin_command, PinCommands};

use std::collections::BTreeSet;

/// Collect positions given on the command line, dropping repeats
fn position_set(positions: &[usize]) -> BTreeSet<usize> {
    positions.iter().copied().collect()
}
