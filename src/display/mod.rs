//! Display formatting for terminal output
//!
//! Renders the two lists the way the command layer prints them.

pub mod credential;
pub mod debt;

pub use credential::{format_credential_list, LOCKED_PLACEHOLDER};
pub use debt::{format_debt_list, format_outstanding};
