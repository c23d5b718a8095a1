//! Service layer for RAM
//!
//! The service layer sits between the command surface and the stores. It
//! does the caller-side validation the stores deliberately skip and
//! applies the authentication gate to credential operations.

pub mod credential;
pub mod debt;

pub use credential::CredentialService;
pub use debt::DebtService;
