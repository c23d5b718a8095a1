//! RAM - track who owes you money, and keep website logins behind a lock
//!
//! This library provides the core functionality for the `ram` command-line
//! tool: two flat record lists persisted in a local key-value store, and an
//! authentication gate that decides whether the credential list may be
//! read or extended.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Debt and credential records, money, ids
//! - `storage`: Key-value persistence and the generic record store
//! - `auth`: Authenticator contract, authentication gate, PIN authenticator
//! - `services`: Validation and gating on top of the stores
//! - `session`: The owned bundle of stores and gate for one process
//! - `display`, `cli`: Terminal rendering and command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use ram::config::{RamPaths, Settings};
//! use ram::session::Session;
//!
//! let paths = RamPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let session = Session::open(&paths, &settings, None)?;
//! session.on_launch().await;
//! session.debts().add("Alice", "50")?;
//! ```

pub mod auth;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod session;
pub mod storage;

#[cfg(test)]
mod test_support;

pub use error::{RamError, RamResult};
