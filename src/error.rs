//! Custom error types for RAM
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for RAM operations
#[derive(Error, Debug)]
pub enum RamError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Caller-side input validation failed (e.g. an amount that isn't a number)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A contract violation by the caller, such as a delete position past the end
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// A gated operation was attempted without authenticating first
    #[error("Authentication required to {0}")]
    AuthenticationRequired(&'static str),

    /// PIN hashing or verification machinery failed
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl RamError {
    /// Create an "index out of range" error for a positional delete
    pub fn position_out_of_range(position: usize, len: usize) -> Self {
        Self::InvalidArgument(format!(
            "position {} is out of range for a collection of {} record(s)",
            position, len
        ))
    }
}

impl From<std::io::Error> for RamError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for RAM operations
pub type RamResult<T> = Result<T, RamError>;
