//! Configuration module for RAM
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::RamPaths;
pub use settings::Settings;
