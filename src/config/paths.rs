//! Path management for RAM
//!
//! Provides XDG-compliant path resolution for configuration and data.
//!
//! ## Path Resolution Order
//!
//! 1. `RAM_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/ram` or `~/.config/ram`
//! 3. Windows: `%APPDATA%\ram`

use std::path::PathBuf;

use crate::error::RamError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "RAM_DATA_DIR";

/// Manages all paths used by RAM
#[derive(Debug, Clone)]
pub struct RamPaths {
    /// Base directory for all RAM data
    base_dir: PathBuf,
}

impl RamPaths {
    /// Create a new RamPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, RamError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create RamPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/ram/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory holding one file per stored collection
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), RamError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| RamError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| RamError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, RamError> {
    if let Ok(config_home) = std::env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(config_home).join("ram"));
    }

    let home = std::env::var("HOME")
        .map_err(|_| RamError::Config("Could not determine HOME directory".into()))?;
    Ok(PathBuf::from(home).join(".config").join("ram"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, RamError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| RamError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("ram"))
}
