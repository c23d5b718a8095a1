//! User settings for RAM
//!
//! Holds display preferences and the enrolled PIN used by the
//! authentication gate.

use serde::{Deserialize, Serialize};

use super::paths::RamPaths;
use crate::error::RamError;
use crate::storage::file_io::write_json_atomic;

/// Justification shown to the user whenever the gate asks for authentication
pub const DEFAULT_JUSTIFICATION: &str = "Authenticate to access passwords.";

/// Authentication settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSettings {
    /// Argon2id PHC string of the enrolled PIN; `None` means nothing is enrolled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pin_hash: Option<String>,

    /// Prompt text passed to the authenticator
    #[serde(default = "default_justification")]
    pub justification: String,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            pin_hash: None,
            justification: default_justification(),
        }
    }
}

/// User settings for RAM
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version of the settings file
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when rendering amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Authentication settings
    #[serde(default)]
    pub auth: AuthSettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_justification() -> String {
    DEFAULT_JUSTIFICATION.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            auth: AuthSettings::default(),
        }
    }
}

impl Settings {
    /// Whether a PIN has been enrolled
    pub fn has_pin(&self) -> bool {
        self.auth.pin_hash.is_some()
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &RamPaths) -> Result<Self, RamError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| RamError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| RamError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &RamPaths) -> Result<(), RamError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert!(!settings.has_pin());
        assert_eq!(settings.auth.justification, DEFAULT_JUSTIFICATION);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RamPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "€".to_string();
        settings.auth.pin_hash = Some("$argon2id$stub".to_string());
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert!(loaded.has_pin());
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.auth.justification, DEFAULT_JUSTIFICATION);
    }

    #[test]
    fn test_corrupt_settings_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RamPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let result = Settings::load_or_create(&paths);
        assert!(matches!(result, Err(RamError::Config(_))));
    }
}
