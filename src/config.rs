//! Configuration handling for the signup client

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::state::validate;

/// User configuration for the signup client
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SignupConfig {
    /// Account service address
    pub account_address: Option<String>,
    /// Profile service address
    pub profile_address: Option<String>,
    /// State pre-selected on a fresh form
    pub default_state: Option<String>,
    /// Keep the username filled in after a failed attempt
    pub remember_username: Option<bool>,
}

impl SignupConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "rentwheels", "rentwheels-signup")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: SignupConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// The configured default state, if it names a real option
    pub fn valid_default_state(&self) -> Option<&str> {
        self.default_state
            .as_deref()
            .filter(|s| validate::valid_state(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SignupConfig::default();
        assert!(config.account_address.is_none());
        assert!(config.profile_address.is_none());
        assert!(config.default_state.is_none());
        assert!(config.remember_username.is_none());
    }

    #[test]
    fn test_serialization() {
        let config = SignupConfig {
            account_address: Some("https://api.rentwheels.io/v1".to_string()),
            profile_address: Some("https://api.rentwheels.io/v1/profiles".to_string()),
            default_state: Some("Goa".to_string()),
            remember_username: Some(true),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: SignupConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed.account_address,
            Some("https://api.rentwheels.io/v1".to_string())
        );
        assert_eq!(parsed.default_state, Some("Goa".to_string()));
        assert_eq!(parsed.remember_username, Some(true));
    }

    #[test]
    fn test_partial_serialization() {
        let config = SignupConfig {
            default_state: Some("Kerala".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: SignupConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.default_state, Some("Kerala".to_string()));
        assert!(parsed.account_address.is_none());
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let json = "{}";
        let parsed: SignupConfig = serde_json::from_str(json).unwrap();
        assert!(parsed.default_state.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"default_state": "Goa", "unknown_field": "value"}"#;
        let parsed: SignupConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.default_state, Some("Goa".to_string()));
    }

    #[test]
    fn test_valid_default_state_filters_unknown_options() {
        let mut config = SignupConfig {
            default_state: Some("Goa".to_string()),
            ..Default::default()
        };
        assert_eq!(config.valid_default_state(), Some("Goa"));

        config.default_state = Some("Atlantis".to_string());
        assert_eq!(config.valid_default_state(), None);

        config.default_state = None;
        assert_eq!(config.valid_default_state(), None);
    }

    #[test]
    fn test_load_returns_default_when_no_file() {
        let result = SignupConfig::load();
        assert!(result.is_ok());
    }
}
