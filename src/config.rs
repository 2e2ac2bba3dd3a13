//! Configuration handling for the TUI

use crate::backend::DEFAULT_ADDRESS;
use crate::state::{DEFAULT_MAX_VISIBLE_TOASTS, DEFAULT_TOAST_DURATION_MS};
use crate::submit::CloseBehavior;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the configured server address
pub const SERVER_ADDRESS_ENV: &str = "PROVIDER_TUI_SERVER_ADDRESS";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Provider service address
    pub server_address: Option<String>,
    /// When the rename dialog closes after submitting
    pub close_behavior: Option<CloseBehavior>,
    /// How long a toast stays on screen, in milliseconds
    pub toast_duration_ms: Option<u64>,
    /// Maximum number of stacked toasts
    pub max_visible_toasts: Option<usize>,
    /// Reject blank aliases before submitting
    pub require_alias: Option<bool>,
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "provider-tui", "provider-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Resolve the server address: CLI flag, then environment, then file
    pub fn server_address(&self, cli_override: Option<&str>) -> String {
        let env = std::env::var(SERVER_ADDRESS_ENV).ok();
        Self::pick_address(cli_override, env.as_deref(), self.server_address.as_deref())
    }

    fn pick_address(cli: Option<&str>, env: Option<&str>, file: Option<&str>) -> String {
        [cli, env, file]
            .into_iter()
            .flatten()
            .find(|a| !a.trim().is_empty())
            .unwrap_or(DEFAULT_ADDRESS)
            .to_string()
    }

    pub fn close_behavior(&self) -> CloseBehavior {
        self.close_behavior.unwrap_or_default()
    }

    pub fn toast_duration_ms(&self) -> u64 {
        self.toast_duration_ms.unwrap_or(DEFAULT_TOAST_DURATION_MS)
    }

    pub fn max_visible_toasts(&self) -> usize {
        self.max_visible_toasts.unwrap_or(DEFAULT_MAX_VISIBLE_TOASTS)
    }

    pub fn require_alias(&self) -> bool {
        self.require_alias.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("provider-tui-test-{}-{}", name, uuid::Uuid::new_v4()))
            .join("config.json")
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.server_address.is_none());
        assert_eq!(config.close_behavior(), CloseBehavior::Optimistic);
        assert_eq!(config.toast_duration_ms(), 5000);
        assert_eq!(config.max_visible_toasts(), 3);
        assert!(!config.require_alias());
    }

    #[test]
    fn test_serialization() {
        let config = AppConfig {
            server_address: Some("http://localhost:50051".to_string()),
            close_behavior: Some(CloseBehavior::OnSuccess),
            toast_duration_ms: Some(2000),
            max_visible_toasts: Some(5),
            require_alias: Some(true),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, config);
        assert!(json.contains("\"on_success\""));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"require_alias": true, "unknown_field": "value"}"#;
        let parsed: AppConfig = serde_json::from_str(json).unwrap();
        assert!(parsed.require_alias());
    }

    #[test]
    fn test_save_and_load_roundtrip_on_disk() {
        let path = temp_config_path("roundtrip");
        let config = AppConfig {
            toast_duration_ms: Some(1234),
            ..Default::default()
        };

        config.save_to(&path).unwrap();
        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.toast_duration_ms(), 1234);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let loaded = AppConfig::load_from(&temp_config_path("missing")).unwrap();
        assert_eq!(loaded, AppConfig::default());
    }

    #[test]
    fn test_load_invalid_json_is_error() {
        let path = temp_config_path("invalid");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{not json").unwrap();

        assert!(AppConfig::load_from(&path).is_err());

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_address_precedence() {
        assert_eq!(
            AppConfig::pick_address(Some("http://cli:1"), Some("http://env:2"), Some("http://file:3")),
            "http://cli:1"
        );
        assert_eq!(
            AppConfig::pick_address(None, Some("http://env:2"), Some("http://file:3")),
            "http://env:2"
        );
        assert_eq!(
            AppConfig::pick_address(None, Some(" "), Some("http://file:3")),
            "http://file:3"
        );
        assert_eq!(AppConfig::pick_address(None, None, None), DEFAULT_ADDRESS);
    }
}
