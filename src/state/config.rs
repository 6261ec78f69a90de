//! Application configuration with persistence.
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/loupe/config.json`
//! - macOS: `~/Library/Application Support/loupe/config.json`
//! - Windows: `%APPDATA%/loupe/config.json`

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::navigation::Page;
use super::platform::AppPaths;
use crate::search::Locale;
use crate::theme::ThemeMode;

// ============================================================================
// AppConfig
// ============================================================================

/// User preferences serialized to `config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub theme: ThemeMode,
    /// Language of search type labels.
    pub locale: Locale,
    /// Our handle in the team chat and notes.
    pub username: String,
    pub team_name: String,
    /// Page shown on startup when `--page` is not given.
    pub default_page: Page,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Dark,
            locale: Locale::En,
            username: "@me".to_string(),
            team_name: "Arbitrage".to_string(),
            default_page: Page::Home,
        }
    }
}

impl AppConfig {
    /// Returns the path to the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or created.
    pub fn config_path() -> Result<PathBuf> {
        AppPaths::new().config_file()
    }

    /// Loads the configuration from `path`, falling back to defaults.
    ///
    /// A missing file is silent; any other failure is logged.
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::try_load_from(path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(path = %path.display(), "config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Attempts to load the configuration from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn try_load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Saves the configuration to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized or the
    /// file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        tracing::debug!(path = %path.display(), "config saved");
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.theme, ThemeMode::Dark);
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.username, "@me");
        assert_eq!(config.default_page, Page::Home);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        let config = AppConfig {
            theme: ThemeMode::Light,
            locale: Locale::Ru,
            team_name: "Desk 7".to_string(),
            default_page: Page::Deals,
            ..AppConfig::default()
        };

        config.save_to(&path).unwrap();
        assert_eq!(AppConfig::load_from(&path), config);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"theme":"light"}"#).unwrap();
        assert_eq!(config.theme, ThemeMode::Light);
        assert_eq!(config.team_name, "Arbitrage");
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(AppConfig::load_from(&path), AppConfig::default());
        assert!(AppConfig::try_load_from(&path).is_err());
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        assert_eq!(
            AppConfig::load_from(&dir.path().join("absent.json")),
            AppConfig::default()
        );
    }

    #[test]
    fn test_json_format() {
        let json = serde_json::to_string(&AppConfig::default()).unwrap();
        insta::assert_snapshot!(
            json,
            @r#"{"theme":"dark","locale":"en","username":"@me","team_name":"Arbitrage","default_page":"home"}"#
        );
    }
}
