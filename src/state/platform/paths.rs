//! Platform-specific locations of the config, store and log files.
//!
//! | Platform | Config Dir | Data Dir |
//! |----------|------------|----------|
//! | Linux | `~/.config/loupe` | `~/.local/share/loupe` |
//! | macOS | `~/Library/Application Support/loupe` | Same as config |
//! | Windows | `%APPDATA%/loupe` | `%APPDATA%/loupe` |
//!
//! The data directory can be overridden with `--data-dir`; the config file
//! always stays in the platform config directory.

use color_eyre::Result;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Constants
// ============================================================================

/// Application name used for directory naming.
pub const APP_NAME: &str = "loupe";

pub const CONFIG_FILE_NAME: &str = "config.json";

pub const LOG_FILE_NAME: &str = "loupe.log";

// ============================================================================
// AppPaths
// ============================================================================

/// Resolves application directories and files.
#[derive(Debug, Clone, Default)]
pub struct AppPaths {
    /// Replaces the platform data directory when set.
    data_dir_override: Option<PathBuf>,
}

impl AppPaths {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `dir` for the store and log file instead of the platform default.
    #[must_use]
    pub fn with_data_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir_override: Some(dir.into()),
        }
    }

    // ========================================================================
    // Directory Methods
    // ========================================================================

    /// Returns the configuration directory, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be determined or created.
    pub fn config_dir(&self) -> Result<PathBuf> {
        let mut path = dirs::config_dir()
            .ok_or_else(|| color_eyre::eyre::eyre!("Could not find config directory"))?;
        path.push(APP_NAME);
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    /// Returns the data directory, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be determined or created.
    pub fn data_dir(&self) -> Result<PathBuf> {
        let path = match &self.data_dir_override {
            Some(dir) => dir.clone(),
            None => {
                let mut path = dirs::data_dir()
                    .ok_or_else(|| color_eyre::eyre::eyre!("Could not find data directory"))?;
                path.push(APP_NAME);
                path
            }
        };
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    // ========================================================================
    // File Methods
    // ========================================================================

    /// Returns the path to `config.json`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined or created.
    pub fn config_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Returns the path to `loupe.log`.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be determined or created.
    pub fn log_file(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join(LOG_FILE_NAME))
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
    fn test_data_dir_override_is_created() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("nested").join("loupe-data");
        let paths = AppPaths::with_data_dir(&dir);

        assert_eq!(paths.data_dir().unwrap(), dir);
        assert!(dir.is_dir());
        assert_eq!(paths.log_file().unwrap(), dir.join(LOG_FILE_NAME));
    }

    #[test]
    fn test_config_file_name() {
        if let Ok(path) = AppPaths::new().config_file() {
            assert_eq!(
                path.file_name().and_then(|n| n.to_str()),
                Some(CONFIG_FILE_NAME)
            );
            let parent = path
                .parent()
                .and_then(|p| p.file_name())
                .and_then(|n| n.to_str());
            assert_eq!(parent, Some(APP_NAME));
        }
        // Skip if config dir unavailable
    }
}
