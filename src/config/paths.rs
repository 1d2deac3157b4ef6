//! Path management for the utilisation table
//!
//! Provides XDG-compliant path resolution for configuration and the roster
//! dataset.
//!
//! ## Path Resolution Order
//!
//! 1. `UTILISATION_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/utilisation-table` or `~/.config/utilisation-table`
//! 3. Windows: `%APPDATA%\utilisation-table`

use std::path::PathBuf;

use crate::error::UtilisationError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "UTILISATION_DATA_DIR";

/// Manages all paths used by the utilisation table
#[derive(Debug, Clone)]
pub struct UtilisationPaths {
    /// Base directory for all data
    base_dir: PathBuf,
}

impl UtilisationPaths {
    /// Create a new UtilisationPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, UtilisationError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create UtilisationPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/utilisation-table/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/utilisation-table/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the default roster dataset path
    pub fn dataset_file(&self) -> PathBuf {
        self.data_dir().join("source-data.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), UtilisationError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| UtilisationError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| UtilisationError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if the settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default base directory based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, UtilisationError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                UtilisationError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("utilisation-table"))
}

/// Resolve the default base directory based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, UtilisationError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| UtilisationError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("utilisation-table"))
}
