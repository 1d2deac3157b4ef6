//! User settings for the utilisation table
//!
//! Manages preferences for where the roster lives and how the table is
//! exported and shown. Currency and locale are fixed and not configurable.

use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::paths::UtilisationPaths;
use crate::error::UtilisationError;
use crate::storage::write_json_atomic;

/// Output format for table exports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Comma-separated values with a header row (default)
    #[default]
    Csv,
    /// JSON document with export metadata
    Json,
    /// YAML document with export metadata
    #[value(alias = "yml")]
    Yaml,
}

impl ExportFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// User settings for the utilisation table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Roster dataset to use when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset_path: Option<PathBuf>,

    /// Format used by `export` when none is given
    #[serde(default)]
    pub default_export_format: ExportFormat,

    /// Pretty-print JSON exports
    #[serde(default = "default_pretty_json")]
    pub pretty_json: bool,

    /// Maximum width of the person column in terminal output (0 = unlimited)
    #[serde(default)]
    pub max_name_width: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_pretty_json() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            dataset_path: None,
            default_export_format: ExportFormat::default(),
            pretty_json: default_pretty_json(),
            max_name_width: 0,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &UtilisationPaths) -> Result<Self, UtilisationError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                UtilisationError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                UtilisationError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            debug!(path = %settings_path.display(), "loaded settings");
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &UtilisationPaths) -> Result<(), UtilisationError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Resolve the roster dataset: explicit path, then settings, then the default location
    pub fn resolve_dataset(&self, explicit: Option<PathBuf>, paths: &UtilisationPaths) -> PathBuf {
        explicit
            .or_else(|| self.dataset_path.clone())
            .unwrap_or_else(|| paths.dataset_file())
    }
}
