//! Configuration module for the utilisation table
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::UtilisationPaths;
pub use settings::{ExportFormat, Settings};
