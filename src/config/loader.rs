//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the application
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{LeaveError, LeaveResult};

use super::types::{AppConfig, ExportConfig, ImportConfig};

/// Loads and provides access to the application configuration.
///
/// # Example
///
/// ```no_run
/// use leave_desk::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/leave_desk.yaml").unwrap();
/// println!("Exports go to {}", loader.export().output_dir.display());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file does not exist or cannot be read (`ConfigNotFound`)
    /// - The file contains invalid YAML or mistyped fields (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> LeaveResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| LeaveError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content).map_err(|message| LeaveError::ConfigParseError {
            path: path_str.clone(),
            message,
        })?;

        debug!(path = %path_str, "Loaded configuration");
        Ok(Self { config })
    }

    /// Parses configuration from YAML text. An empty document yields defaults.
    fn parse(content: &str) -> Result<AppConfig, String> {
        if content.trim().is_empty() {
            return Ok(AppConfig::default());
        }
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the export settings.
    pub fn export(&self) -> &ExportConfig {
        &self.config.export
    }

    /// Returns the import settings.
    pub fn import(&self) -> &ImportConfig {
        &self.config.import
    }
}
