//! Path management for StressGauge
//!
//! ## Path Resolution Order
//!
//! 1. `STRESSGAUGE_DATA_DIR` environment variable (if set)
//! 2. The platform config directory from the `directories` crate
//!    (`~/.config/stressgauge` on Linux, `%APPDATA%\stressgauge\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::GaugeError;

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "STRESSGAUGE_DATA_DIR";

/// Manages all paths used by StressGauge
#[derive(Debug, Clone)]
pub struct GaugePaths {
    /// Base directory for all StressGauge data
    base_dir: PathBuf,
}

impl GaugePaths {
    /// Create a new GaugePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, GaugeError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create GaugePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to profile.json (snapshot, goals, strategies, ...)
    pub fn profile_file(&self) -> PathBuf {
        self.data_dir().join("profile.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), GaugeError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| GaugeError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| GaugeError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if StressGauge has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, GaugeError> {
    ProjectDirs::from("", "", "stressgauge")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| GaugeError::Config("Could not determine home directory".into()))
}
