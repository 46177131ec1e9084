//! User settings for StressGauge
//!
//! Display preferences and feature switches. Settings never change how the
//! engine computes; they only decide what is shown.

use serde::{Deserialize, Serialize};

use super::paths::GaugePaths;
use crate::error::GaugeError;

/// User settings for StressGauge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Whether claimed subsidies appear in the allocation breakdown
    #[serde(default)]
    pub subsidies_enabled: bool,

    /// Width of the bar column in the dashboard
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,

    /// Whether `init` has been run
    #[serde(default)]
    pub setup_completed: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "RM".to_string()
}

fn default_bar_width() -> usize {
    24
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            subsidies_enabled: false,
            bar_width: default_bar_width(),
            setup_completed: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &GaugePaths) -> Result<Self, GaugeError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| GaugeError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                GaugeError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &GaugePaths) -> Result<(), GaugeError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| GaugeError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| GaugeError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
