//! JSON export
//!
//! The export carries the stored profile together with the dashboard computed
//! from it, so a reader never has to re-run the engine.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::config::Settings;
use crate::error::{GaugeError, GaugeResult};
use crate::models::HouseholdProfile;
use crate::reports::DashboardReport;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full export document
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GaugeExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub app_version: String,
    pub profile: HouseholdProfile,
    pub dashboard: DashboardReport,
}

impl GaugeExport {
    pub fn new(profile: &HouseholdProfile, settings: &Settings) -> Self {
        let dashboard = DashboardReport::generate(profile, settings);
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: dashboard.generated_at,
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            profile: profile.clone(),
            dashboard,
        }
    }
}

/// Write the export as pretty-printed JSON
pub fn export_json<W: Write>(export: &GaugeExport, writer: &mut W) -> GaugeResult<()> {
    serde_json::to_writer_pretty(&mut *writer, export)
        .map_err(|e| GaugeError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| GaugeError::Export(e.to_string()))
}
