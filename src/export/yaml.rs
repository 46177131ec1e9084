//! YAML export

use std::io::Write;

use super::json::GaugeExport;
use crate::error::{GaugeError, GaugeResult};

fn export_err(e: impl std::fmt::Display) -> GaugeError {
    GaugeError::Export(e.to_string())
}

/// Write the export as YAML, preceded by a comment header
pub fn export_yaml<W: Write>(export: &GaugeExport, writer: &mut W) -> GaugeResult<()> {
    writeln!(writer, "# StressGauge Export").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_err)?;
    writeln!(
        writer,
        "# Stress score {} ({})",
        export.dashboard.stress.score, export.dashboard.stress.band
    )
    .map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, export).map_err(export_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::{FinancialSnapshot, HouseholdProfile, Strategy};

    #[test]
    fn test_yaml_export() {
        let profile = HouseholdProfile {
            snapshot: FinancialSnapshot {
                income: 2500.0,
                ..Default::default()
            },
            strategies: vec![Strategy::new("Unit Trust", 150.0)],
            ..Default::default()
        };
        let export = GaugeExport::new(&profile, &Settings::default());

        let mut buf = Vec::new();
        export_yaml(&export, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with("# StressGauge Export"));
        assert!(text.contains("Unit Trust"));

        let body: serde_yaml::Value = serde_yaml::from_str(&text).unwrap();
        assert_eq!(body["dashboard"]["currency"].as_str(), Some("RM"));
    }
}
