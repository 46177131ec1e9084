//! CLI command for data export

use clap::ValueEnum;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::config::Settings;
use crate::error::{GaugeError, GaugeResult};
use crate::export::{export_buckets_csv, export_json, export_yaml, GaugeExport};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Profile and dashboard as JSON
    Json,
    /// Profile and dashboard as YAML
    Yaml,
    /// Allocation buckets as CSV
    Csv,
}

/// Write an export to `output`, or to stdout when no path is given
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> GaugeResult<()> {
    let export = GaugeExport::new(&storage.profile.get_validated()?, settings);

    match &output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                GaugeError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(&export, format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| GaugeError::Export(e.to_string()))?;
            eprintln!("Exported to: {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            write_export(&export, format, &mut stdout.lock())?;
        }
    }

    Ok(())
}

fn write_export<W: Write>(export: &GaugeExport, format: ExportFormat, writer: &mut W) -> GaugeResult<()> {
    match format {
        ExportFormat::Json => export_json(export, writer),
        ExportFormat::Yaml => export_yaml(export, writer),
        ExportFormat::Csv => export_buckets_csv(&export.dashboard.allocation, writer),
    }
}
