//! Export module for StressGauge
//!
//! - JSON: profile plus computed dashboard, machine-readable
//! - YAML: the same document with a comment header
//! - CSV: allocation buckets, spreadsheet-compatible

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_buckets_csv;
pub use json::{export_json, GaugeExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_yaml;
