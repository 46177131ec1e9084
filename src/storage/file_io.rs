//! JSON file helpers with atomic writes

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::GaugeError;

/// Read JSON from `path`, or `T::default()` when the file does not exist
pub fn read_json<T, P>(path: P) -> Result<T, GaugeError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path)
        .map_err(|e| GaugeError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| GaugeError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write JSON to `path` atomically
///
/// The data goes to a sibling temp file which is synced and then renamed over
/// the target, so readers see either the old or the new file, never half.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), GaugeError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            GaugeError::Storage(format!("Failed to create {}: {}", parent.display(), e))
        })?;
    }

    let temp_path = path.with_extension("json.tmp");
    let file = File::create(&temp_path)
        .map_err(|e| GaugeError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| GaugeError::Storage(format!("Failed to serialize data: {}", e)))?;
    writer
        .flush()
        .map_err(|e| GaugeError::Storage(format!("Failed to flush data: {}", e)))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| GaugeError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        GaugeError::Storage(format!("Failed to rename temp file: {}", e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FinancialSnapshot;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_reads_default() {
        let temp_dir = TempDir::new().unwrap();
        let snapshot: FinancialSnapshot = read_json(temp_dir.path().join("none.json")).unwrap();
        assert_eq!(snapshot, FinancialSnapshot::default());
    }

    #[test]
    fn test_write_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("deep").join("snapshot.json");
        let snapshot = FinancialSnapshot {
            income: 5200.0,
            rent: 1400.0,
            ..Default::default()
        };

        write_json_atomic(&path, &snapshot).unwrap();
        assert!(!path.with_extension("json.tmp").exists());

        let loaded: FinancialSnapshot = read_json(&path).unwrap();
        assert_eq!(loaded, snapshot);
    }

    #[test]
    fn test_corrupt_file_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result: Result<FinancialSnapshot, _> = read_json(&path);
        assert!(matches!(result, Err(GaugeError::Storage(_))));
    }
}
