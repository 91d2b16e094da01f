//! JSON file record source

use super::RecordSource;
use crate::domain::{PropertyRecord, ReportError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Reads a JSON array of records from a file
///
/// ```json
/// [
///   {
///     "id": "1",
///     "name": "Lakeside Villa",
///     "address": "14 Shore Drive",
///     "price": 850000,
///     "status": "Available",
///     "createdAt": "2024-01-15"
///   }
/// ]
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for JsonFileSource {
    fn load(&self) -> Result<Vec<PropertyRecord>> {
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            ReportError::Source(format!(
                "Failed to read records file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let records: Vec<PropertyRecord> = serde_json::from_str(&contents).map_err(|e| {
            ReportError::Source(format!(
                "Failed to parse records file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        tracing::debug!(
            path = %self.path.display(),
            count = records.len(),
            "Loaded records"
        );

        Ok(records)
    }

    fn describe(&self) -> String {
        format!("JSON file {}", self.path.display())
    }
}
