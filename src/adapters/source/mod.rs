//! Record sources
//!
//! A [`RecordSource`] supplies the complete, ordered record set for one
//! export. The set is read once and not touched again while a report is
//! generated.

pub mod json;
pub mod sample;

pub use json::JsonFileSource;
pub use sample::SampleInventory;

use crate::config::DataConfig;
use crate::domain::{PropertyRecord, Result};

/// Supplies property records
pub trait RecordSource {
    /// Loads every record, in report order
    ///
    /// # Errors
    ///
    /// Returns an error if the records cannot be read or decoded.
    fn load(&self) -> Result<Vec<PropertyRecord>>;

    /// Short description used in logs
    fn describe(&self) -> String;
}

/// Creates the record source selected by the configuration
///
/// A configured `records_path` selects [`JsonFileSource`]; otherwise the
/// built-in [`SampleInventory`] is used.
pub fn create_record_source(config: &DataConfig) -> Box<dyn RecordSource + Send + Sync> {
    match &config.records_path {
        Some(path) => {
            tracing::info!(path = %path, "Using JSON record source");
            Box::new(JsonFileSource::new(path))
        }
        None => {
            tracing::info!("No records path configured, using sample inventory");
            Box::new(SampleInventory)
        }
    }
}
