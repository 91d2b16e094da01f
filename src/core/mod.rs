//! Core business logic for realty-report.
//!
//! # Modules
//!
//! - [`layout`] - Document canvas, table pagination and report composition
//! - [`export`] - The exporter, its guard, progress and completion events
//!
//! # Generation Workflow
//!
//! 1. **Guard**: Refuse to start while another generation is running
//! 2. **Check**: Apply the empty-input policy and validate records
//! 3. **Compose**: Paint header, metadata, table, summary and page footers
//! 4. **Render**: Turn the canvas into PDF bytes
//! 5. **Deliver**: Hand the named file to the download sink
//! 6. **Notify**: Publish 100% progress and a completion event
//!
//! # Example
//!
//! ```rust,no_run
//! use realty_report::adapters::pdf::PrintPdfRenderer;
//! use realty_report::adapters::sink::FileSink;
//! use realty_report::adapters::source::{RecordSource, SampleInventory};
//! use realty_report::config::ReportSettings;
//! use realty_report::core::export::ReportExporter;
//! use std::sync::Arc;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let exporter = ReportExporter::new(
//!     ReportSettings::default(),
//!     Arc::new(PrintPdfRenderer::new()),
//!     Arc::new(FileSink::new("./reports")),
//! );
//!
//! let records = SampleInventory.load()?;
//! if let Some(report) = exporter.generate(&records)? {
//!     println!("Saved {} ({} pages)", report.location, report.page_count);
//! }
//! # Ok(())
//! # }
//! ```

pub mod export;
pub mod layout;
