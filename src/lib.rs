// realty-report - Property Inventory Report Exporter
// Copyright (c) 2025 realty-report Contributors
// Licensed under the MIT License

//! # realty-report - Property Inventory Report Exporter
//!
//! Produces a paginated PDF inventory report from a list of property
//! records: a branded header, report metadata, one table row per property,
//! summary statistics and "Page i of N" footers.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line shell that hosts the exporter
//! - [`core`] - Layout and the generation flow (guard, progress, events)
//! - [`adapters`] - Record sources, the PDF renderer and download sinks
//! - [`domain`] - Records, money, identifiers and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use realty_report::adapters::pdf::PrintPdfRenderer;
//! use realty_report::adapters::sink::MemorySink;
//! use realty_report::adapters::source::{RecordSource, SampleInventory};
//! use realty_report::config::ReportSettings;
//! use realty_report::core::export::ReportExporter;
//! use std::sync::Arc;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let sink = Arc::new(MemorySink::new());
//!     let exporter = ReportExporter::new(
//!         ReportSettings::default(),
//!         Arc::new(PrintPdfRenderer::new()),
//!         sink.clone(),
//!     );
//!
//!     let records = SampleInventory.load()?;
//!     let report = exporter.generate(&records)?.expect("no other generation running");
//!
//!     println!("{} pages, {} bytes", report.page_count, report.size_bytes);
//!     Ok(())
//! }
//! ```
//!
//! ## Progress and Completion
//!
//! Generation is synchronous. Progress snapshots are published on a
//! `tokio::sync::watch` channel ([`core::export::ReportExporter::progress`])
//! and a completion event on a `tokio::sync::broadcast` channel
//! ([`core::export::ReportExporter::subscribe`]). A call made while another
//! generation on the same exporter is running returns `Ok(None)`.
//!
//! ## Error Handling
//!
//! Generation fails with [`domain::GenerationFailure`]; everything else uses
//! [`domain::ReportError`], which wraps it:
//!
//! ```rust,no_run
//! use realty_report::domain::ReportError;
//!
//! fn example() -> Result<(), ReportError> {
//!     let config = realty_report::config::load_config("realty-report.toml")?;
//!     println!("{}", config.report.output_dir);
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
