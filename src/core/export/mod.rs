//! Report generation flow
//!
//! This module provides:
//! - The [`ReportExporter`] and its generation sequence
//! - The single-flight guard
//! - Progress tracking and completion events
//! - Summary statistics

pub mod artifact;
pub mod exporter;
pub mod guard;
pub mod progress;
pub mod summary;

pub use artifact::{ExportEvent, GeneratedReport, ReportArtifact, PDF_MIME_TYPE};
pub use exporter::ReportExporter;
pub use guard::{GenerationGuard, GuardToken};
pub use progress::{ExportProgress, ExportStage, ProgressTracker};
pub use summary::ReportSummary;
