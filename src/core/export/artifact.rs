//! Finished report types

use crate::core::export::summary::ReportSummary;
use crate::domain::ReportId;

/// MIME type of every produced report
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// A rendered document ready to be handed to a download sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportArtifact {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ReportArtifact {
    pub fn pdf(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: PDF_MIME_TYPE,
            bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Outcome of a successful generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedReport {
    pub report_id: ReportId,
    pub file_name: String,
    pub mime_type: &'static str,
    pub page_count: usize,
    /// Table rows, one per record
    pub row_count: usize,
    pub size_bytes: usize,
    pub summary: ReportSummary,
    /// Where the sink put the document
    pub location: String,
}

/// Completion notification sent to shell subscribers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportEvent {
    Completed(GeneratedReport),
    Failed(crate::domain::GenerationFailure),
}

impl ExportEvent {
    pub fn is_success(&self) -> bool {
        matches!(self, ExportEvent::Completed(_))
    }
}
