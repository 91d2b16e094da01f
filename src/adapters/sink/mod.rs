//! Download sinks
//!
//! A [`DownloadSink`] receives the finished report as a named byte stream.

pub mod file;
pub mod memory;

pub use file::FileSink;
pub use memory::MemorySink;

use crate::core::export::ReportArtifact;
use crate::domain::GenerationFailure;

/// Accepts finished reports
pub trait DownloadSink {
    /// Stores or forwards `artifact`, returning where it went
    ///
    /// # Errors
    ///
    /// Returns [`GenerationFailure::Delivery`] if the artifact cannot be
    /// handed over.
    fn deliver(&self, artifact: &ReportArtifact) -> Result<String, GenerationFailure>;
}
