//! In-memory download sink

use super::DownloadSink;
use crate::core::export::ReportArtifact;
use crate::domain::GenerationFailure;
use std::sync::{Mutex, MutexGuard};

/// Keeps delivered reports in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    artifacts: Mutex<Vec<ReportArtifact>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies of everything delivered so far, in delivery order
    pub fn artifacts(&self) -> Vec<ReportArtifact> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ReportArtifact>> {
        // A panicking writer cannot leave a half-pushed entry behind
        self.artifacts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DownloadSink for MemorySink {
    fn deliver(&self, artifact: &ReportArtifact) -> Result<String, GenerationFailure> {
        let mut artifacts = self.lock();
        artifacts.push(artifact.clone());
        Ok(format!("memory://{}", artifact.file_name))
    }
}
