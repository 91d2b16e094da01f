//! File-system download sink

use super::DownloadSink;
use crate::core::export::ReportArtifact;
use crate::domain::GenerationFailure;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes reports into a directory, creating it when needed
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSink for FileSink {
    fn deliver(&self, artifact: &ReportArtifact) -> Result<String, GenerationFailure> {
        // The name must stay inside the target directory
        let file_name = Path::new(&artifact.file_name);
        if file_name.components().count() != 1 || file_name.file_name().is_none() {
            return Err(GenerationFailure::Delivery(format!(
                "invalid file name '{}'",
                artifact.file_name
            )));
        }

        fs::create_dir_all(&self.dir).map_err(|e| {
            GenerationFailure::Delivery(format!(
                "failed to create output directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;

        let path = self.dir.join(file_name);
        fs::write(&path, &artifact.bytes).map_err(|e| {
            GenerationFailure::Delivery(format!("failed to write {}: {}", path.display(), e))
        })?;

        tracing::info!(
            path = %path.display(),
            size_bytes = artifact.len(),
            mime_type = artifact.mime_type,
            "Report saved"
        );

        Ok(path.display().to_string())
    }
}
