//! Export progress reporting
//!
//! Progress is published on a `tokio::sync::watch` channel. Within one run
//! the percentage never goes down; the error state is terminal.

use serde::Serialize;
use tokio::sync::watch;

/// Status line shown when a generation fails
pub const ERROR_STATUS: &str = "Error generating report";

/// User-facing error message for a failed generation
pub const ERROR_MESSAGE: &str = "An error occurred while generating the report";

/// Snapshot of an export's progress
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExportProgress {
    /// Completion percentage, 0 to 100
    pub percent: u8,
    pub status: String,
    pub error: Option<String>,
}

impl ExportProgress {
    pub fn is_complete(&self) -> bool {
        self.percent == 100 && self.error.is_none()
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

/// Generation stages in the order they are entered
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ExportStage {
    CreatingDocument,
    AddingBranding,
    AddingReportInfo,
    GeneratingTable,
    CalculatingStatistics,
    Finalizing,
    Complete,
}

impl ExportStage {
    pub const ALL: [ExportStage; 7] = [
        ExportStage::CreatingDocument,
        ExportStage::AddingBranding,
        ExportStage::AddingReportInfo,
        ExportStage::GeneratingTable,
        ExportStage::CalculatingStatistics,
        ExportStage::Finalizing,
        ExportStage::Complete,
    ];

    pub fn percent(self) -> u8 {
        match self {
            ExportStage::CreatingDocument => 10,
            ExportStage::AddingBranding => 20,
            ExportStage::AddingReportInfo => 35,
            ExportStage::GeneratingTable => 60,
            ExportStage::CalculatingStatistics => 80,
            ExportStage::Finalizing => 90,
            ExportStage::Complete => 100,
        }
    }

    pub fn status(self) -> &'static str {
        match self {
            ExportStage::CreatingDocument => "Creating document...",
            ExportStage::AddingBranding => "Adding branding...",
            ExportStage::AddingReportInfo => "Adding report information...",
            ExportStage::GeneratingTable => "Generating property table...",
            ExportStage::CalculatingStatistics => "Calculating statistics...",
            ExportStage::Finalizing => "Finalizing document...",
            ExportStage::Complete => "Download complete!",
        }
    }
}

/// Publishes progress for one exporter
#[derive(Debug)]
pub struct ProgressTracker {
    tx: watch::Sender<ExportProgress>,
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressTracker {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(ExportProgress::default());
        Self { tx }
    }

    /// New receiver observing this tracker
    pub fn subscribe(&self) -> watch::Receiver<ExportProgress> {
        self.tx.subscribe()
    }

    /// Latest published snapshot
    pub fn current(&self) -> ExportProgress {
        self.tx.borrow().clone()
    }

    /// Returns to the idle state at the start of a run
    pub fn reset(&self) {
        self.tx.send_replace(ExportProgress::default());
    }

    /// Enters `stage`
    ///
    /// Ignored if it would lower the percentage or the run has failed.
    /// Returns whether the snapshot changed.
    pub fn advance(&self, stage: ExportStage) -> bool {
        let changed = self.tx.send_if_modified(|progress| {
            if progress.error.is_some() || stage.percent() < progress.percent {
                return false;
            }
            progress.percent = stage.percent();
            progress.status = stage.status().to_string();
            true
        });
        if changed {
            crate::log_stage!(stage.percent(), stage.status());
        }
        changed
    }

    /// Switches to the error state, keeping the last percentage
    pub fn fail(&self) {
        self.tx.send_modify(|progress| {
            progress.status = ERROR_STATUS.to_string();
            progress.error = Some(ERROR_MESSAGE.to_string());
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_percentages_increase() {
        let percents: Vec<u8> = ExportStage::ALL.iter().map(|s| s.percent()).collect();
        assert!(percents.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(percents.last(), Some(&100));
    }

    #[test]
    fn test_advance_publishes_stage() {
        let tracker = ProgressTracker::new();
        let rx = tracker.subscribe();
        assert!(tracker.advance(ExportStage::GeneratingTable));

        let progress = rx.borrow().clone();
        assert_eq!(progress.percent, 60);
        assert_eq!(progress.status, "Generating property table...");
        assert!(progress.error.is_none());
    }

    #[test]
    fn test_advance_never_goes_backwards() {
        let tracker = ProgressTracker::new();
        tracker.advance(ExportStage::Finalizing);
        assert!(!tracker.advance(ExportStage::AddingBranding));
        assert_eq!(tracker.current().percent, 90);
    }

    #[test]
    fn test_fail_is_terminal() {
        let tracker = ProgressTracker::new();
        tracker.advance(ExportStage::GeneratingTable);
        tracker.fail();
        assert!(!tracker.advance(ExportStage::Complete));

        let progress = tracker.current();
        assert!(progress.is_failed());
        assert_eq!(progress.percent, 60);
        assert_eq!(progress.status, ERROR_STATUS);
        assert_eq!(progress.error.as_deref(), Some(ERROR_MESSAGE));
    }

    #[test]
    fn test_reset_clears_previous_run() {
        let tracker = ProgressTracker::new();
        tracker.advance(ExportStage::Complete);
        assert!(tracker.current().is_complete());
        tracker.reset();
        assert_eq!(tracker.current(), ExportProgress::default());
    }

    #[tokio::test]
    async fn test_receiver_sees_changes() {
        let tracker = ProgressTracker::new();
        let mut rx = tracker.subscribe();
        tracker.advance(ExportStage::CreatingDocument);
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().percent, 10);
    }
}
