//! Report exporter - turns a record set into a delivered PDF report
//!
//! The exporter owns the single-flight guard, the progress channel and the
//! completion event channel. Generation itself is synchronous; hosts that
//! live on an async runtime run it on a blocking thread.

use crate::adapters::pdf::DocumentRenderer;
use crate::adapters::sink::DownloadSink;
use crate::config::{EmptyInputPolicy, ReportSettings};
use crate::core::export::artifact::{ExportEvent, GeneratedReport, ReportArtifact, PDF_MIME_TYPE};
use crate::core::export::guard::GenerationGuard;
use crate::core::export::progress::{ExportProgress, ExportStage, ProgressTracker};
use crate::core::export::summary::ReportSummary;
use crate::core::layout::{self, format, DocumentCanvas};
use crate::domain::{GenerationFailure, PropertyRecord, ReportId};
use chrono::{Local, Utc};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{broadcast, watch};

/// Completion events buffered per subscriber
const EVENT_CAPACITY: usize = 16;

/// Report exporter
pub struct ReportExporter {
    settings: ReportSettings,
    renderer: Arc<dyn DocumentRenderer + Send + Sync>,
    sink: Arc<dyn DownloadSink + Send + Sync>,
    guard: GenerationGuard,
    progress: ProgressTracker,
    events: broadcast::Sender<ExportEvent>,
}

impl ReportExporter {
    /// Create a new exporter
    pub fn new(
        settings: ReportSettings,
        renderer: Arc<dyn DocumentRenderer + Send + Sync>,
        sink: Arc<dyn DownloadSink + Send + Sync>,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            settings,
            renderer,
            sink,
            guard: GenerationGuard::new(),
            progress: ProgressTracker::new(),
            events,
        }
    }

    /// Receiver for completion events
    pub fn subscribe(&self) -> broadcast::Receiver<ExportEvent> {
        self.events.subscribe()
    }

    /// Receiver for progress snapshots
    pub fn progress(&self) -> watch::Receiver<ExportProgress> {
        self.progress.subscribe()
    }

    /// Whether a generation is currently running
    pub fn is_generating(&self) -> bool {
        self.guard.is_held()
    }

    pub fn settings(&self) -> &ReportSettings {
        &self.settings
    }

    /// Generate a report for `records` and hand it to the sink
    ///
    /// Returns `Ok(None)` without doing anything if another generation on
    /// this exporter is still running.
    ///
    /// # Errors
    ///
    /// Any [`GenerationFailure`]. Before returning it the progress switches
    /// to its error state and an [`ExportEvent::Failed`] is sent.
    pub fn generate(
        &self,
        records: &[PropertyRecord],
    ) -> Result<Option<GeneratedReport>, GenerationFailure> {
        let Some(_token) = self.guard.try_acquire() else {
            tracing::debug!("Report generation already in progress, ignoring request");
            return Ok(None);
        };

        let start_time = Instant::now();
        let report_id = ReportId::generate();
        self.progress.reset();
        crate::log_report_start!(&report_id, records.len());

        match self.build_and_deliver(&report_id, records) {
            Ok(report) => {
                self.progress.advance(ExportStage::Complete);
                crate::log_report_complete!(&report_id, report.page_count, start_time.elapsed());
                report.summary.log_summary();
                // No subscribers is fine
                let _ = self.events.send(ExportEvent::Completed(report.clone()));
                Ok(Some(report))
            }
            Err(failure) => {
                crate::log_error_with_context!(&failure, "report generation");
                self.progress.fail();
                let _ = self.events.send(ExportEvent::Failed(failure.clone()));
                Err(failure)
            }
        }
    }

    fn build_and_deliver(
        &self,
        report_id: &ReportId,
        records: &[PropertyRecord],
    ) -> Result<GeneratedReport, GenerationFailure> {
        self.progress.advance(ExportStage::CreatingDocument);
        self.check_records(records)?;
        let mut canvas = DocumentCanvas::a4();

        self.progress.advance(ExportStage::AddingBranding);
        layout::paint_header(&mut canvas, &self.settings.brand_title);

        self.progress.advance(ExportStage::AddingReportInfo);
        let generated_at = format::format_generated_at(&Local::now());
        layout::paint_metadata(
            &mut canvas,
            &self.settings.report_title,
            &generated_at,
            report_id,
        );

        self.progress.advance(ExportStage::GeneratingTable);
        let table = layout::paint_inventory_table(&mut canvas, records)?;

        self.progress.advance(ExportStage::CalculatingStatistics);
        let summary = ReportSummary::from_records(records)?;
        layout::paint_summary(&mut canvas, table.final_y, &summary);

        layout::paint_page_numbers(&mut canvas);
        let page_count = canvas.page_count();

        self.progress.advance(ExportStage::Finalizing);

        let bytes = self
            .renderer
            .render(&canvas, &self.settings.report_title)?;
        drop(canvas);

        let file_name = format::report_file_name(&self.settings.filename_prefix, &Utc::now());
        let artifact = ReportArtifact::pdf(file_name, bytes);
        let location = self.sink.deliver(&artifact)?;

        tracing::debug!(
            file_name = %artifact.file_name,
            size_bytes = artifact.len(),
            location = %location,
            "Report delivered"
        );

        Ok(GeneratedReport {
            report_id: report_id.clone(),
            size_bytes: artifact.len(),
            file_name: artifact.file_name,
            mime_type: PDF_MIME_TYPE,
            page_count,
            row_count: table.rows_drawn,
            summary,
            location,
        })
    }

    fn check_records(&self, records: &[PropertyRecord]) -> Result<(), GenerationFailure> {
        if records.is_empty() {
            match self.settings.empty_input {
                EmptyInputPolicy::Reject => return Err(GenerationFailure::EmptyInput),
                EmptyInputPolicy::Zero => {
                    tracing::warn!("No records supplied, generating an empty report");
                }
            }
        }

        for (index, record) in records.iter().enumerate() {
            record
                .check_renderable()
                .map_err(|reason| GenerationFailure::MalformedRecord { index, reason })?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for ReportExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportExporter")
            .field("settings", &self.settings)
            .field("generating", &self.guard.is_held())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sink::MemorySink;
    use crate::domain::{Money, PropertyStatus, RecordId};
    use chrono::NaiveDate;

    /// Renderer that reports how many pages it was given
    struct CountingRenderer;

    impl DocumentRenderer for CountingRenderer {
        fn render(&self, canvas: &DocumentCanvas, _title: &str) -> Result<Vec<u8>, GenerationFailure> {
            Ok(format!("pages={}", canvas.page_count()).into_bytes())
        }
    }

    struct BrokenRenderer;

    impl DocumentRenderer for BrokenRenderer {
        fn render(&self, _canvas: &DocumentCanvas, _title: &str) -> Result<Vec<u8>, GenerationFailure> {
            Err(GenerationFailure::Render("backend unavailable".to_string()))
        }
    }

    /// Renderer that notes the progress and footers it sees when called
    #[derive(Default)]
    struct ObservingRenderer {
        progress: std::sync::Mutex<Option<watch::Receiver<ExportProgress>>>,
        seen: std::sync::Mutex<Option<(u8, String, bool)>>,
    }

    impl DocumentRenderer for ObservingRenderer {
        fn render(&self, canvas: &DocumentCanvas, _title: &str) -> Result<Vec<u8>, GenerationFailure> {
            let progress = self.progress.lock().unwrap();
            let snapshot = progress.as_ref().unwrap().borrow().clone();
            let has_footer = canvas.texts().any(|(_, t)| t == "Page 1 of 1");
            *self.seen.lock().unwrap() = Some((snapshot.percent, snapshot.status, has_footer));
            Ok(Vec::new())
        }
    }

    fn record(id: &str, name: &str, status: PropertyStatus) -> PropertyRecord {
        PropertyRecord::builder()
            .id(RecordId::new(id).unwrap())
            .name(name)
            .address("12 Harbour Road")
            .price(Money::from_dollars(500_000))
            .status(status)
            .created_at(NaiveDate::from_ymd_opt(2024, 2, 10).unwrap())
            .build()
            .unwrap()
    }

    fn exporter(
        renderer: Arc<dyn DocumentRenderer + Send + Sync>,
        policy: EmptyInputPolicy,
    ) -> (ReportExporter, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let settings = ReportSettings {
            empty_input: policy,
            ..ReportSettings::default()
        };
        (ReportExporter::new(settings, renderer, sink.clone()), sink)
    }

    #[test]
    fn test_generate_delivers_named_pdf() {
        let (exporter, sink) = exporter(Arc::new(CountingRenderer), EmptyInputPolicy::Zero);
        let records = vec![
            record("1", "Lakeside Villa", PropertyStatus::Available),
            record("2", "City Loft", PropertyStatus::Sold),
        ];

        let report = exporter.generate(&records).unwrap().unwrap();

        assert_eq!(report.row_count, 2);
        assert_eq!(report.page_count, 1);
        assert_eq!(report.mime_type, "application/pdf");
        assert!(report.file_name.starts_with("real-estate-report-"));
        assert!(report.file_name.ends_with(".pdf"));
        assert_eq!(report.summary.available_properties, 1);

        let delivered = sink.artifacts();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].bytes, b"pages=1".to_vec());
        assert!(!exporter.is_generating());
    }

    #[test]
    fn test_progress_ends_at_one_hundred() {
        let (exporter, _sink) = exporter(Arc::new(CountingRenderer), EmptyInputPolicy::Zero);
        let rx = exporter.progress();
        exporter
            .generate(&[record("1", "Lakeside Villa", PropertyStatus::Available)])
            .unwrap();

        let progress = rx.borrow().clone();
        assert_eq!(progress.percent, 100);
        assert_eq!(progress.status, "Download complete!");
        assert!(progress.error.is_none());
    }

    #[test]
    fn test_footers_painted_before_finalizing() {
        let renderer = Arc::new(ObservingRenderer::default());
        let (exporter, _sink) = exporter(renderer.clone(), EmptyInputPolicy::Zero);
        *renderer.progress.lock().unwrap() = Some(exporter.progress());

        exporter
            .generate(&[record("1", "Lakeside Villa", PropertyStatus::Available)])
            .unwrap();

        let seen = renderer.seen.lock().unwrap().clone();
        assert_eq!(seen, Some((90, "Finalizing document...".to_string(), true)));
    }

    #[test]
    fn test_render_failure_sets_error_state_and_event() {
        let (exporter, sink) = exporter(Arc::new(BrokenRenderer), EmptyInputPolicy::Zero);
        let mut events = exporter.subscribe();

        let result = exporter.generate(&[record("1", "Lakeside Villa", PropertyStatus::Available)]);

        assert!(matches!(result, Err(GenerationFailure::Render(_))));
        assert!(sink.artifacts().is_empty());
        assert!(!exporter.is_generating());

        let progress = exporter.progress().borrow().clone();
        assert_eq!(progress.status, "Error generating report");
        assert_eq!(
            progress.error.as_deref(),
            Some("An error occurred while generating the report")
        );

        let event = events.try_recv().unwrap();
        assert!(matches!(event, ExportEvent::Failed(GenerationFailure::Render(_))));
    }

    #[test]
    fn test_empty_input_rejected_by_policy() {
        let (exporter, sink) = exporter(Arc::new(CountingRenderer), EmptyInputPolicy::Reject);
        assert_eq!(exporter.generate(&[]), Err(GenerationFailure::EmptyInput));
        assert!(sink.artifacts().is_empty());
    }

    #[test]
    fn test_empty_input_zero_policy_renders_zero_summary() {
        let (exporter, _sink) = exporter(Arc::new(CountingRenderer), EmptyInputPolicy::Zero);
        let report = exporter.generate(&[]).unwrap().unwrap();
        assert_eq!(report.row_count, 0);
        assert_eq!(report.summary.total_properties, 0);
        assert_eq!(report.summary.average_price, Money::ZERO);
    }

    #[test]
    fn test_malformed_record_reports_index() {
        let (exporter, _sink) = exporter(Arc::new(CountingRenderer), EmptyInputPolicy::Zero);
        let mut bad = record("2", "City Loft", PropertyStatus::Sold);
        bad.name = "   ".to_string();
        let records = vec![record("1", "Lakeside Villa", PropertyStatus::Available), bad];

        let result = exporter.generate(&records);
        assert!(matches!(
            result,
            Err(GenerationFailure::MalformedRecord { index: 1, .. })
        ));
    }

    #[test]
    fn test_completed_event_carries_report() {
        let (exporter, _sink) = exporter(Arc::new(CountingRenderer), EmptyInputPolicy::Zero);
        let mut events = exporter.subscribe();
        let report = exporter
            .generate(&[record("1", "Lakeside Villa", PropertyStatus::Available)])
            .unwrap()
            .unwrap();

        match events.try_recv().unwrap() {
            ExportEvent::Completed(sent) => assert_eq!(sent, report),
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
