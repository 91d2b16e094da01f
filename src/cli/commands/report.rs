//! Report command implementation
//!
//! Hosts the exporter: loads records, runs generation on a blocking thread,
//! prints progress, and reacts to the completion event with the configured
//! pause before exiting.

use crate::adapters::pdf::PrintPdfRenderer;
use crate::adapters::sink::FileSink;
use crate::adapters::source::create_record_source;
use crate::config::load_config_or_default;
use crate::core::export::{ExportEvent, ExportProgress, ReportExporter};
use clap::Args;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{oneshot, watch};

/// Arguments for the report command
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// JSON file with property records (overrides data.records_path)
    #[arg(long)]
    pub records: Option<String>,

    /// Directory to write the report into (overrides report.output_dir)
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Exit as soon as the report is done instead of pausing
    #[arg(long)]
    pub no_wait: bool,
}

impl ReportArgs {
    /// Execute the report command
    pub async fn execute(
        &self,
        config_path: &str,
        mut shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        tracing::info!("Starting report command");

        let mut config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        if let Some(records) = &self.records {
            tracing::info!(records = %records, "Overriding records path from CLI");
            config.data.records_path = Some(records.clone());
        }
        if let Some(output_dir) = &self.output_dir {
            tracing::info!(output_dir = %output_dir, "Overriding output directory from CLI");
            config.report.output_dir = output_dir.clone();
        }

        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(2);
        }

        let source = create_record_source(&config.data);
        let records = match source.load() {
            Ok(r) => r,
            Err(e) => {
                tracing::error!(source = %source.describe(), error = %e, "Failed to load records");
                eprintln!("Failed to load records: {e}");
                return Ok(1);
            }
        };

        let success_delay = Duration::from_millis(config.report.success_delay_ms);
        let error_delay = Duration::from_millis(config.report.error_delay_ms);

        let exporter = Arc::new(ReportExporter::new(
            config.report.clone(),
            Arc::new(PrintPdfRenderer::new()),
            Arc::new(FileSink::new(&config.report.output_dir)),
        ));
        let mut events = exporter.subscribe();
        let (stop_printer, printer_stop) = oneshot::channel();
        let printer = tokio::spawn(print_progress(exporter.progress(), printer_stop));

        println!("📄 Generating report for {} properties...", records.len());

        let mut generation = tokio::task::spawn_blocking({
            let exporter = Arc::clone(&exporter);
            move || exporter.generate(&records)
        });

        let joined = tokio::select! {
            joined = &mut generation => joined,
            _ = wait_for_shutdown(&mut shutdown_signal) => {
                printer.abort();
                println!();
                println!("⚠️  Report generation interrupted");
                return Ok(130);
            }
        };
        let _ = stop_printer.send(());
        let _ = printer.await;

        match joined {
            Err(e) => {
                tracing::error!(error = %e, "Report generation task failed");
                eprintln!("Report generation crashed: {e}");
                return Ok(5);
            }
            Ok(Ok(None)) => {
                println!("ℹ️  A report is already being generated");
                return Ok(0);
            }
            Ok(_) => {}
        }

        let (exit_code, delay) = match events.recv().await {
            Ok(ExportEvent::Completed(report)) => {
                println!("✅ Download complete!");
                println!();
                println!("📊 Report Summary:");
                println!("  Report ID: {}", report.report_id);
                println!("  File: {}", report.location);
                println!("  Pages: {}", report.page_count);
                for line in report.summary.stat_lines() {
                    println!("  {line}");
                }
                println!();
                (0, success_delay)
            }
            Ok(ExportEvent::Failed(failure)) => {
                let progress = exporter.progress().borrow().clone();
                println!("❌ {}", progress.status);
                eprintln!(
                    "   {}: {failure}",
                    progress.error.as_deref().unwrap_or("Report generation failed")
                );
                (1, error_delay)
            }
            Err(e) => {
                tracing::error!(error = %e, "Completion event lost");
                eprintln!("Report finished without a completion event: {e}");
                return Ok(5);
            }
        };

        if !self.no_wait && pause(delay, &mut shutdown_signal).await {
            return Ok(130);
        }

        Ok(exit_code)
    }
}

/// Prints intermediate stages until `stop` fires, returning the printed
/// percentages
///
/// The watch channel keeps only the latest snapshot, so stages published
/// faster than this task runs are skipped. A snapshot still unseen when
/// `stop` fires is printed before returning.
async fn print_progress(
    mut progress: watch::Receiver<ExportProgress>,
    mut stop: oneshot::Receiver<()>,
) -> Vec<u8> {
    let mut printed = Vec::new();
    loop {
        tokio::select! {
            biased;
            changed = progress.changed() => {
                if changed.is_err() {
                    break;
                }
                print_stage(&progress.borrow_and_update(), &mut printed);
            }
            _ = &mut stop => {
                if progress.has_changed().unwrap_or(false) {
                    print_stage(&progress.borrow_and_update(), &mut printed);
                }
                break;
            }
        }
    }
    printed
}

fn print_stage(snapshot: &ExportProgress, printed: &mut Vec<u8>) {
    if snapshot.percent > 0 && snapshot.percent < 100 && snapshot.error.is_none() {
        println!("  [{:>3}%] {}", snapshot.percent, snapshot.status);
        printed.push(snapshot.percent);
    }
}

/// Resolves once shutdown has been requested; never resolves if the
/// signal sender is gone
async fn wait_for_shutdown(shutdown: &mut watch::Receiver<bool>) {
    loop {
        if *shutdown.borrow_and_update() {
            return;
        }
        if shutdown.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

/// Waits `delay` before returning to the caller
///
/// Returns true if shutdown was requested before the delay elapsed.
async fn pause(delay: Duration, shutdown: &mut watch::Receiver<bool>) -> bool {
    tokio::select! {
        _ = tokio::time::sleep(delay) => false,
        _ = wait_for_shutdown(shutdown) => true,
    }
}
