//! Logging and observability
//!
//! Structured logging through `tracing`, with:
//! - Configurable log levels
//! - Console output for interactive use
//! - Optional local JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use realty_report::logging::init_logging;
//! use realty_report::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the start of a report generation
///
/// # Example
///
/// ```no_run
/// use realty_report::log_report_start;
/// use realty_report::domain::ReportId;
///
/// let report_id = ReportId::generate();
/// log_report_start!(&report_id, 5);
/// ```
#[macro_export]
macro_rules! log_report_start {
    ($report_id:expr, $record_count:expr) => {
        tracing::info!(
            report_id = %$report_id,
            record_count = $record_count,
            "Starting report generation"
        );
    };
}

/// Log the completion of a report generation
///
/// # Example
///
/// ```no_run
/// use realty_report::log_report_complete;
/// use std::time::Duration;
///
/// log_report_complete!("ABC123XYZ", 2, Duration::from_millis(40));
/// ```
#[macro_export]
macro_rules! log_report_complete {
    ($report_id:expr, $page_count:expr, $duration:expr) => {
        tracing::info!(
            report_id = %$report_id,
            page_count = $page_count,
            duration_ms = $duration.as_millis(),
            "Report generated"
        );
    };
}

/// Log entry into a generation stage
///
/// # Example
///
/// ```no_run
/// use realty_report::log_stage;
///
/// log_stage!(60, "Generating property table...");
/// ```
#[macro_export]
macro_rules! log_stage {
    ($percent:expr, $status:expr) => {
        tracing::debug!(percent = $percent, status = $status, "Report stage");
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use realty_report::log_error_with_context;
/// use realty_report::domain::ReportError;
///
/// let error = ReportError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
