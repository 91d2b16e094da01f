//! Domain error types
//!
//! This module defines the error hierarchy for realty-report.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main realty-report error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Report generation errors
    #[error("Generation failure: {0}")]
    Generation(#[from] GenerationFailure),

    /// Record source errors (missing file, unreadable data)
    #[error("Record source error: {0}")]
    Source(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Failure raised while constructing, rendering or delivering a report
///
/// Every failure is terminal for the export call that raised it; the
/// exporter never retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationFailure {
    /// The record set was empty and the configured policy rejects it
    #[error("No records to report on")]
    EmptyInput,

    /// A record could not be rendered
    #[error("Malformed record at index {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },

    /// The document could not be laid out
    #[error("Layout failed: {0}")]
    Layout(String),

    /// The rendering backend failed to produce bytes
    #[error("Render failed: {0}")]
    Render(String),

    /// The finished document could not be handed to the download sink
    #[error("Delivery failed: {0}")]
    Delivery(String),
}

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        ReportError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        ReportError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for ReportError {
    fn from(err: toml::de::Error) -> Self {
        ReportError::Configuration(format!("TOML parsing error: {err}"))
    }
}
