//! External system integrations for realty-report.
//!
//! - [`source`] - Where property records come from
//! - [`pdf`] - Rendering a laid-out document to PDF
//! - [`sink`] - Where finished reports go
//!
//! Each concern is a trait so the exporter can be driven with in-memory
//! implementations in tests.

pub mod pdf;
pub mod sink;
pub mod source;
