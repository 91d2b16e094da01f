//! Domain models and types for realty-report.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`RecordId`], [`ReportId`])
//! - **Domain models** ([`PropertyRecord`], [`PropertyStatus`], [`Money`])
//! - **Error types** ([`ReportError`], [`GenerationFailure`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, ReportError>`]:
//!
//! ```rust
//! use realty_report::domain::{ReportError, Result};
//!
//! fn example() -> Result<()> {
//!     let config = realty_report::config::RealtyConfig::default();
//!     config.validate().map_err(ReportError::Configuration)?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod ids;
pub mod money;
pub mod record;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{GenerationFailure, ReportError};
pub use ids::{RecordId, ReportId};
pub use money::Money;
pub use record::{PropertyRecord, PropertyRecordBuilder, PropertyStatus};
pub use result::Result;
