//! CLI command implementations
//!
//! Exit codes shared by every command:
//! - 0: success
//! - 1: report generation failed
//! - 2: configuration error
//! - 5: fatal error
//! - 130: interrupted

pub mod init;
pub mod report;
pub mod validate;
