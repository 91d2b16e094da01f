//! Result type alias for realty-report

use super::errors::ReportError;

/// Result type alias for realty-report operations
///
/// Uses `ReportError` as the error type.
///
/// # Examples
///
/// ```
/// use realty_report::domain::result::Result;
/// use realty_report::domain::errors::ReportError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(ReportError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ReportError>;
