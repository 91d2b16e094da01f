//! Configuration schema types
//!
//! Every section and field has a default, so an empty file (or no file at
//! all) yields a usable configuration.

use serde::{Deserialize, Serialize};

/// Longest pause the shell may be configured to wait after an export
pub const MAX_DELAY_MS: u64 = 60_000;

/// What to do when the record set is empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EmptyInputPolicy {
    /// Render a document with an empty table and a zeroed summary
    #[default]
    Zero,
    /// Fail before anything is rendered
    Reject,
}

impl EmptyInputPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmptyInputPolicy::Zero => "zero",
            EmptyInputPolicy::Reject => "reject",
        }
    }
}

impl std::str::FromStr for EmptyInputPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zero" => Ok(EmptyInputPolicy::Zero),
            "reject" => Ok(EmptyInputPolicy::Reject),
            other => Err(format!(
                "Invalid empty_input policy '{}'. Must be one of: zero, reject",
                other
            )),
        }
    }
}

/// Main realty-report configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RealtyConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Report content and shell behaviour
    #[serde(default)]
    pub report: ReportSettings,

    /// Where records come from
    #[serde(default)]
    pub data: DataConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl RealtyConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.report.validate()?;
        self.data.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Report content and post-export behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSettings {
    /// Text shown in the header band
    #[serde(default = "default_brand_title")]
    pub brand_title: String,

    /// Report title below the header band; also the PDF document title
    #[serde(default = "default_report_title")]
    pub report_title: String,

    /// Download file name prefix
    #[serde(default = "default_filename_prefix")]
    pub filename_prefix: String,

    /// Directory the file sink writes into
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Empty record set handling
    #[serde(default)]
    pub empty_input: EmptyInputPolicy,

    /// Pause after a successful export before the shell returns
    #[serde(default = "default_success_delay_ms")]
    pub success_delay_ms: u64,

    /// Pause after a failed export before the shell returns
    #[serde(default = "default_error_delay_ms")]
    pub error_delay_ms: u64,
}

impl ReportSettings {
    fn validate(&self) -> Result<(), String> {
        if self.brand_title.trim().is_empty() {
            return Err("report.brand_title cannot be empty".to_string());
        }
        if self.report_title.trim().is_empty() {
            return Err("report.report_title cannot be empty".to_string());
        }
        if self.filename_prefix.trim().is_empty() {
            return Err("report.filename_prefix cannot be empty".to_string());
        }
        if self.filename_prefix.contains(['/', '\\']) {
            return Err(format!(
                "report.filename_prefix '{}' must not contain path separators",
                self.filename_prefix
            ));
        }
        if self.output_dir.trim().is_empty() {
            return Err("report.output_dir cannot be empty".to_string());
        }
        if self.success_delay_ms > MAX_DELAY_MS {
            return Err(format!(
                "report.success_delay_ms must be <= {} (got {})",
                MAX_DELAY_MS, self.success_delay_ms
            ));
        }
        if self.error_delay_ms > MAX_DELAY_MS {
            return Err(format!(
                "report.error_delay_ms must be <= {} (got {})",
                MAX_DELAY_MS, self.error_delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            brand_title: default_brand_title(),
            report_title: default_report_title(),
            filename_prefix: default_filename_prefix(),
            output_dir: default_output_dir(),
            empty_input: EmptyInputPolicy::default(),
            success_delay_ms: default_success_delay_ms(),
            error_delay_ms: default_error_delay_ms(),
        }
    }
}

/// Record source configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// JSON file with an array of records; the built-in sample inventory is
    /// used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub records_path: Option<String>,
}

impl DataConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(path) = &self.records_path {
            if path.trim().is_empty() {
                return Err("data.records_path cannot be empty when set".to_string());
            }
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_brand_title() -> String {
    "RealState ERP".to_string()
}

fn default_report_title() -> String {
    "Property Inventory Report".to_string()
}

fn default_filename_prefix() -> String {
    "real-estate-report".to_string()
}

fn default_output_dir() -> String {
    "./reports".to_string()
}

fn default_success_delay_ms() -> u64 {
    1500
}

fn default_error_delay_ms() -> u64 {
    2000
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
