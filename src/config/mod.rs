//! Configuration management for realty-report.
//!
//! # Overview
//!
//! realty-report reads an optional TOML configuration file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `REALTY_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use realty_report::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("realty-report.toml")?;
//!
//! println!("Brand: {}", config.report.brand_title);
//! println!("Output: {}", config.report.output_dir);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level
//! - [`ReportSettings`] - Titles, file naming, empty-input policy, shell pauses
//! - [`DataConfig`] - Record source
//! - [`LoggingConfig`] - Local file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [report]
//! brand_title = "RealState ERP"
//! output_dir = "${REALTY_OUTPUT_DIR}"
//! empty_input = "zero"
//!
//! [data]
//! records_path = "inventory.json"
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_or_default, parse_config};
pub use schema::{
    ApplicationConfig, DataConfig, EmptyInputPolicy, LoggingConfig, RealtyConfig, ReportSettings,
    MAX_DELAY_MS,
};
