//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the realty-report configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // Loading also validates
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Brand Title: {}", config.report.brand_title);
        println!("  Report Title: {}", config.report.report_title);
        println!("  File Prefix: {}", config.report.filename_prefix);
        println!("  Output Directory: {}", config.report.output_dir);
        println!("  Empty Input: {}", config.report.empty_input.as_str());
        println!(
            "  Pauses: {}ms success / {}ms error",
            config.report.success_delay_ms, config.report.error_delay_ms
        );
        println!(
            "  Records: {}",
            config
                .data
                .records_path
                .as_deref()
                .unwrap_or("built-in sample inventory")
        );
        println!(
            "  File Logging: {}",
            if config.logging.local_enabled {
                format!("{} ({})", config.logging.local_path, config.logging.local_rotation)
            } else {
                "disabled".to_string()
            }
        );
        println!();
        Ok(0)
    }
}
