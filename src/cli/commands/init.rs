//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "realty-report.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing realty-report configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Point data.records_path at your inventory JSON, or keep the sample data");
                println!("  3. Validate configuration: realty-report validate-config");
                println!("  4. Generate a report: realty-report report");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5)
            }
        }
    }

    /// Sample configuration with every setting at its default
    fn generate_config() -> String {
        r#"# realty-report Configuration File
# Property inventory PDF report exporter

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# ============================================================================
# Report Settings
# ============================================================================
[report]
# Text in the blue header band
brand_title = "RealState ERP"

# Title below the header band (also the PDF document title)
report_title = "Property Inventory Report"

# Files are named <prefix>-<YYYY-MM-DDTHH-MM-SS>.pdf
filename_prefix = "real-estate-report"

# Directory reports are written into (created if missing)
output_dir = "./reports"

# Empty record sets: "zero" renders an empty report, "reject" fails
empty_input = "zero"

# Pause before exiting after a successful or failed export
success_delay_ms = 1500
error_delay_ms = 2000

# ============================================================================
# Data Source
# ============================================================================
[data]
# JSON array of property records; the built-in sample inventory is used
# when this is not set
# records_path = "${REALTY_RECORDS_PATH}"

# ============================================================================
# Logging Configuration
# ============================================================================
[logging]
# Write JSON logs to local files
local_enabled = false

# Local log directory
local_path = "./logs"

# Log rotation (daily or hourly)
local_rotation = "daily"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_config, RealtyConfig};
    use tempfile::TempDir;

    #[test]
    fn test_generated_config_matches_defaults() {
        let config = parse_config(&InitArgs::generate_config()).unwrap();
        assert_eq!(config, RealtyConfig::default());
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("realty-report.toml");
        fs::write(&path, "# existing").unwrap();

        let args = InitArgs {
            output: path.to_string_lossy().to_string(),
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), 2);
        assert_eq!(fs::read_to_string(&path).unwrap(), "# existing");
    }

    #[tokio::test]
    async fn test_init_force_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("realty-report.toml");
        fs::write(&path, "# existing").unwrap();

        let args = InitArgs {
            output: path.to_string_lossy().to_string(),
            force: true,
        };
        assert_eq!(args.execute().await.unwrap(), 0);
        assert!(fs::read_to_string(&path).unwrap().contains("[report]"));
    }
}
