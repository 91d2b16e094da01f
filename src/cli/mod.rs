//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for realty-report using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// realty-report - Property Inventory Report Exporter
#[derive(Parser, Debug)]
#[command(name = "realty-report")]
#[command(version, about, long_about = None)]
#[command(author = "realty-report Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "realty-report.toml", env = "REALTY_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "REALTY_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the property inventory PDF report
    Report(commands::report::ReportArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
