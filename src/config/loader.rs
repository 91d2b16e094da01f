//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::RealtyConfig;
use crate::domain::errors::ReportError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into RealtyConfig
/// 4. Applies environment variable overrides (REALTY_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns [`ReportError::Configuration`] if the file is missing or
/// unreadable, a referenced variable is unset, parsing fails, or validation
/// fails.
///
/// # Examples
///
/// ```no_run
/// use realty_report::config::loader::load_config;
///
/// let config = load_config("realty-report.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<RealtyConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ReportError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ReportError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    parse_config(&contents)
}

/// Loads the configuration file if it exists, otherwise starts from the
/// defaults. Environment overrides and validation apply either way.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<RealtyConfig> {
    let path = path.as_ref();
    if path.exists() {
        return load_config(path);
    }

    tracing::debug!(path = %path.display(), "No configuration file, using defaults");
    let mut config = RealtyConfig::default();
    apply_env_overrides(&mut config)?;
    validate(&config)?;
    Ok(config)
}

/// Parses configuration from TOML text
pub fn parse_config(contents: &str) -> Result<RealtyConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: RealtyConfig = toml::from_str(&contents)
        .map_err(|e| ReportError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config)?;
    validate(&config)?;

    Ok(config)
}

fn validate(config: &RealtyConfig) -> Result<()> {
    config.validate().map_err(|e| {
        ReportError::Configuration(format!("Configuration validation failed: {}", e))
    })
}

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("placeholder pattern is valid")
    })
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied unchanged.
///
/// # Errors
///
/// Returns an error naming every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = placeholder_pattern();
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ReportError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

fn parse_env<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value.parse().map_err(|_| {
        ReportError::Configuration(format!("Invalid value '{}' for {}", value, name))
    })
}

/// Applies environment variable overrides using the REALTY_* prefix
///
/// Variables follow the pattern REALTY_<SECTION>_<KEY>, for example
/// REALTY_REPORT_OUTPUT_DIR or REALTY_LOGGING_LOCAL_ENABLED.
fn apply_env_overrides(config: &mut RealtyConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("REALTY_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Report overrides
    if let Ok(val) = std::env::var("REALTY_REPORT_BRAND_TITLE") {
        config.report.brand_title = val;
    }
    if let Ok(val) = std::env::var("REALTY_REPORT_REPORT_TITLE") {
        config.report.report_title = val;
    }
    if let Ok(val) = std::env::var("REALTY_REPORT_FILENAME_PREFIX") {
        config.report.filename_prefix = val;
    }
    if let Ok(val) = std::env::var("REALTY_REPORT_OUTPUT_DIR") {
        config.report.output_dir = val;
    }
    if let Ok(val) = std::env::var("REALTY_REPORT_EMPTY_INPUT") {
        config.report.empty_input = val.parse().map_err(ReportError::Configuration)?;
    }
    if let Ok(val) = std::env::var("REALTY_REPORT_SUCCESS_DELAY_MS") {
        config.report.success_delay_ms = parse_env("REALTY_REPORT_SUCCESS_DELAY_MS", &val)?;
    }
    if let Ok(val) = std::env::var("REALTY_REPORT_ERROR_DELAY_MS") {
        config.report.error_delay_ms = parse_env("REALTY_REPORT_ERROR_DELAY_MS", &val)?;
    }

    // Data overrides
    if let Ok(val) = std::env::var("REALTY_DATA_RECORDS_PATH") {
        config.data.records_path = Some(val);
    }

    // Logging overrides
    if let Ok(val) = std::env::var("REALTY_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = parse_env("REALTY_LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Ok(val) = std::env::var("REALTY_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("REALTY_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}
