use std::fs;
use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs, ListFormat};
use crate::config::{Config, LoadResult, validate_config_semantics};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, MetricTrendsError, Result};

use super::context::{error_output, load_config};

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config, cli),
        ConfigAction::Show { config, format } => run_config_show(config.as_deref(), *format, cli),
    }
}

fn run_config_validate(config_path: &Path, cli: &Cli) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(()) => {
            println!("Configuration is valid: {}", config_path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            error_output(cli).print_run_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validates a configuration file.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has semantic errors.
pub fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        return Err(MetricTrendsError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let content = fs::read_to_string(config_path).map_err(|source| MetricTrendsError::FileRead {
        path: config_path.to_path_buf(),
        source,
    })?;
    let config: Config = toml::from_str(&content)?;

    validate_config_semantics(&config)
}

fn run_config_show(config_path: Option<&Path>, format: ListFormat, cli: &Cli) -> i32 {
    match run_config_show_impl(config_path, format, cli.no_config) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            error_output(cli).print_run_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Shows the effective configuration.
///
/// # Errors
/// Returns an error if the configuration file cannot be loaded or serialization fails.
pub fn run_config_show_impl(
    config_path: Option<&Path>,
    format: ListFormat,
    no_config: bool,
) -> Result<String> {
    let loaded = load_config(config_path, no_config)?;

    match format {
        ListFormat::Json => {
            let json = serde_json::to_string_pretty(&loaded.config)?;
            Ok(format!("{json}\n"))
        }
        ListFormat::Text => format_config_text(&loaded),
    }
}

/// Effective configuration as TOML, headed by where it was loaded from.
///
/// # Errors
/// Returns an error if the configuration cannot be serialized.
pub fn format_config_text(loaded: &LoadResult) -> Result<String> {
    let source = loaded.source.as_ref().map_or_else(
        || "built-in defaults".to_string(),
        |path| path.display().to_string(),
    );
    let body = toml::to_string_pretty(&loaded.config)?;
    Ok(format!(
        "# === Effective Configuration ===\n# Source: {source}\n\n{body}"
    ))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
