//! Shared plumbing for the command runners: config, input and console setup.

use std::path::{Path, PathBuf};

use crate::cli::{Cli, ColorChoice};
use crate::config::{
    Config, ConfigLoader, FileConfigLoader, LoadResult, validate_config_semantics,
};
use crate::error::{MetricTrendsError, Result};
use crate::ingest::{CsvTableLoader, IngestReport, TableSource};
use crate::output::{ColorMode, ErrorOutput};

/// Number of skipped rows listed individually at `-v`.
const MAX_ROW_ERRORS_SHOWN: usize = 20;

#[must_use]
pub(crate) const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

#[must_use]
pub(crate) fn error_output(cli: &Cli) -> ErrorOutput {
    ErrorOutput::new(color_choice_to_mode(cli.color))
}

/// Load and validate the effective configuration.
///
/// `--no-config` yields the built-in defaults; an explicit path is read as-is;
/// otherwise the usual discovery order applies.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed, or fails validation.
pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<LoadResult> {
    let result = if no_config {
        LoadResult {
            config: Config::default(),
            source: None,
        }
    } else {
        let loader = FileConfigLoader::new();
        config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))?
    };
    validate_config_semantics(&result.config)?;
    Ok(result)
}

/// The input path from the command line, falling back to `input.path`.
///
/// # Errors
/// Returns a config error if neither is set.
pub(crate) fn resolve_input(arg: Option<&Path>, config: &Config) -> Result<PathBuf> {
    arg.or(config.input.path.as_deref())
        .map(Path::to_path_buf)
        .ok_or_else(|| {
            MetricTrendsError::Config(
                "no input file given; pass a CSV path or set input.path".to_string(),
            )
        })
}

/// Read the metric log and report skipped rows as warnings.
///
/// # Errors
/// Propagates fatal ingest errors (unreadable file, missing column, no rows).
pub(crate) fn load_table(input: &Path, config: &Config, cli: &Cli) -> Result<IngestReport> {
    let report = CsvTableLoader::new(input, config.input.clone()).load()?;

    if !report.row_errors.is_empty() && !cli.quiet {
        let errors = error_output(cli);
        let message = format!(
            "{} of {} rows skipped in {}",
            report.row_errors.len(),
            report.rows_read,
            input.display()
        );
        if cli.verbose == 0 {
            errors.print_warning_with_detail(&message, Some("run with -v to list them"));
        } else {
            errors.print_warning(&message);
            for row in report.row_errors.iter().take(MAX_ROW_ERRORS_SHOWN) {
                eprintln!("  line {}: {}", row.line, row.message);
            }
            let hidden = report.row_errors.len().saturating_sub(MAX_ROW_ERRORS_SHOWN);
            if hidden > 0 {
                eprintln!("  … and {hidden} more");
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
