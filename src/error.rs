use std::path::PathBuf;

use thiserror::Error;

/// Run-level errors. Any of these aborts the whole run.
#[derive(Error, Debug)]
pub enum MetricTrendsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create output directory: {path}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input table is missing required column: {column}")]
    MissingColumn { column: String },

    #[error("Input table contains no usable rows")]
    NoRows,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl MetricTrendsError {
    /// Short category label used as the heading of error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) | Self::TomlSerialize(_) => "Config",
            Self::FileRead { .. } | Self::Io(_) => "IO",
            Self::OutputDir { .. } => "Output",
            Self::MissingColumn { .. } | Self::NoRows | Self::Csv(_) => "Input",
            Self::JsonSerialize(_) => "Serialization",
        }
    }

    /// Underlying cause, if the error wraps one.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileRead { source, .. } | Self::OutputDir { source, .. } => {
                Some(source.to_string())
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, MetricTrendsError>;

/// Failure while building or exporting a single metric's chart.
///
/// These never abort the batch; the exporter records them and moves on.
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("series has no observations")]
    EmptySeries,

    #[error("value for period {period} is not numeric: {raw:?}")]
    NonNumericValue { period: String, raw: String },

    #[error("value for period {period} is missing")]
    MissingValue { period: String },

    #[error("rendering failed: {0}")]
    Render(String),

    #[error("failed to write {path}")]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
