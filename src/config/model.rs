use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::layout::ChartStyle;
use crate::model::ThresholdKind;
use crate::output::ExportFormat;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub chart: ChartStyle,
}

/// Source table settings [input].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InputConfig {
    /// Path to the CSV export of the metric log.
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Field delimiter (default: ',').
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// `chrono` formats tried in order when parsing the date column.
    #[serde(default = "default_date_formats")]
    pub date_formats: Vec<String>,

    /// Header names of the source columns [input.columns].
    #[serde(default)]
    pub columns: ColumnConfig,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: None,
            delimiter: default_delimiter(),
            date_formats: default_date_formats(),
            columns: ColumnConfig::default(),
        }
    }
}

/// Source column names. Threshold columns may be absent from the table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ColumnConfig {
    pub reference: String,
    pub name: String,
    pub date: String,
    pub period: String,
    pub year: String,
    pub value: String,
    pub unit: String,
    pub trend: String,
    pub status: String,
    pub red_above: String,
    pub red_below: String,
    pub amber_above: String,
    pub amber_below: String,
    pub target: String,
}

impl ColumnConfig {
    /// Column holding the given threshold kind.
    #[must_use]
    pub fn threshold(&self, kind: ThresholdKind) -> &str {
        match kind {
            ThresholdKind::RedAbove => &self.red_above,
            ThresholdKind::RedBelow => &self.red_below,
            ThresholdKind::AmberAbove => &self.amber_above,
            ThresholdKind::AmberBelow => &self.amber_below,
            ThresholdKind::Target => &self.target,
        }
    }

    /// Columns every input table must have, with their config keys.
    #[must_use]
    pub fn required(&self) -> [(&'static str, &str); 9] {
        [
            ("reference", &self.reference),
            ("name", &self.name),
            ("date", &self.date),
            ("period", &self.period),
            ("year", &self.year),
            ("value", &self.value),
            ("unit", &self.unit),
            ("trend", &self.trend),
            ("status", &self.status),
        ]
    }
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            reference: "Metric Reference".to_string(),
            name: "Metric Name".to_string(),
            date: "Date".to_string(),
            period: "Quarter".to_string(),
            year: "Year".to_string(),
            value: "Value".to_string(),
            unit: "Units of Measure".to_string(),
            trend: "3Q Trend".to_string(),
            status: "RAG Text".to_string(),
            red_above: ThresholdKind::RedAbove.label().to_string(),
            red_below: ThresholdKind::RedBelow.label().to_string(),
            amber_above: ThresholdKind::AmberAbove.label().to_string(),
            amber_below: ThresholdKind::AmberBelow.label().to_string(),
            target: ThresholdKind::Target.label().to_string(),
        }
    }
}

/// Chart export settings [output].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Directory receiving one file per selected metric (created if absent).
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    #[serde(default)]
    pub format: ExportFormat,

    /// Print a terminal preview of each chart.
    #[serde(default)]
    pub show: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            format: ExportFormat::default(),
            show: false,
        }
    }
}

const fn default_delimiter() -> char {
    ','
}

fn default_date_formats() -> Vec<String> {
    [
        "%Y-%m-%d",
        "%d/%m/%Y",
        "%Y-%m-%d %H:%M:%S",
        "%d/%m/%Y %H:%M",
        "%d-%b-%Y",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("charts")
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
