//! CSV reader for the metric log.
//!
//! Required columns must be present in the header; threshold columns are
//! optional. Rows that cannot be interpreted are skipped and reported as
//! [`RowError`]s instead of failing the whole load.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};
use csv::StringRecord;

use crate::config::InputConfig;
use crate::error::{MetricTrendsError, Result};
use crate::model::{
    MetricTable, Observation, RawValue, Status, ThresholdKind, Thresholds, Trend, UnitKind,
};

use super::{IngestReport, RowError, TableSource};

/// Column indices resolved from the header row.
struct ColumnIndex {
    reference: usize,
    name: usize,
    date: usize,
    period: usize,
    year: usize,
    value: usize,
    unit: usize,
    trend: usize,
    status: usize,
    thresholds: Vec<(ThresholdKind, usize)>,
}

/// Loads observations from a delimited text file.
#[derive(Debug, Clone)]
pub struct CsvTableLoader {
    path: PathBuf,
    input: InputConfig,
}

impl CsvTableLoader {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, input: InputConfig) -> Self {
        Self {
            path: path.into(),
            input,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TableSource for CsvTableLoader {
    fn load(&self) -> Result<IngestReport> {
        let file = File::open(&self.path).map_err(|source| MetricTrendsError::FileRead {
            path: self.path.clone(),
            source,
        })?;
        read_table(file, &self.input)
    }
}

/// Read a metric table from any reader.
///
/// # Errors
/// Returns an error if the delimiter is not ASCII, the header cannot be read,
/// a required column is missing, or no row could be interpreted.
pub fn read_table<R: Read>(reader: R, input: &InputConfig) -> Result<IngestReport> {
    let delimiter = u8::try_from(input.delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or_else(|| {
            MetricTrendsError::Config(format!(
                "input.delimiter must be a single ASCII character, got '{}'",
                input.delimiter
            ))
        })?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let columns = resolve_columns(&headers, input)?;

    let mut rows = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // Header is line 1.
        let line = idx + 2;
        rows_read += 1;

        let parsed = result
            .map_err(|e| format!("CSV parse error: {e}"))
            .and_then(|record| parse_row(&record, &columns, &input.date_formats));
        match parsed {
            Ok(observation) => rows.push(observation),
            Err(message) => row_errors.push(RowError { line, message }),
        }
    }

    if rows.is_empty() {
        return Err(MetricTrendsError::NoRows);
    }

    Ok(IngestReport {
        table: MetricTable::new(rows),
        row_errors,
        rows_read,
    })
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports often prefix the first header with a BOM.
    name.trim().trim_start_matches('\u{feff}').to_lowercase()
}

fn resolve_columns(headers: &StringRecord, input: &InputConfig) -> Result<ColumnIndex> {
    let header_map: HashMap<String, usize> = headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect();
    let find = |name: &str| header_map.get(&normalize_header_name(name)).copied();
    let require = |name: &str| {
        find(name).ok_or_else(|| MetricTrendsError::MissingColumn {
            column: name.to_string(),
        })
    };

    let columns = &input.columns;
    Ok(ColumnIndex {
        reference: require(&columns.reference)?,
        name: require(&columns.name)?,
        date: require(&columns.date)?,
        period: require(&columns.period)?,
        year: require(&columns.year)?,
        value: require(&columns.value)?,
        unit: require(&columns.unit)?,
        trend: require(&columns.trend)?,
        status: require(&columns.status)?,
        thresholds: ThresholdKind::ALL
            .into_iter()
            .filter_map(|kind| find(columns.threshold(kind)).map(|idx| (kind, idx)))
            .collect(),
    })
}

fn parse_row(
    record: &StringRecord,
    columns: &ColumnIndex,
    date_formats: &[String],
) -> std::result::Result<Observation, String> {
    let cell = |idx: usize| record.get(idx).unwrap_or("").trim();

    let reference = cell(columns.reference);
    if reference.is_empty() {
        return Err("missing metric reference".to_string());
    }

    let date_text = cell(columns.date);
    let date = parse_date(date_text, date_formats)
        .ok_or_else(|| format!("unrecognized date '{date_text}' for metric {reference}"))?;

    let name = match cell(columns.name) {
        "" => reference,
        name => name,
    };

    let mut thresholds = Thresholds::default();
    for &(kind, idx) in &columns.thresholds {
        let value = RawValue::parse(cell(idx))
            .as_number()
            .filter(|v| v.is_finite());
        thresholds.set(kind, value);
    }

    Ok(Observation {
        reference: reference.to_string(),
        name: name.to_string(),
        date,
        period: cell(columns.period).to_string(),
        year: parse_year(cell(columns.year)).unwrap_or_else(|| date.year()),
        value: RawValue::parse(cell(columns.value)),
        unit: UnitKind::from_label(cell(columns.unit)),
        trend: Trend::parse(cell(columns.trend)),
        status: Status::parse(cell(columns.status)),
        thresholds,
    })
}

fn parse_date(text: &str, formats: &[String]) -> Option<NaiveDate> {
    formats
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
}

/// Years may arrive as `2024` or as a spreadsheet float like `2024.0`.
#[allow(clippy::cast_possible_truncation)]
fn parse_year(text: &str) -> Option<i32> {
    text.parse::<i32>().ok().or_else(|| {
        text.parse::<f64>()
            .ok()
            .filter(|y| y.is_finite() && y.fract() == 0.0 && y.abs() < 1e6)
            .map(|y| y as i32)
    })
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
