//! Loading the metric log into an in-memory table.

mod reader;

pub use reader::{CsvTableLoader, read_table};

use crate::error::Result;
use crate::model::MetricTable;

/// A row that was read but could not be interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    /// 1-based line number in the source (header is line 1).
    pub line: usize,
    pub message: String,
}

/// Outcome of loading a table: usable rows plus what was skipped.
#[derive(Debug, Clone)]
pub struct IngestReport {
    pub table: MetricTable,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
}

/// Source of the observation table.
pub trait TableSource {
    /// Read every observation.
    ///
    /// # Errors
    /// Returns an error if the source cannot be read at all; individual bad
    /// rows are reported in [`IngestReport::row_errors`].
    fn load(&self) -> Result<IngestReport>;
}
