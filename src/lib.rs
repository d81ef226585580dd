pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exporter;
pub mod format;
pub mod ingest;
pub mod layout;
pub mod model;
pub mod output;
pub mod selector;

pub use error::{ChartError, MetricTrendsError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_METRIC_FAILURES: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
