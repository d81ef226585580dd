#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the metric-trends binary.
#[macro_export]
macro_rules! metric_trends {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("metric-trends"))
    };
}

pub const HEADER: &str = "Metric Reference,Metric Name,Date,Quarter,Year,Value,Units of Measure,3Q Trend,RAG Text,Red Above,Target";

/// A small metric log:
/// - `KPI-1` rising, latest Green: selected
/// - `KPI-2` flat, latest Red: selected
/// - `KPI-3` flat, latest Green (was Red earlier): not selected
pub const SAMPLE_ROWS: &str = "\
KPI-1,Sickness rate,2023-12-31,Q4,2023,0.041,Percentage,,Green,0.05,0.03
KPI-1,Sickness rate,2024-03-31,Q1,2024,0.045,Percentage,,Green,0.05,0.03
KPI-1,Sickness rate,2024-06-30,Q2,2024,0.048,Percentage,↗,Green,0.05,0.03
KPI-2,Overtime spend,2024-03-31,Q1,2024,2100000,Currency millions,,Amber,,
KPI-2,Overtime spend,2024-06-30,Q2,2024,2600000,Currency millions,,Red,,
KPI-3,Complaints,2024-03-31,Q1,2024,40,Whole number,,Red,,
KPI-3,Complaints,2024-06-30,Q2,2024,12,Whole number,,Green,,
";

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a metric-trends config file in the temp directory.
    pub fn create_config(&self, content: &str) -> PathBuf {
        self.create_file(".metric-trends.toml", content)
    }

    /// Writes `rows` under the standard header as `metrics.csv`.
    pub fn create_csv(&self, rows: &str) -> PathBuf {
        self.create_file("metrics.csv", &format!("{HEADER}\n{rows}"))
    }

    /// Writes the sample metric log as `metrics.csv`.
    pub fn create_sample_csv(&self) -> PathBuf {
        self.create_csv(SAMPLE_ROWS)
    }

    /// Names of the files in a directory, sorted.
    pub fn list_dir(&self, relative_path: &str) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.dir.path().join(relative_path))
            .expect("Failed to read directory")
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
