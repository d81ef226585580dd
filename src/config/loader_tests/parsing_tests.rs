//! Tests for explicit-path loading and parse failures.

use std::path::Path;

use crate::config::{ConfigLoader, FileConfigLoader};
use crate::error::MetricTrendsError;

use super::mock_fs::MockFileSystem;

#[test]
fn load_from_path_reads_given_file() {
    let fs = MockFileSystem::new().with_file(
        "/configs/quarterly.toml",
        r#"
[input]
path = "kpis.csv"
delimiter = ";"

[input.columns]
status = "RAG"
"#,
    );

    let result = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/configs/quarterly.toml"))
        .unwrap();

    assert_eq!(result.config.input.delimiter, ';');
    assert_eq!(result.config.input.columns.status, "RAG");
    assert_eq!(
        result.config.input.path.as_deref(),
        Some(Path::new("kpis.csv"))
    );
}

#[test]
fn load_from_missing_path_is_file_read_error() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());

    let err = loader
        .load_from_path(Path::new("/nowhere/config.toml"))
        .unwrap_err();

    assert!(matches!(err, MetricTrendsError::FileRead { .. }));
}

#[test]
fn invalid_toml_is_parse_error() {
    let fs = MockFileSystem::new().with_file("/project/.metric-trends.toml", "[output\n");

    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();

    assert!(matches!(err, MetricTrendsError::TomlParse(_)));
}

#[test]
fn wrong_type_is_parse_error() {
    let fs = MockFileSystem::new().with_file(
        "/project/.metric-trends.toml",
        "[output]\nformat = \"png\"\n",
    );

    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();

    assert!(matches!(err, MetricTrendsError::TomlParse(_)));
}
