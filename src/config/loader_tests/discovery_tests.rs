//! Tests for config file discovery (current dir, user config, fallback).

use std::path::PathBuf;

use crate::config::{ConfigLoader, FileConfigLoader};

use super::mock_fs::MockFileSystem;

#[test]
fn returns_default_when_no_config_found() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());

    let result = loader.load().unwrap();

    assert!(result.source.is_none());
    assert_eq!(result.config.output.dir, PathBuf::from("charts"));
}

#[test]
fn loads_local_config_from_current_directory() {
    let fs = MockFileSystem::new()
        .with_current_dir("/my/project")
        .with_file(
            "/my/project/.metric-trends.toml",
            "[output]\ndir = \"local-charts\"\n",
        );

    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(result.config.output.dir, PathBuf::from("local-charts"));
    assert_eq!(
        result.source,
        Some(PathBuf::from("/my/project/.metric-trends.toml"))
    );
}

#[test]
fn loads_user_config_as_fallback() {
    let fs = MockFileSystem::new().with_file(
        "/home/user/.config/metric-trends/config.toml",
        "[output]\nshow = true\n",
    );

    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert!(result.config.output.show);
}

#[test]
fn local_config_takes_priority_over_user_config() {
    let fs = MockFileSystem::new()
        .with_file("/project/.metric-trends.toml", "[chart]\nwidth = 640\n")
        .with_file(
            "/home/user/.config/metric-trends/config.toml",
            "[chart]\nwidth = 1200\n",
        );

    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert!((result.config.chart.width - 640.0).abs() < f64::EPSILON);
}

#[test]
fn missing_config_dir_is_not_an_error() {
    let fs = MockFileSystem::new().with_config_dir(None);

    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert!(result.source.is_none());
}
