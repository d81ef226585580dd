use std::fs;

use clap::Parser;
use tempfile::TempDir;

use super::*;

fn cli(args: &[&str]) -> Cli {
    let mut argv = vec!["metric-trends"];
    argv.extend_from_slice(args);
    Cli::parse_from(argv)
}

#[test]
fn color_choice_maps_to_mode() {
    assert_eq!(color_choice_to_mode(ColorChoice::Auto), ColorMode::Auto);
    assert_eq!(color_choice_to_mode(ColorChoice::Always), ColorMode::Always);
    assert_eq!(color_choice_to_mode(ColorChoice::Never), ColorMode::Never);
}

#[test]
fn no_config_uses_defaults() {
    let result = load_config(Some(Path::new("/does/not/exist.toml")), true).unwrap();
    assert_eq!(result.config, Config::default());
    assert!(result.source.is_none());
}

#[test]
fn explicit_config_is_loaded_and_validated() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cfg.toml");
    fs::write(&path, "[output]\ndir = \"out\"\n").unwrap();

    let result = load_config(Some(&path), false).unwrap();
    assert_eq!(result.config.output.dir, PathBuf::from("out"));
    assert_eq!(result.source, Some(path));
}

#[test]
fn invalid_config_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cfg.toml");
    fs::write(&path, "[chart]\nline_color = \"blue\"\n").unwrap();

    assert!(load_config(Some(&path), false).is_err());
}

#[test]
fn input_argument_wins_over_config() {
    let mut config = Config::default();
    config.input.path = Some(PathBuf::from("from-config.csv"));

    assert_eq!(
        resolve_input(Some(Path::new("arg.csv")), &config).unwrap(),
        PathBuf::from("arg.csv")
    );
    assert_eq!(
        resolve_input(None, &config).unwrap(),
        PathBuf::from("from-config.csv")
    );
}

#[test]
fn missing_input_is_config_error() {
    let err = resolve_input(None, &Config::default()).unwrap_err();
    assert!(matches!(err, MetricTrendsError::Config(_)));
}

#[test]
fn load_table_keeps_good_rows() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("m.csv");
    fs::write(
        &path,
        "Metric Reference,Metric Name,Date,Quarter,Year,Value,Units of Measure,3Q Trend,RAG Text\n\
         A,Alpha,2024-03-31,Q1,2024,1,Decimal,,Red\n\
         B,Beta,bad-date,Q1,2024,1,Decimal,,Red\n",
    )
    .unwrap();

    let report = load_table(&path, &Config::default(), &cli(&["-q", "select"])).unwrap();
    assert_eq!(report.table.len(), 1);
    assert_eq!(report.row_errors.len(), 1);
}
