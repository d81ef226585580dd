//! Integration tests for the `init` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn init_creates_default_config_file() {
    let fixture = TestFixture::new();

    metric_trends!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    let content = std::fs::read_to_string(fixture.path().join(".metric-trends.toml")).unwrap();
    assert!(content.contains("[input.columns]"));
    assert!(content.contains("format = \"svg\""));
}

#[test]
fn init_creates_config_at_custom_path() {
    let fixture = TestFixture::new();
    let custom_path = fixture.path().join("custom-config.toml");

    metric_trends!()
        .current_dir(fixture.path())
        .args(["init", "--output", custom_path.to_str().unwrap()])
        .assert()
        .success();

    assert!(custom_path.exists());
}

#[test]
fn init_fails_if_config_exists() {
    let fixture = TestFixture::new();
    fixture.create_config("# existing config\n");

    metric_trends!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn init_force_overwrites() {
    let fixture = TestFixture::new();
    fixture.create_config("# existing config\n");

    metric_trends!()
        .current_dir(fixture.path())
        .args(["init", "--force"])
        .assert()
        .success();

    let content = std::fs::read_to_string(fixture.path().join(".metric-trends.toml")).unwrap();
    assert!(!content.contains("existing config"));
}

#[test]
fn generated_config_validates() {
    let fixture = TestFixture::new();

    metric_trends!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .success();

    metric_trends!()
        .current_dir(fixture.path())
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}
