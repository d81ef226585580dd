use std::path::PathBuf;

use clap::CommandFactory;

use super::*;

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn render_defaults() {
    let cli = Cli::parse_from(["metric-trends", "render", "metrics.csv"]);
    match cli.command {
        Commands::Render(args) => {
            assert_eq!(args.input, Some(PathBuf::from("metrics.csv")));
            assert_eq!(args.config, None);
            assert_eq!(args.output_dir, None);
            assert_eq!(args.format, None);
            assert!(!args.show);
        }
        _ => panic!("Expected Render command"),
    }
}

#[test]
fn render_with_overrides() {
    let cli = Cli::parse_from([
        "metric-trends",
        "render",
        "metrics.csv",
        "--output-dir",
        "out",
        "--format",
        "json",
        "--show",
    ]);
    match cli.command {
        Commands::Render(args) => {
            assert_eq!(args.output_dir, Some(PathBuf::from("out")));
            assert_eq!(args.format, Some(FormatChoice::Json));
            assert!(args.show);
        }
        _ => panic!("Expected Render command"),
    }
}

#[test]
fn render_input_is_optional() {
    let cli = Cli::parse_from(["metric-trends", "render", "-c", "custom.toml"]);
    match cli.command {
        Commands::Render(args) => {
            assert_eq!(args.input, None);
            assert_eq!(args.config, Some(PathBuf::from("custom.toml")));
        }
        _ => panic!("Expected Render command"),
    }
}

#[test]
fn unknown_format_is_rejected() {
    let result = Cli::try_parse_from(["metric-trends", "render", "m.csv", "--format", "png"]);
    assert!(result.is_err());
}

#[test]
fn select_json_format() {
    let cli = Cli::parse_from(["metric-trends", "select", "m.csv", "--format", "json"]);
    match cli.command {
        Commands::Select(args) => assert_eq!(args.format, ListFormat::Json),
        _ => panic!("Expected Select command"),
    }
}

#[test]
fn global_flags_after_subcommand() {
    let cli = Cli::parse_from(["metric-trends", "select", "m.csv", "-vv", "--quiet", "--no-config"]);
    assert_eq!(cli.verbose, 2);
    assert!(cli.quiet);
    assert!(cli.no_config);
}

#[test]
fn color_choice() {
    let cli = Cli::parse_from(["metric-trends", "--color", "never", "select", "m.csv"]);
    assert!(matches!(cli.color, ColorChoice::Never));
}

#[test]
fn init_defaults() {
    let cli = Cli::parse_from(["metric-trends", "init"]);
    match cli.command {
        Commands::Init(args) => {
            assert_eq!(args.output, PathBuf::from(".metric-trends.toml"));
            assert!(!args.force);
        }
        _ => panic!("Expected Init command"),
    }
}

#[test]
fn config_validate_default_path() {
    let cli = Cli::parse_from(["metric-trends", "config", "validate"]);
    match cli.command {
        Commands::Config(ConfigArgs {
            action: ConfigAction::Validate { config },
        }) => assert_eq!(config, PathBuf::from(".metric-trends.toml")),
        _ => panic!("Expected Config Validate command"),
    }
}

#[test]
fn config_show_json() {
    let cli = Cli::parse_from(["metric-trends", "config", "show", "--format", "json"]);
    match cli.command {
        Commands::Config(ConfigArgs {
            action: ConfigAction::Show { config, format },
        }) => {
            assert_eq!(config, None);
            assert_eq!(format, ListFormat::Json);
        }
        _ => panic!("Expected Config Show command"),
    }
}

#[test]
fn format_choice_converts() {
    assert_eq!(ExportFormat::from(FormatChoice::Svg), ExportFormat::Svg);
    assert_eq!(ExportFormat::from(FormatChoice::Json), ExportFormat::Json);
}
