use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::ExportFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Chart file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatChoice {
    /// Standalone SVG image
    Svg,
    /// Chart description as JSON
    Json,
}

impl From<FormatChoice> for ExportFormat {
    fn from(choice: FormatChoice) -> Self {
        match choice {
            FormatChoice::Svg => Self::Svg,
            FormatChoice::Json => Self::Json,
        }
    }
}

/// Listing format for `select` and `config show`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "metric-trends")]
#[command(author, version, about = "Trend charts for performance metrics that need reporting")]
#[command(long_about = "Reads a metric log, selects the metrics whose latest observation \
    has a directional trend or a Red status, and writes one trend chart per metric.\n\n\
    Exit codes:\n  \
    0 - All selected metrics exported\n  \
    1 - At least one metric failed to export\n  \
    2 - Configuration, input or output directory error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a chart for every metric that needs reporting
    Render(RenderArgs),

    /// List which metrics need reporting, without rendering
    Select(SelectArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Metric log (CSV). Defaults to `input.path` from the config file
    pub input: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory receiving the chart files
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Chart file format
    #[arg(short, long, value_enum)]
    pub format: Option<FormatChoice>,

    /// Print a terminal preview of each chart before exporting it
    #[arg(long)]
    pub show: bool,
}

#[derive(Parser, Debug)]
pub struct SelectArgs {
    /// Metric log (CSV). Defaults to `input.path` from the config file
    pub input: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ListFormat,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".metric-trends.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax and values
    Validate {
        /// Path to configuration file
        #[arg(short, long, default_value = ".metric-trends.toml")]
        config: PathBuf,
    },

    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ListFormat,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
