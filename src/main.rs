use clap::Parser;

use metric_trends::cli::{Cli, Commands};
use metric_trends::commands::{run_config, run_init, run_render, run_select};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Render(args) => run_render(args, &cli),
        Commands::Select(args) => run_select(args, &cli),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}
