use crate::cli::{Cli, ListFormat, SelectArgs};
use crate::output::SelectionTextFormatter;
use crate::selector::explain;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::{color_choice_to_mode, error_output, load_config, load_table, resolve_input};

#[must_use]
pub fn run_select(args: &SelectArgs, cli: &Cli) -> i32 {
    match run_select_impl(args, cli) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            error_output(cli).print_run_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Lists every metric with its latest observation and whether it needs a chart.
///
/// # Errors
/// Returns an error if the configuration or the input table cannot be loaded.
pub fn run_select_impl(args: &SelectArgs, cli: &Cli) -> Result<String> {
    let loaded = load_config(args.config.as_deref(), cli.no_config)?;
    let input = resolve_input(args.input.as_deref(), &loaded.config)?;
    let report = load_table(&input, &loaded.config, cli)?;

    let entries = explain(&report.table);
    match args.format {
        ListFormat::Json => {
            let json = serde_json::to_string_pretty(&entries)?;
            Ok(format!("{json}\n"))
        }
        ListFormat::Text => {
            let formatter = SelectionTextFormatter::new(color_choice_to_mode(cli.color));
            Ok(formatter.format(&entries))
        }
    }
}

#[cfg(test)]
#[path = "select_tests.rs"]
mod tests;
