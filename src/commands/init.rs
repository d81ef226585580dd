use std::fs;

use crate::cli::InitArgs;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, MetricTrendsError, Result};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes a commented configuration template.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(MetricTrendsError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r##"# metric-trends configuration file

[input]
# CSV export of the metric log (a path on the command line overrides this)
# path = "metrics.csv"

# Field delimiter (default: ",")
delimiter = ","

# Date formats tried in order (chrono strftime syntax)
date_formats = ["%Y-%m-%d", "%d/%m/%Y", "%Y-%m-%d %H:%M:%S", "%d/%m/%Y %H:%M", "%d-%b-%Y"]

# Header names in the source table. Threshold columns may be missing.
[input.columns]
reference = "Metric Reference"
name = "Metric Name"
date = "Date"
period = "Quarter"
year = "Year"
value = "Value"
unit = "Units of Measure"
trend = "3Q Trend"
status = "RAG Text"
red_above = "Red Above"
red_below = "Red Below"
amber_above = "Amber Above"
amber_below = "Amber Below"
target = "Target"

[output]
# Directory receiving one chart per selected metric (created if absent)
dir = "charts"

# Chart file format: "svg" or "json"
format = "svg"

# Print a terminal preview of each chart before it is written
show = false

[chart]
width = 800
height = 400
line_color = "#2E74B5"
# smoothing = 1.3       # 0 draws straight segments
font_family = "Calibri"
font_size = 17
title_font_size = 18
axis_color = "#808080"
"##
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
