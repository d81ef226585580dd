//! Semantic checks on a parsed configuration.

use crate::error::{MetricTrendsError, Result};
use crate::model::ThresholdKind;

use super::Config;

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if a column name is empty, no date format is configured,
/// chart dimensions leave no plot area, or a color is malformed.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_input_section(config)?;
    validate_chart_section(config)?;
    Ok(())
}

fn validate_input_section(config: &Config) -> Result<()> {
    let columns = &config.input.columns;
    for (key, name) in columns.required() {
        if name.trim().is_empty() {
            return Err(MetricTrendsError::Config(format!(
                "input.columns.{key} must not be empty"
            )));
        }
    }
    for kind in ThresholdKind::ALL {
        if columns.threshold(kind).trim().is_empty() {
            return Err(MetricTrendsError::Config(format!(
                "input.columns threshold column for '{}' must not be empty",
                kind.label()
            )));
        }
    }

    if config.input.date_formats.is_empty() {
        return Err(MetricTrendsError::Config(
            "input.date_formats must list at least one format".to_string(),
        ));
    }
    Ok(())
}

fn validate_chart_section(config: &Config) -> Result<()> {
    let chart = &config.chart;
    if chart.width <= chart.margin_left + chart.margin_right {
        return Err(MetricTrendsError::Config(format!(
            "chart.width ({}) must exceed the left and right margins",
            chart.width
        )));
    }
    if chart.height <= chart.margin_top + chart.margin_bottom {
        return Err(MetricTrendsError::Config(format!(
            "chart.height ({}) must exceed the top and bottom margins",
            chart.height
        )));
    }
    if chart.font_size <= 0.0 || chart.title_font_size <= 0.0 {
        return Err(MetricTrendsError::Config(
            "chart font sizes must be positive".to_string(),
        ));
    }

    for (key, color) in [
        ("line_color", &chart.line_color),
        ("axis_color", &chart.axis_color),
    ] {
        if !is_hex_color(color) {
            return Err(MetricTrendsError::Config(format!(
                "chart.{key} must be a hex color like #2E74B5, got '{color}'"
            )));
        }
    }
    Ok(())
}

fn is_hex_color(value: &str) -> bool {
    value.strip_prefix('#').is_some_and(|hex| {
        matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
    })
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
