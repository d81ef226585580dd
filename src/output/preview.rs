//! Plain-text chart preview for the terminal.
//!
//! This is the "display" step of the export loop: a coarse plot of the
//! series, threshold rows and the latest value, printed before the file is
//! written.

use std::fmt::Write;

use crate::layout::ChartDescription;

/// Plot height in text rows.
const ROWS: usize = 8;

/// Characters allotted to each period.
const COLUMN_WIDTH: usize = 5;

const POINT: char = '•';
const LATEST: char = '●';
const THRESHOLD: char = '┄';

/// Render a text preview of `chart`.
#[must_use]
pub fn render_preview(chart: &ChartDescription) -> String {
    let mut output = String::new();
    let format = chart.y_axis.tick_format;
    let range = chart.y_axis.range;
    let points = &chart.trend.points;
    let columns = points.len().max(1) * COLUMN_WIDTH;

    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    let row_of = |value: f64| -> usize {
        let span = if range.span() > 0.0 { range.span() } else { 1.0 };
        let fraction = ((value - range.min) / span).clamp(0.0, 1.0);
        ((1.0 - fraction) * (ROWS - 1) as f64).round() as usize
    };

    let mut grid = vec![vec![' '; columns]; ROWS];
    for line in &chart.threshold_lines {
        grid[row_of(line.value)].fill(THRESHOLD);
    }
    for (i, point) in points.iter().enumerate() {
        let symbol = if i + 1 == points.len() { LATEST } else { POINT };
        grid[row_of(point.y)][i * COLUMN_WIDTH + COLUMN_WIDTH / 2] = symbol;
    }

    let top = format.apply(range.max);
    let bottom = format.apply(range.min);
    let gutter = top.chars().count().max(bottom.chars().count());

    let _ = writeln!(output, "{} ({})", chart.title.text, chart.reference);
    for (i, row) in grid.iter().enumerate() {
        let label = match i {
            0 => top.as_str(),
            i if i == ROWS - 1 => bottom.as_str(),
            _ => "",
        };
        let row: String = row.iter().collect();
        let _ = writeln!(output, "{label:>gutter$} │{}", row.trim_end());
    }
    let _ = writeln!(output, "{:gutter$} └{}", "", "─".repeat(columns));

    let periods: String = chart
        .x_axis
        .ticks
        .iter()
        .map(|tick| {
            let label: String = tick.label.chars().take(COLUMN_WIDTH).collect();
            format!("{label:^COLUMN_WIDTH$}")
        })
        .collect();
    let _ = writeln!(output, "{:gutter$}  {}", "", periods.trim_end());

    let _ = writeln!(output, "Latest: {}", chart.value_label.text);
    for line in &chart.threshold_lines {
        let _ = writeln!(output, "{}: {}", line.kind.label(), format.apply(line.value));
    }
    output
}

#[cfg(test)]
#[path = "preview_tests.rs"]
mod tests;
