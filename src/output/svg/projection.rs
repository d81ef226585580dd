//! Mapping from chart coordinates to SVG pixels.

use crate::layout::{AxisRange, Canvas, ChartDescription, YRef};

/// Pixel geometry of the plot area for one chart.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
    x_range: AxisRange,
    y_range: AxisRange,
}

impl Projection {
    #[must_use]
    pub fn new(canvas: &Canvas, x_range: AxisRange, y_range: AxisRange) -> Self {
        Self {
            left: canvas.margin_left,
            top: canvas.margin_top,
            width: canvas.plot_width(),
            height: canvas.plot_height(),
            x_range,
            y_range,
        }
    }

    #[must_use]
    pub fn for_chart(chart: &ChartDescription) -> Self {
        Self::new(&chart.canvas, chart.x_axis.range, chart.y_axis.range)
    }

    #[must_use]
    pub const fn left(&self) -> f64 {
        self.left
    }

    #[must_use]
    pub const fn right(&self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub const fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn x(&self, value: f64) -> f64 {
        let fraction = (value - self.x_range.min) / non_zero(self.x_range.span());
        fraction.mul_add(self.width, self.left)
    }

    #[must_use]
    pub fn y(&self, value: f64) -> f64 {
        let fraction = (value - self.y_range.min) / non_zero(self.y_range.span());
        self.paper_y(fraction)
    }

    /// Paper `0` is the bottom edge of the plot area, `1` the top.
    #[must_use]
    pub fn paper_y(&self, fraction: f64) -> f64 {
        fraction.mul_add(-self.height, self.bottom())
    }

    #[must_use]
    pub fn point(&self, x: f64, y: f64) -> (f64, f64) {
        (self.x(x), self.y(y))
    }

    #[must_use]
    pub fn annotation_y(&self, y: f64, y_ref: YRef) -> f64 {
        match y_ref {
            YRef::Data => self.y(y),
            YRef::Paper => self.paper_y(y),
        }
    }
}

fn non_zero(span: f64) -> f64 {
    if span.abs() > f64::EPSILON { span } else { 1.0 }
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
