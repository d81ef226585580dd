//! Inert chart description handed to rendering backends.
//!
//! Coordinates on the x axis are categorical positions `0..n`; y values are
//! in the metric's (possibly rescaled) unit. "Paper" coordinates are
//! fractions of the plot area, with `0` at the bottom/left edge.

use serde::Serialize;

use crate::model::{ThresholdKind, UnitKind};

use super::axis::{AxisRange, TickFormat};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub family: String,
    pub size: f64,
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineDash {
    Solid,
    Dot,
}

/// Which coordinate system an annotation's `y` is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum YRef {
    Data,
    Paper,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
    pub background: String,
}

impl Canvas {
    #[must_use]
    pub fn plot_width(&self) -> f64 {
        self.width - self.margin_left - self.margin_right
    }

    #[must_use]
    pub fn plot_height(&self) -> f64 {
        self.height - self.margin_top - self.margin_bottom
    }
}

/// Title anchored top-left at a paper position of the whole canvas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
    pub font: Font,
    pub x: f64,
    pub y: f64,
}

/// Horizontal guide line at a constant threshold value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdLine {
    pub kind: ThresholdKind,
    pub value: f64,
    pub x_start: f64,
    pub x_end: f64,
    pub color: String,
    pub dash: LineDash,
    pub width: f64,
}

/// Main trend line. Points are the true values; `smoothing` only affects drawing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendLine {
    pub points: Vec<Point>,
    pub color: String,
    pub width: f64,
    pub smoothing: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub at: Point,
    pub color: String,
    pub size: f64,
}

/// Free text placed on the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub y_ref: YRef,
    /// Extra upward offset in pixels.
    pub y_shift: f64,
    pub font: Font,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XAxis {
    pub range: AxisRange,
    pub ticks: Vec<Tick>,
    pub font: Font,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YAxis {
    pub range: AxisRange,
    pub tick_format: TickFormat,
    pub ticks: Vec<Tick>,
    pub font: Font,
}

/// Complete geometry of one metric chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDescription {
    pub reference: String,
    pub unit: UnitKind,
    pub canvas: Canvas,
    pub title: Title,
    pub threshold_lines: Vec<ThresholdLine>,
    pub trend: TrendLine,
    pub marker: Marker,
    pub value_label: Annotation,
    pub x_axis: XAxis,
    pub y_axis: YAxis,
    pub year_labels: Vec<Annotation>,
}
