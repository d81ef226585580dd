//! Visual constants of a metric chart.

use serde::{Deserialize, Serialize};

/// Fixed styling applied to every chart. Loaded from the `[chart]` config table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub width: f64,
    pub height: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
    pub background: String,

    /// Trend line, marker, title and latest-value label color.
    pub line_color: String,
    pub line_width: f64,
    /// Spline smoothing factor for the trend line (0 = straight segments).
    pub smoothing: f64,
    pub threshold_width: f64,
    /// Marker diameter in pixels.
    pub marker_size: f64,
    /// Pixels between the latest point and its value label.
    pub label_shift: f64,

    pub font_family: String,
    pub font_size: f64,
    pub title_font_size: f64,
    pub axis_color: String,

    /// Vertical paper position of the year labels (below the period ticks).
    pub year_label_y: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 400.0,
            margin_left: 80.0,
            margin_right: 60.0,
            margin_top: 60.0,
            margin_bottom: 90.0,
            background: "white".to_string(),
            line_color: "#2E74B5".to_string(),
            line_width: 3.0,
            smoothing: 1.3,
            threshold_width: 1.0,
            marker_size: 11.0,
            label_shift: 20.0,
            font_family: "Calibri".to_string(),
            font_size: 17.0,
            title_font_size: 18.0,
            axis_color: "#808080".to_string(),
            year_label_y: -0.3,
        }
    }
}
