//! Primitive SVG elements: segments, smoothed paths, markers and labels.

use std::fmt::Write;

use crate::layout::{Font, LineDash};

use super::format::{coord, html_escape};
use super::style::{TextAnchor, dash_array, font_attributes};

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

/// Straight line between two pixel positions.
#[derive(Debug, Clone)]
pub struct Segment {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub color: String,
    pub width: f64,
    pub dash: LineDash,
}

impl Segment {
    #[must_use]
    pub fn new(from: (f64, f64), to: (f64, f64), color: impl Into<String>) -> Self {
        Self {
            from,
            to,
            color: color.into(),
            width: 1.0,
            dash: LineDash::Solid,
        }
    }

    #[must_use]
    pub const fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub const fn with_dash(mut self, dash: LineDash) -> Self {
        self.dash = dash;
        self
    }
}

impl SvgElement for Segment {
    fn render(&self) -> String {
        let dash = dash_array(self.dash, self.width)
            .map(|d| format!(r#" stroke-dasharray="{d}""#))
            .unwrap_or_default();
        format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"{dash}/>"#,
            coord(self.from.0),
            coord(self.from.1),
            coord(self.to.0),
            coord(self.to.1),
            html_escape(&self.color),
            coord(self.width)
        )
    }
}

/// Line through a sequence of points, optionally drawn as a smooth spline.
///
/// With `smoothing > 0` every segment becomes a cubic Bézier whose control
/// points follow the Catmull-Rom tangents scaled by `smoothing`; the curve
/// still passes through every point.
#[derive(Debug, Clone)]
pub struct SplinePath {
    pub points: Vec<(f64, f64)>,
    pub color: String,
    pub stroke_width: f64,
    pub smoothing: f64,
}

impl SplinePath {
    #[must_use]
    pub fn new(points: Vec<(f64, f64)>, color: impl Into<String>) -> Self {
        Self {
            points,
            color: color.into(),
            stroke_width: 2.0,
            smoothing: 0.0,
        }
    }

    #[must_use]
    pub const fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    #[must_use]
    pub const fn with_smoothing(mut self, smoothing: f64) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// The `d` attribute of the path.
    #[must_use]
    pub fn path_data(&self) -> String {
        let Some(&(first_x, first_y)) = self.points.first() else {
            return String::new();
        };
        let mut path = format!("M{},{}", coord(first_x), coord(first_y));

        if self.smoothing <= 0.0 || self.points.len() < 3 {
            for &(x, y) in &self.points[1..] {
                let _ = write!(path, " L{},{}", coord(x), coord(y));
            }
            return path;
        }

        let tension = self.smoothing / 6.0;
        let last = self.points.len() - 1;
        for i in 0..last {
            let prev = self.points[i.saturating_sub(1)];
            let start = self.points[i];
            let end = self.points[i + 1];
            let next = self.points[(i + 2).min(last)];

            let c1 = (
                (end.0 - prev.0).mul_add(tension, start.0),
                (end.1 - prev.1).mul_add(tension, start.1),
            );
            let c2 = (
                (next.0 - start.0).mul_add(-tension, end.0),
                (next.1 - start.1).mul_add(-tension, end.1),
            );
            let _ = write!(
                path,
                " C{},{} {},{} {},{}",
                coord(c1.0),
                coord(c1.1),
                coord(c2.0),
                coord(c2.1),
                coord(end.0),
                coord(end.1)
            );
        }
        path
    }
}

impl SvgElement for SplinePath {
    fn render(&self) -> String {
        if self.points.is_empty() {
            return String::new();
        }
        format!(
            r#"<path d="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round"/>"#,
            self.path_data(),
            html_escape(&self.color),
            coord(self.stroke_width)
        )
    }
}

/// Filled circle with an accessible tooltip.
#[derive(Debug, Clone)]
pub struct Circle {
    pub center: (f64, f64),
    /// Diameter in pixels, matching how marker sizes are specified.
    pub size: f64,
    pub fill: String,
    pub title: Option<String>,
}

impl SvgElement for Circle {
    fn render(&self) -> String {
        let open = format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}""#,
            coord(self.center.0),
            coord(self.center.1),
            coord(self.size / 2.0),
            html_escape(&self.fill)
        );
        match &self.title {
            Some(title) => format!(
                "{open}>\n    <title>{}</title>\n</circle>",
                html_escape(title)
            ),
            None => format!("{open}/>"),
        }
    }
}

/// Text placed at a pixel position.
#[derive(Debug, Clone)]
pub struct Label {
    pub at: (f64, f64),
    pub text: String,
    pub font: Font,
    pub anchor: TextAnchor,
    /// `dominant-baseline` value, when the text should not sit on its baseline.
    pub baseline: Option<&'static str>,
    pub bold: bool,
}

impl Label {
    #[must_use]
    pub fn new(at: (f64, f64), text: impl Into<String>, font: Font) -> Self {
        Self {
            at,
            text: text.into(),
            font,
            anchor: TextAnchor::Start,
            baseline: None,
            bold: false,
        }
    }

    #[must_use]
    pub const fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    #[must_use]
    pub const fn with_baseline(mut self, baseline: &'static str) -> Self {
        self.baseline = Some(baseline);
        self
    }

    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

impl SvgElement for Label {
    fn render(&self) -> String {
        let mut attrs = format!(
            r#"x="{}" y="{}" text-anchor="{}" {}"#,
            coord(self.at.0),
            coord(self.at.1),
            self.anchor,
            font_attributes(&self.font)
        );
        if let Some(baseline) = self.baseline {
            let _ = write!(attrs, r#" dominant-baseline="{baseline}""#);
        }
        if self.bold {
            attrs.push_str(r#" font-weight="bold""#);
        }
        format!("<text {attrs}>{}</text>", html_escape(&self.text))
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
