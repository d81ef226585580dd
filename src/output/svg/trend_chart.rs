//! Metric trend chart drawn from a [`ChartDescription`].
//!
//! Draw order matches the layout: threshold guides sit under the trend line,
//! and the latest-value marker and label sit on top.

use crate::layout::{Annotation, ChartDescription};

use super::builder::SvgBuilder;
use super::element::{Circle, Label, Segment, SplinePath, SvgElement};
use super::projection::Projection;
use super::style::TextAnchor;

/// Gap between the y axis and its tick labels.
const Y_LABEL_GAP: f64 = 8.0;

/// Gap between the x axis and the period labels.
const X_LABEL_GAP: f64 = 6.0;

/// Renders one chart description as a standalone SVG document.
#[derive(Debug)]
pub struct TrendChart<'a> {
    chart: &'a ChartDescription,
    projection: Projection,
}

impl<'a> TrendChart<'a> {
    #[must_use]
    pub fn new(chart: &'a ChartDescription) -> Self {
        Self {
            chart,
            projection: Projection::for_chart(chart),
        }
    }

    fn title(&self) -> Label {
        let canvas = &self.chart.canvas;
        let title = &self.chart.title;
        let at = (title.x * canvas.width, (1.0 - title.y) * canvas.height);
        Label::new(at, &title.text, title.font.clone())
            .with_baseline("hanging")
            .bold()
    }

    fn y_axis(&self) -> Vec<Label> {
        let axis = &self.chart.y_axis;
        let x = self.projection.left() - Y_LABEL_GAP;
        axis.ticks
            .iter()
            .map(|tick| {
                Label::new((x, self.projection.y(tick.position)), &tick.label, axis.font.clone())
                    .with_anchor(TextAnchor::End)
                    .with_baseline("middle")
            })
            .collect()
    }

    fn x_axis(&self) -> (Segment, Vec<Label>) {
        let axis = &self.chart.x_axis;
        let bottom = self.projection.bottom();
        let line = Segment::new(
            (self.projection.left(), bottom),
            (self.projection.right(), bottom),
            axis.font.color.clone(),
        );
        let labels = axis
            .ticks
            .iter()
            .map(|tick| {
                Label::new(
                    (self.projection.x(tick.position), bottom + X_LABEL_GAP),
                    &tick.label,
                    axis.font.clone(),
                )
                .with_anchor(TextAnchor::Middle)
                .with_baseline("hanging")
            })
            .collect();
        (line, labels)
    }

    fn threshold_lines(&self) -> Vec<Segment> {
        self.chart
            .threshold_lines
            .iter()
            .map(|line| {
                let y = self.projection.y(line.value);
                Segment::new(
                    (self.projection.x(line.x_start), y),
                    (self.projection.x(line.x_end), y),
                    line.color.clone(),
                )
                .with_width(line.width)
                .with_dash(line.dash)
            })
            .collect()
    }

    fn trend_line(&self) -> SplinePath {
        let trend = &self.chart.trend;
        let points = trend
            .points
            .iter()
            .map(|p| self.projection.point(p.x, p.y))
            .collect();
        SplinePath::new(points, trend.color.clone())
            .with_stroke_width(trend.width)
            .with_smoothing(trend.smoothing)
    }

    fn marker(&self) -> Circle {
        let marker = &self.chart.marker;
        Circle {
            center: self.projection.point(marker.at.x, marker.at.y),
            size: marker.size,
            fill: marker.color.clone(),
            title: Some(self.chart.value_label.text.clone()),
        }
    }

    fn annotation(&self, annotation: &Annotation) -> Label {
        let y = self.projection.annotation_y(annotation.y, annotation.y_ref) - annotation.y_shift;
        Label::new(
            (self.projection.x(annotation.x), y),
            &annotation.text,
            annotation.font.clone(),
        )
        .with_anchor(TextAnchor::Middle)
    }
}

impl SvgElement for TrendChart<'_> {
    fn render(&self) -> String {
        let canvas = &self.chart.canvas;
        let (x_line, x_labels) = self.x_axis();
        let year_labels: Vec<Label> = self
            .chart
            .year_labels
            .iter()
            .map(|label| self.annotation(label))
            .collect();

        SvgBuilder::new(canvas.width, canvas.height)
            .with_title(&self.chart.title.text)
            .with_background(&canvas.background)
            .push_element(&self.title())
            .push_all(&self.y_axis())
            .push_element(&x_line)
            .push_all(&x_labels)
            .push_all(&year_labels)
            .push_all(&self.threshold_lines())
            .push_element(&self.trend_line())
            .push_element(&self.marker())
            .push_element(&self.annotation(&self.chart.value_label))
            .build()
    }
}

#[cfg(test)]
#[path = "trend_chart_tests.rs"]
mod tests;
