//! Computes the geometry of one metric's trend chart.

use crate::error::ChartError;
use crate::format::format_number;
use crate::model::{MetricSeries, Observation, RawValue};

use super::axis::{AxisRange, TickFormat, Y_TICK_COUNT, y_range, year_groups};
use super::description::{
    Annotation, Canvas, ChartDescription, Font, LineDash, Marker, Point, ThresholdLine, Tick,
    Title, TrendLine, XAxis, YAxis, YRef,
};
use super::style::ChartStyle;

/// Paper position of the title's top-left corner.
const TITLE_POSITION: (f64, f64) = (0.05, 0.95);

/// Half a category of breathing room on each side of the x axis.
const X_RANGE_PADDING: f64 = 0.5;

/// Builds [`ChartDescription`]s. Holds only styling, so builds are pure.
#[derive(Debug, Clone, Default)]
pub struct ChartLayoutBuilder {
    style: ChartStyle,
}

impl ChartLayoutBuilder {
    #[must_use]
    pub const fn new(style: ChartStyle) -> Self {
        Self { style }
    }

    #[must_use]
    pub const fn style(&self) -> &ChartStyle {
        &self.style
    }

    /// Build the chart description for one metric.
    ///
    /// Unit kind and thresholds are read from the earliest observation.
    /// Currency-in-millions values and thresholds are divided by 1,000,000 on a
    /// local copy.
    ///
    /// # Errors
    /// Returns [`ChartError`] if any observation's value is missing or not numeric.
    #[allow(clippy::cast_precision_loss)]
    pub fn build(&self, series: &MetricSeries) -> Result<ChartDescription, ChartError> {
        let observations = series.observations();
        let first = observations.first().ok_or(ChartError::EmptySeries)?;
        let unit = first.unit;
        let divisor = unit.layout_divisor();

        let values = observations
            .iter()
            .map(|obs| numeric_value(obs).map(|v| v / divisor))
            .collect::<Result<Vec<f64>, ChartError>>()?;
        let thresholds = first.thresholds.scaled(divisor);

        let last_x = (values.len() - 1) as f64;
        let last_value = values[values.len() - 1];
        let last_point = Point {
            x: last_x,
            y: last_value,
        };

        let threshold_lines = thresholds
            .present()
            .map(|(kind, value)| ThresholdLine {
                kind,
                value,
                x_start: 0.0,
                x_end: last_x,
                color: kind.color().to_string(),
                dash: LineDash::Dot,
                width: self.style.threshold_width,
            })
            .collect();

        let trend = TrendLine {
            points: values
                .iter()
                .enumerate()
                .map(|(i, &y)| Point { x: i as f64, y })
                .collect(),
            color: self.style.line_color.clone(),
            width: self.style.line_width,
            smoothing: self.style.smoothing,
        };

        let value_range = y_range(
            values
                .iter()
                .copied()
                .chain(thresholds.present().map(|(_, v)| v)),
        )
        .ok_or_else(|| ChartError::MissingValue {
            period: first.period.clone(),
        })?;

        let tick_format = TickFormat::for_unit(unit);
        let y_ticks = value_range
            .evenly_spaced(Y_TICK_COUNT)
            .into_iter()
            .map(|position| Tick {
                position,
                label: tick_format.apply(position),
            })
            .collect();

        Ok(ChartDescription {
            reference: first.reference.clone(),
            unit,
            canvas: self.canvas(),
            title: Title {
                text: first.name.clone(),
                font: Font {
                    family: self.style.font_family.clone(),
                    size: self.style.title_font_size,
                    color: self.style.line_color.clone(),
                },
                x: TITLE_POSITION.0,
                y: TITLE_POSITION.1,
            },
            threshold_lines,
            trend,
            marker: Marker {
                at: last_point,
                color: self.style.line_color.clone(),
                size: self.style.marker_size,
            },
            value_label: Annotation {
                text: format_number(last_value, unit),
                x: last_point.x,
                y: last_point.y,
                y_ref: YRef::Data,
                y_shift: self.style.label_shift,
                font: Font {
                    family: self.style.font_family.clone(),
                    size: self.style.font_size,
                    color: self.style.line_color.clone(),
                },
            },
            x_axis: XAxis {
                range: AxisRange {
                    min: -X_RANGE_PADDING,
                    max: last_x + X_RANGE_PADDING,
                },
                ticks: observations
                    .iter()
                    .enumerate()
                    .map(|(i, obs)| Tick {
                        position: i as f64,
                        label: obs.period.clone(),
                    })
                    .collect(),
                font: self.axis_font(),
            },
            y_axis: YAxis {
                range: value_range,
                tick_format,
                ticks: y_ticks,
                font: self.axis_font(),
            },
            year_labels: self.year_labels(observations),
        })
    }

    fn canvas(&self) -> Canvas {
        Canvas {
            width: self.style.width,
            height: self.style.height,
            margin_left: self.style.margin_left,
            margin_right: self.style.margin_right,
            margin_top: self.style.margin_top,
            margin_bottom: self.style.margin_bottom,
            background: self.style.background.clone(),
        }
    }

    fn axis_font(&self) -> Font {
        Font {
            family: self.style.font_family.clone(),
            size: self.style.font_size,
            color: self.style.axis_color.clone(),
        }
    }

    /// One centered label per run of same-year positions, below the period ticks.
    fn year_labels(&self, observations: &[Observation]) -> Vec<Annotation> {
        let years: Vec<i32> = observations.iter().map(|obs| obs.year).collect();
        year_groups(&years)
            .into_iter()
            .map(|group| Annotation {
                text: group.year.to_string(),
                x: group.center(),
                y: self.style.year_label_y,
                y_ref: YRef::Paper,
                y_shift: 0.0,
                font: self.axis_font(),
            })
            .collect()
    }
}

/// Coerce an observation's value to a finite number.
fn numeric_value(obs: &Observation) -> Result<f64, ChartError> {
    let coerced = match &obs.value {
        RawValue::Number(v) => Some(*v),
        RawValue::Text(text) => match text.trim().parse::<f64>() {
            Ok(v) => Some(v),
            Err(_) => {
                return Err(ChartError::NonNumericValue {
                    period: obs.period.clone(),
                    raw: text.clone(),
                });
            }
        },
        RawValue::Missing => None,
    };

    coerced
        .filter(|v| v.is_finite())
        .ok_or_else(|| ChartError::MissingValue {
            period: obs.period.clone(),
        })
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
