//! Axis scaling, tick formats and year grouping.

use serde::Serialize;

use crate::format::{CURRENCY_SYMBOL, fixed, trimmed};
use crate::model::UnitKind;

/// Share of the value span added below the lowest value.
pub const LOWER_PADDING: f64 = 0.2;
/// Share of the value span added above the highest value (room for the label).
pub const UPPER_PADDING: f64 = 0.3;
/// Number of evenly spaced y ticks.
pub const Y_TICK_COUNT: usize = 5;

/// Closed numeric interval of an axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// `count` evenly spaced values from `min` to `max` inclusive.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn evenly_spaced(&self, count: usize) -> Vec<f64> {
        match count {
            0 => Vec::new(),
            1 => vec![self.min],
            _ => {
                let step = self.span() / (count - 1) as f64;
                (0..count)
                    .map(|i| step.mul_add(i as f64, self.min))
                    .collect()
            }
        }
    }
}

/// Y-axis range covering every series value and threshold, padded asymmetrically.
///
/// When everything collapses to a single value, the padding base is that
/// value's magnitude, or `1.0` for zero. Returns `None` if no finite value is given.
#[must_use]
pub fn y_range(values: impl IntoIterator<Item = f64>) -> Option<AxisRange> {
    let (lo, hi) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })?;

    let span = hi - lo;
    let base = if span > 0.0 {
        span
    } else if lo != 0.0 {
        lo.abs()
    } else {
        1.0
    };

    Some(AxisRange {
        min: base.mul_add(-LOWER_PADDING, lo),
        max: base.mul_add(UPPER_PADDING, hi),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TickStyle {
    /// Fraction shown as a whole percentage.
    Percent,
    /// Fixed number of decimals.
    Fixed(usize),
    /// Up to two decimals, trailing zeros dropped.
    Grouped,
}

/// Y-axis tick format for a unit kind.
///
/// `spec` is the equivalent d3-format string for consumers of the JSON description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TickFormat {
    pub spec: &'static str,
    pub prefix: &'static str,
    pub suffix: &'static str,
    pub style: TickStyle,
}

impl TickFormat {
    const fn new(spec: &'static str, style: TickStyle) -> Self {
        Self {
            spec,
            prefix: "",
            suffix: "",
            style,
        }
    }

    const fn currency(spec: &'static str, decimals: usize) -> Self {
        Self {
            spec,
            prefix: CURRENCY_SYMBOL,
            suffix: "",
            style: TickStyle::Fixed(decimals),
        }
    }

    #[must_use]
    pub const fn for_unit(unit: UnitKind) -> Self {
        match unit {
            UnitKind::Percentage => Self::new(".0%", TickStyle::Percent),
            UnitKind::WholeNumber | UnitKind::Thousands | UnitKind::CurrencyThousands => {
                Self::new(",", TickStyle::Grouped)
            }
            UnitKind::CurrencyMillions => Self {
                spec: ",.1f",
                prefix: CURRENCY_SYMBOL,
                suffix: "m",
                style: TickStyle::Fixed(1),
            },
            UnitKind::Currency => Self::currency(",.2f", 2),
            UnitKind::CurrencySmall => Self::currency(",.3f", 3),
            UnitKind::Decimal => Self::new(",.2f", TickStyle::Fixed(2)),
            UnitKind::Other => Self::new(",", TickStyle::Grouped),
        }
    }

    /// Render one tick value.
    #[must_use]
    pub fn apply(&self, value: f64) -> String {
        let body = match self.style {
            TickStyle::Percent => format!("{}%", fixed((value * 100.0).round_ties_even() + 0.0, 0)),
            TickStyle::Fixed(decimals) => fixed(value, decimals),
            TickStyle::Grouped => trimmed(value, 2),
        };
        format!("{}{body}{}", self.prefix, self.suffix)
    }
}

/// A run of consecutive x positions sharing one year.
#[derive(Debug, Clone, PartialEq)]
pub struct YearGroup {
    pub year: i32,
    pub positions: Vec<usize>,
}

impl YearGroup {
    /// Mean x position of the group, where its label is centered.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn center(&self) -> f64 {
        let sum: usize = self.positions.iter().sum();
        sum as f64 / self.positions.len() as f64
    }
}

/// Group consecutive positions by year, in x order.
#[must_use]
pub fn year_groups(years: &[i32]) -> Vec<YearGroup> {
    let mut groups: Vec<YearGroup> = Vec::new();
    for (position, &year) in years.iter().enumerate() {
        match groups.last_mut() {
            Some(group) if group.year == year => group.positions.push(position),
            _ => groups.push(YearGroup {
                year,
                positions: vec![position],
            }),
        }
    }
    groups
}

#[cfg(test)]
#[path = "axis_tests.rs"]
mod tests;
