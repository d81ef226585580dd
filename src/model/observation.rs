//! One row of the metric log and the small enums it carries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::unit::UnitKind;

/// A cell value as read from the source table.
///
/// Values are kept raw so that malformed input can be echoed back
/// unchanged by the formatter instead of being silently dropped.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawValue {
    Number(f64),
    Text(String),
    #[default]
    Missing,
}

impl RawValue {
    /// Classify a cell. Blank cells are `Missing`, parseable cells are `Number`.
    #[must_use]
    pub fn parse(cell: &str) -> Self {
        let trimmed = cell.trim();
        if trimmed.is_empty() {
            return Self::Missing;
        }
        let numeric = trimmed.replace(',', "");
        numeric
            .parse::<f64>()
            .map_or_else(|_| Self::Text(trimmed.to_string()), Self::Number)
    }

    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Directional trend indicator attached to an observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Rising,
    Falling,
    #[default]
    Flat,
}

impl Trend {
    /// Parse a trend cell. Arrows and words are accepted; anything else is flat.
    #[must_use]
    pub fn parse(cell: &str) -> Self {
        match cell.trim().to_lowercase().as_str() {
            "↗" | "↑" | "rising" | "up" | "increasing" => Self::Rising,
            "↘" | "↓" | "falling" | "down" | "decreasing" => Self::Falling,
            _ => Self::Flat,
        }
    }

    #[must_use]
    pub const fn is_directional(self) -> bool {
        matches!(self, Self::Rising | Self::Falling)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rising => "rising",
            Self::Falling => "falling",
            Self::Flat => "flat",
        }
    }
}

/// Traffic-light status classification.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    Red,
    Amber,
    Green,
    Other(String),
    #[default]
    Unset,
}

impl Status {
    #[must_use]
    pub fn parse(cell: &str) -> Self {
        let trimmed = cell.trim();
        match trimmed.to_lowercase().as_str() {
            "" => Self::Unset,
            "red" => Self::Red,
            "amber" => Self::Amber,
            "green" => Self::Green,
            _ => Self::Other(trimmed.to_string()),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Red => "Red",
            Self::Amber => "Amber",
            Self::Green => "Green",
            Self::Other(label) => label,
            Self::Unset => "",
        }
    }
}

/// The five threshold kinds a metric may define.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdKind {
    RedAbove,
    RedBelow,
    AmberAbove,
    AmberBelow,
    Target,
}

impl ThresholdKind {
    /// Render order of threshold lines.
    pub const ALL: [Self; 5] = [
        Self::RedAbove,
        Self::RedBelow,
        Self::AmberAbove,
        Self::AmberBelow,
        Self::Target,
    ];

    /// Fixed line color for this threshold.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::RedAbove | Self::RedBelow => "red",
            Self::AmberAbove | Self::AmberBelow => "orange",
            Self::Target => "green",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::RedAbove => "Red Above",
            Self::RedBelow => "Red Below",
            Self::AmberAbove => "Amber Above",
            Self::AmberBelow => "Amber Below",
            Self::Target => "Target",
        }
    }
}

/// Optional threshold values of one observation.
///
/// A non-numeric or blank cell is recorded as "no threshold of that kind".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Thresholds {
    pub red_above: Option<f64>,
    pub red_below: Option<f64>,
    pub amber_above: Option<f64>,
    pub amber_below: Option<f64>,
    pub target: Option<f64>,
}

impl Thresholds {
    #[must_use]
    pub const fn get(&self, kind: ThresholdKind) -> Option<f64> {
        match kind {
            ThresholdKind::RedAbove => self.red_above,
            ThresholdKind::RedBelow => self.red_below,
            ThresholdKind::AmberAbove => self.amber_above,
            ThresholdKind::AmberBelow => self.amber_below,
            ThresholdKind::Target => self.target,
        }
    }

    pub const fn set(&mut self, kind: ThresholdKind, value: Option<f64>) {
        match kind {
            ThresholdKind::RedAbove => self.red_above = value,
            ThresholdKind::RedBelow => self.red_below = value,
            ThresholdKind::AmberAbove => self.amber_above = value,
            ThresholdKind::AmberBelow => self.amber_below = value,
            ThresholdKind::Target => self.target = value,
        }
    }

    #[must_use]
    pub const fn with(mut self, kind: ThresholdKind, value: f64) -> Self {
        self.set(kind, Some(value));
        self
    }

    /// Present thresholds in render order, ignoring non-finite values.
    pub fn present(&self) -> impl Iterator<Item = (ThresholdKind, f64)> + '_ {
        ThresholdKind::ALL.into_iter().filter_map(|kind| {
            self.get(kind)
                .filter(|v| v.is_finite())
                .map(|value| (kind, value))
        })
    }

    /// Copy with every present threshold divided by `divisor`.
    #[must_use]
    pub fn scaled(&self, divisor: f64) -> Self {
        let mut scaled = *self;
        for kind in ThresholdKind::ALL {
            scaled.set(kind, self.get(kind).map(|v| v / divisor));
        }
        scaled
    }
}

/// One observation of one metric.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub reference: String,
    pub name: String,
    pub date: NaiveDate,
    /// Period label shown on the x axis (e.g. "Q1").
    pub period: String,
    pub year: i32,
    pub value: RawValue,
    pub unit: UnitKind,
    pub trend: Trend,
    pub status: Status,
    pub thresholds: Thresholds,
}

impl Observation {
    /// Whether this observation, taken as a metric's latest, calls for a chart.
    #[must_use]
    pub fn needs_reporting(&self) -> bool {
        self.trend.is_directional() || self.status == Status::Red
    }
}

#[cfg(test)]
#[path = "observation_tests.rs"]
mod tests;
