//! Unit kinds: how a metric's values are displayed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Semantic type of a metric's numeric value.
///
/// Assigned once per metric at load time and read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitKind {
    /// Fraction rendered as a percentage (0.756 → 76%).
    Percentage,
    WholeNumber,
    Decimal,
    Thousands,
    CurrencyThousands,
    /// Pounds, pre-scaled to millions before layout.
    CurrencyMillions,
    Currency,
    CurrencySmall,
    #[default]
    Other,
}

impl UnitKind {
    pub const ALL: [Self; 9] = [
        Self::Percentage,
        Self::WholeNumber,
        Self::Decimal,
        Self::Thousands,
        Self::CurrencyThousands,
        Self::CurrencyMillions,
        Self::Currency,
        Self::CurrencySmall,
        Self::Other,
    ];

    /// Label used in the source table's unit column.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Percentage => "Percentage",
            Self::WholeNumber => "Whole number",
            Self::Decimal => "Decimal",
            Self::Thousands => "Thousands",
            Self::CurrencyThousands => "Currency thousands",
            Self::CurrencyMillions => "Currency millions",
            Self::Currency => "Currency",
            Self::CurrencySmall => "Currency small",
            Self::Other => "Other",
        }
    }

    /// Factor applied to values and thresholds before layout.
    #[must_use]
    pub const fn layout_divisor(self) -> f64 {
        match self {
            Self::CurrencyMillions => 1_000_000.0,
            _ => 1.0,
        }
    }

    /// Parse a unit label. Unknown labels map to [`UnitKind::Other`].
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let normalized = label.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(normalized))
            .unwrap_or(Self::Other)
    }
}

impl FromStr for UnitKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
