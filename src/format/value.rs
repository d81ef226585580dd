//! Unit-aware display strings for metric values.

use crate::model::{RawValue, UnitKind};

use super::number::{fixed, is_integral, trimmed, truncated};

/// Currency symbol prefixed to every currency unit.
pub const CURRENCY_SYMBOL: &str = "£";

/// Format a raw cell for display.
///
/// - `Missing` and NaN render as an empty string
/// - text that parses as a number is formatted as that number
/// - any other text is returned unchanged
#[must_use]
pub fn format_value(value: &RawValue, unit: UnitKind) -> String {
    match value {
        RawValue::Number(v) => format_number(*v, unit),
        RawValue::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_or_else(|_| text.clone(), |v| format_number(v, unit)),
        RawValue::Missing => String::new(),
    }
}

/// Format a numeric value for display.
///
/// Percentages round half to even: `0.005` renders as `0%`, `0.375` as `38%`.
/// Currency-in-millions values are expected already divided by 1,000,000.
#[must_use]
pub fn format_number(value: f64, unit: UnitKind) -> String {
    if value.is_nan() {
        return String::new();
    }
    if value.is_infinite() {
        return value.to_string();
    }

    match unit {
        UnitKind::Percentage => {
            let percent = (value * 100.0).round_ties_even() + 0.0;
            format!("{}%", fixed(percent, 0))
        }
        UnitKind::WholeNumber | UnitKind::Thousands | UnitKind::CurrencyThousands => {
            truncated(value)
        }
        UnitKind::Decimal => integral_or_fixed(value, 2),
        UnitKind::CurrencyMillions => {
            format!("{CURRENCY_SYMBOL}{}m", integral_or_fixed(value, 1))
        }
        UnitKind::Currency => format!("{CURRENCY_SYMBOL}{}", integral_or_fixed(value, 2)),
        UnitKind::CurrencySmall => format!("{CURRENCY_SYMBOL}{}", fixed(value, 3)),
        UnitKind::Other => trimmed(value, 2),
    }
}

fn integral_or_fixed(value: f64, decimals: usize) -> String {
    if is_integral(value) {
        fixed(value + 0.0, 0)
    } else {
        fixed(value, decimals)
    }
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
