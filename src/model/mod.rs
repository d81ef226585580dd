//! Domain data model: observations, series and unit kinds.

mod observation;
mod table;
mod unit;

pub use observation::{Observation, RawValue, Status, ThresholdKind, Thresholds, Trend};
pub use table::{MetricSeries, MetricTable};
pub use unit::UnitKind;

#[cfg(test)]
pub(crate) mod test_fixtures {
    use chrono::NaiveDate;

    use super::*;

    /// Observation with sensible defaults; tests override what they need.
    pub fn obs(reference: &str, date: (i32, u32, u32), value: f64) -> Observation {
        let (y, m, d) = date;
        Observation {
            reference: reference.to_string(),
            name: format!("Metric {reference}"),
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            period: format!("Q{}", (m - 1) / 3 + 1),
            year: y,
            value: RawValue::Number(value),
            unit: UnitKind::WholeNumber,
            trend: Trend::Flat,
            status: Status::Green,
            thresholds: Thresholds::default(),
        }
    }
}
