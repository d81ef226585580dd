//! Selection of metrics whose latest observation calls for a chart.

use indexmap::IndexSet;
use serde::Serialize;

use crate::model::{MetricTable, Observation, Trend};

/// Metric references requiring reporting, in ascending reference order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    references: IndexSet<String>,
}

impl Selection {
    #[must_use]
    pub fn contains(&self, reference: &str) -> bool {
        self.references.contains(reference)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.references.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.references.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }
}

/// Why a metric was (or was not) selected, taken from its latest observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionEntry {
    pub reference: String,
    pub name: String,
    pub latest_period: String,
    pub latest_date: String,
    pub trend: Trend,
    pub status: String,
    pub selected: bool,
}

/// Latest observation of a group: maximum date, last row in input order on ties.
fn latest<'a>(rows: &[&'a Observation]) -> Option<&'a Observation> {
    rows.iter()
        .copied()
        .reduce(|best, row| if row.date >= best.date { row } else { best })
}

/// Determine which metrics need a chart.
///
/// A metric is selected when its latest observation has a rising or falling
/// trend, or a Red status. Earlier observations never affect the decision.
#[must_use]
pub fn select(table: &MetricTable) -> Selection {
    let mut references: Vec<String> = table
        .group_by_reference()
        .into_iter()
        .filter_map(|(reference, rows)| {
            latest(&rows)
                .filter(|row| row.needs_reporting())
                .map(|_| reference.to_string())
        })
        .collect();
    references.sort();

    Selection {
        references: references.into_iter().collect(),
    }
}

/// Per-metric selection breakdown, in ascending reference order.
#[must_use]
pub fn explain(table: &MetricTable) -> Vec<SelectionEntry> {
    let mut entries: Vec<SelectionEntry> = table
        .group_by_reference()
        .into_iter()
        .filter_map(|(reference, rows)| {
            latest(&rows).map(|row| SelectionEntry {
                reference: reference.to_string(),
                name: row.name.clone(),
                latest_period: row.period.clone(),
                latest_date: row.date.to_string(),
                trend: row.trend,
                status: row.status.label().to_string(),
                selected: row.needs_reporting(),
            })
        })
        .collect();
    entries.sort_by(|a, b| a.reference.cmp(&b.reference));
    entries
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod tests;
