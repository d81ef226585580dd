//! In-memory table of observations and per-metric series.

use indexmap::IndexMap;

use super::observation::Observation;

/// All observations of a run, in input order.
///
/// Passed explicitly between pipeline stages; nothing here is global.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricTable {
    rows: Vec<Observation>,
}

impl MetricTable {
    #[must_use]
    pub const fn new(rows: Vec<Observation>) -> Self {
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[Observation] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Group rows by metric reference, keeping first-seen order of references
    /// and input order of rows within each group.
    #[must_use]
    pub fn group_by_reference(&self) -> IndexMap<&str, Vec<&Observation>> {
        let mut groups: IndexMap<&str, Vec<&Observation>> = IndexMap::new();
        for row in &self.rows {
            groups.entry(row.reference.as_str()).or_default().push(row);
        }
        groups
    }

    /// Private copy of one metric's rows, or `None` if the reference is unknown.
    #[must_use]
    pub fn series(&self, reference: &str) -> Option<MetricSeries> {
        let rows: Vec<Observation> = self
            .rows
            .iter()
            .filter(|row| row.reference == reference)
            .cloned()
            .collect();
        MetricSeries::new(rows)
    }
}

/// All observations of one metric, sorted ascending by date.
///
/// Never empty. The sort is stable, so rows sharing a date keep input order.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSeries {
    observations: Vec<Observation>,
}

impl MetricSeries {
    /// Build a series; returns `None` for an empty row set.
    #[must_use]
    pub fn new(mut observations: Vec<Observation>) -> Option<Self> {
        if observations.is_empty() {
            return None;
        }
        observations.sort_by_key(|obs| obs.date);
        Some(Self { observations })
    }

    #[must_use]
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    #[must_use]
    pub fn first(&self) -> &Observation {
        &self.observations[0]
    }

    /// Latest observation; with tied dates the last row in input order wins.
    #[must_use]
    pub fn latest(&self) -> &Observation {
        &self.observations[self.observations.len() - 1]
    }

    #[must_use]
    pub fn reference(&self) -> &str {
        &self.first().reference
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.first().name
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
