//! Export loop: one chart file per selected metric.
//!
//! Each metric is processed in isolation. A failure is recorded as a
//! [`MetricOutcome`] and the loop moves on; only the output directory being
//! unusable stops the run.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ChartError, MetricTrendsError, Result};
use crate::layout::{ChartDescription, ChartLayoutBuilder};
use crate::model::{MetricSeries, MetricTable};
use crate::output::RenderBackend;
use crate::selector::Selection;

/// Name used when neither the display name nor the reference leaves anything.
const FALLBACK_FILE_STEM: &str = "metric";

/// Result of processing one metric.
#[derive(Debug)]
pub enum MetricStatus {
    Exported { path: PathBuf },
    Failed { reason: ChartError },
}

#[derive(Debug)]
pub struct MetricOutcome {
    pub reference: String,
    pub name: String,
    pub status: MetricStatus,
}

impl MetricOutcome {
    #[must_use]
    pub const fn is_exported(&self) -> bool {
        matches!(self.status, MetricStatus::Exported { .. })
    }
}

/// Every outcome of a run, in processing order.
#[derive(Debug, Default)]
pub struct ExportReport {
    pub outcomes: Vec<MetricOutcome>,
}

impl ExportReport {
    #[must_use]
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    #[must_use]
    pub fn exported(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_exported()).count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.total() - self.exported()
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }
}

/// Hooks for reporting progress of the export loop. All methods default to no-ops.
pub trait ExportListener {
    fn on_begin(&mut self, _total: usize) {}

    /// Called before metric `index` (1-based) is built.
    fn on_metric(&mut self, _index: usize, _total: usize, _reference: &str, _name: &str) {}

    /// Show the rendered chart. Only called when display is enabled.
    ///
    /// # Errors
    /// A display failure counts as a failure of the metric.
    fn display(&mut self, _backend: &dyn RenderBackend) -> std::result::Result<(), ChartError> {
        Ok(())
    }

    fn on_outcome(&mut self, _outcome: &MetricOutcome) {}

    fn on_finish(&mut self, _report: &ExportReport) {}
}

/// Listener that reports nothing.
pub struct SilentListener;

impl ExportListener for SilentListener {}

/// Holds the backend's current chart and resets the backend when dropped,
/// whether or not the export succeeded.
struct ChartScope<'b> {
    backend: &'b mut dyn RenderBackend,
}

impl<'b> ChartScope<'b> {
    fn open(
        backend: &'b mut dyn RenderBackend,
        chart: &ChartDescription,
    ) -> std::result::Result<Self, ChartError> {
        let mut scope = Self { backend };
        scope.backend.render(chart)?;
        Ok(scope)
    }

    fn backend(&self) -> &dyn RenderBackend {
        &*self.backend
    }
}

impl Drop for ChartScope<'_> {
    fn drop(&mut self) {
        self.backend.reset();
    }
}

/// Keep alphanumerics, spaces, hyphens and underscores; drop everything else.
///
/// Trailing whitespace is trimmed.
#[must_use]
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .filter(|&c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect::<String>()
        .trim_end()
        .to_string()
}

/// Hands out unique file names within one run.
#[derive(Debug, Default)]
struct FileNamer {
    used: HashSet<String>,
}

impl FileNamer {
    /// File name for a metric. Repeated stems get `_2`, `_3`, … suffixes.
    fn name_for(&mut self, display_name: &str, reference: &str, extension: &str) -> String {
        let stem = [display_name, reference]
            .into_iter()
            .map(sanitize_filename)
            .find(|s| !s.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_FILE_STEM.to_string());

        let mut candidate = stem.clone();
        let mut n = 1;
        // Case-insensitive filesystems would otherwise overwrite silently.
        while !self.used.insert(candidate.to_lowercase()) {
            n += 1;
            candidate = format!("{stem}_{n}");
        }
        format!("{candidate}.{extension}")
    }
}

/// Builds, displays and exports a chart for each selected metric.
pub struct ChartExporter {
    builder: ChartLayoutBuilder,
    backend: Box<dyn RenderBackend>,
    output_dir: PathBuf,
    show: bool,
}

impl ChartExporter {
    #[must_use]
    pub fn new(
        builder: ChartLayoutBuilder,
        backend: Box<dyn RenderBackend>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            builder,
            backend,
            output_dir: output_dir.into(),
            show: false,
        }
    }

    /// Enable the display step before each export.
    #[must_use]
    pub const fn with_show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Export every metric in `selection`.
    ///
    /// # Errors
    /// Returns [`MetricTrendsError::OutputDir`] if the output directory cannot
    /// be created. Per-metric failures are reported in the returned
    /// [`ExportReport`] instead.
    pub fn export_all(
        &mut self,
        table: &MetricTable,
        selection: &Selection,
        listener: &mut dyn ExportListener,
    ) -> Result<ExportReport> {
        fs::create_dir_all(&self.output_dir).map_err(|source| MetricTrendsError::OutputDir {
            path: self.output_dir.clone(),
            source,
        })?;

        let total = selection.len();
        let mut namer = FileNamer::default();
        let mut report = ExportReport::default();
        listener.on_begin(total);

        for (i, reference) in selection.iter().enumerate() {
            let series = table.series(reference);
            let name = series
                .as_ref()
                .map_or_else(|| reference.to_string(), |s| s.name().to_string());
            listener.on_metric(i + 1, total, reference, &name);

            let status = match self.export_one(series.as_ref(), reference, &mut namer, listener) {
                Ok(path) => MetricStatus::Exported { path },
                Err(reason) => MetricStatus::Failed { reason },
            };
            let outcome = MetricOutcome {
                reference: reference.to_string(),
                name,
                status,
            };
            listener.on_outcome(&outcome);
            report.outcomes.push(outcome);
        }

        listener.on_finish(&report);
        Ok(report)
    }

    fn export_one(
        &mut self,
        series: Option<&MetricSeries>,
        reference: &str,
        namer: &mut FileNamer,
        listener: &mut dyn ExportListener,
    ) -> std::result::Result<PathBuf, ChartError> {
        let series = series.ok_or(ChartError::EmptySeries)?;
        let chart = self.builder.build(series)?;

        let scope = ChartScope::open(self.backend.as_mut(), &chart)?;
        if self.show {
            listener.display(scope.backend())?;
        }

        let extension = scope.backend().format().extension();
        let path = self
            .output_dir
            .join(namer.name_for(&chart.title.text, reference, extension));
        scope.backend().export(&path)?;
        Ok(path)
    }
}

#[cfg(test)]
#[path = "exporter_tests.rs"]
mod tests;
