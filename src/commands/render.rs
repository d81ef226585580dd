use std::io::Write;

use crate::cli::{Cli, RenderArgs};
use crate::error::ChartError;
use crate::exporter::{ChartExporter, ExportListener, ExportReport, MetricOutcome, MetricStatus};
use crate::layout::ChartLayoutBuilder;
use crate::output::{ErrorOutput, ExportFormat, ExportProgress, RenderBackend, backend_for};
use crate::selector::select;
use crate::{EXIT_CONFIG_ERROR, EXIT_METRIC_FAILURES, EXIT_SUCCESS, Result};

use super::context::{error_output, load_config, load_table, resolve_input};

#[must_use]
pub fn run_render(args: &RenderArgs, cli: &Cli) -> i32 {
    match run_render_impl(args, cli) {
        Ok(report) if report.has_failures() => EXIT_METRIC_FAILURES,
        Ok(_) => EXIT_SUCCESS,
        Err(e) => {
            error_output(cli).print_run_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Renders and exports a chart for every metric that needs reporting.
///
/// # Errors
/// Returns an error if the configuration or input cannot be loaded, or the
/// output directory cannot be created. Failures of individual metrics are
/// recorded in the returned report.
pub fn run_render_impl(args: &RenderArgs, cli: &Cli) -> Result<ExportReport> {
    let loaded = load_config(args.config.as_deref(), cli.no_config)?;
    if cli.verbose >= 2
        && let Some(source) = &loaded.source
    {
        eprintln!("Using configuration: {}", source.display());
    }
    let config = loaded.config;

    let input = resolve_input(args.input.as_deref(), &config)?;
    let ingest = load_table(&input, &config, cli)?;
    let selection = select(&ingest.table);

    let format = args.format.map_or(config.output.format, ExportFormat::from);
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| config.output.dir.clone());
    let show = args.show || config.output.show;

    let mut exporter = ChartExporter::new(
        ChartLayoutBuilder::new(config.chart),
        backend_for(format),
        output_dir,
    )
    .with_show(show);

    let mut listener = ConsoleListener::new(cli);
    exporter.export_all(&ingest.table, &selection, &mut listener)
}

/// Reports export progress on the terminal.
struct ConsoleListener {
    verbose: u8,
    quiet: bool,
    errors: ErrorOutput,
    progress: Option<ExportProgress>,
}

impl ConsoleListener {
    fn new(cli: &Cli) -> Self {
        Self {
            verbose: cli.verbose,
            quiet: cli.quiet,
            errors: error_output(cli),
            progress: None,
        }
    }

    fn info(&self, message: &str) {
        if self.quiet {
            return;
        }
        match &self.progress {
            Some(progress) => progress.println(message),
            None => eprintln!("{message}"),
        }
    }

    fn detail(&self, message: &str) {
        if self.verbose > 0 {
            self.info(message);
        }
    }

    fn print_failure(&self, outcome: &MetricOutcome, reason: &ChartError) {
        let message = format!("{} ({}): {reason}", outcome.name, outcome.reference);
        let source = std::error::Error::source(reason).map(ToString::to_string);
        let print = || {
            self.errors
                .print_error_with_detail("Chart", &message, source.as_deref(), None);
        };
        match &self.progress {
            Some(progress) => progress.suspend(print),
            None => print(),
        }
    }
}

impl ExportListener for ConsoleListener {
    fn on_begin(&mut self, total: usize) {
        self.info(&format!("Total metrics to process: {total}"));
        self.progress = Some(ExportProgress::new(total as u64, self.quiet));
    }

    fn on_metric(&mut self, index: usize, total: usize, reference: &str, name: &str) {
        if let Some(progress) = &self.progress {
            progress.start(reference);
        }
        self.detail(&format!("Processing metric {index} of {total}"));
        self.detail(&format!("Creating chart for: {name}"));
    }

    fn display(&mut self, backend: &dyn RenderBackend) -> std::result::Result<(), ChartError> {
        let show = || -> std::result::Result<(), ChartError> {
            let mut stdout = std::io::stdout().lock();
            backend.display(&mut stdout)?;
            stdout
                .flush()
                .map_err(|e| ChartError::Render(e.to_string()))
        };
        match &self.progress {
            Some(progress) => progress.suspend(show),
            None => show(),
        }
    }

    fn on_outcome(&mut self, outcome: &MetricOutcome) {
        match &outcome.status {
            MetricStatus::Exported { path } => {
                self.detail(&format!("Saved chart: {}", path.display()));
            }
            MetricStatus::Failed { reason } => self.print_failure(outcome, reason),
        }
        if let Some(progress) = &self.progress {
            progress.inc();
        }
    }

    fn on_finish(&mut self, report: &ExportReport) {
        if let Some(progress) = self.progress.take() {
            progress.finish();
        }
        self.info(&format!(
            "Processed {} metrics ({} exported, {} failed)",
            report.total(),
            report.exported(),
            report.failed()
        ));
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
