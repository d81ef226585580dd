use std::io::IsTerminal;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar for the chart export loop.
///
/// The bar is hidden in quiet mode or when stderr is not a TTY. Messages
/// printed through [`ExportProgress::println`] are written above the bar so
/// the two don't interleave.
pub struct ExportProgress {
    progress_bar: ProgressBar,
    quiet: bool,
}

impl ExportProgress {
    /// Creates a progress bar for `total` metrics, drawn on stderr.
    #[must_use]
    pub fn new(total: u64, quiet: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::new_with_visibility(total, quiet, is_tty)
    }

    /// Explicit visibility control, so the visible path is testable without a TTY.
    fn new_with_visibility(total: u64, quiet: bool, is_tty: bool) -> Self {
        let progress_bar = if quiet || !is_tty {
            ProgressBar::hidden()
        } else {
            Self::create_visible_progress_bar(total)
        };

        Self {
            progress_bar,
            quiet,
        }
    }

    fn create_visible_progress_bar(total: u64) -> ProgressBar {
        let pb = ProgressBar::new(total);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} Charting [{bar:40.cyan/blue}] {pos}/{len} metrics {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓░");
        pb.set_style(style);
        pb
    }

    /// Shows which metric is being processed.
    pub fn start(&self, reference: &str) {
        self.progress_bar.set_message(reference.to_string());
    }

    /// Marks one metric as done.
    pub fn inc(&self) {
        self.progress_bar.inc(1);
    }

    /// Prints a line to stderr above the bar. Suppressed in quiet mode.
    pub fn println(&self, message: &str) {
        if !self.quiet {
            self.progress_bar.suspend(|| eprintln!("{message}"));
        }
    }

    /// Runs `f` with the bar temporarily cleared, e.g. to write a preview.
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.progress_bar.suspend(f)
    }

    #[must_use]
    pub fn position(&self) -> u64 {
        self.progress_bar.position()
    }

    /// Finishes the progress bar and clears it from the terminal.
    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
