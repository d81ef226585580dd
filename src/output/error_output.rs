//! Colored error and warning output on stderr.
//!
//! Format: `✖ Error Type: message` / `  × detail` / `  help: suggestion`

use std::io::Write;

use crate::error::MetricTrendsError;

use super::ColorMode;
use super::text::ansi;

/// Error output formatter with color support.
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.use_colors_on_stderr(),
        }
    }

    /// Auto-detects color support on stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(ColorMode::Auto)
    }

    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    pub fn print_error(&self, error_type: &str, message: &str) {
        self.print_error_with_detail(error_type, message, None, None);
    }

    pub fn print_error_with_detail(
        &self,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        let mut stderr = std::io::stderr().lock();
        self.write_error(&mut stderr, error_type, message, detail, suggestion);
    }

    /// Prints a run-level error with its category and cause.
    pub fn print_run_error(&self, error: &MetricTrendsError) {
        let detail = error.detail();
        self.print_error_with_detail(
            error.error_type(),
            &error.to_string(),
            detail.as_deref(),
            suggestion_for(error),
        );
    }

    pub fn print_warning(&self, message: &str) {
        self.print_warning_with_detail(message, None);
    }

    pub fn print_warning_with_detail(&self, message: &str, detail: Option<&str>) {
        let mut stderr = std::io::stderr().lock();
        self.write_warning(&mut stderr, message, detail);
    }

    /// Writes an error to a writer.
    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        let heading = format!("✖ {error_type}:");
        self.write_message(w, &heading, ansi::RED, message, detail, suggestion);
    }

    /// Writes a warning to a writer.
    pub fn write_warning<W: Write>(&self, w: &mut W, message: &str, detail: Option<&str>) {
        self.write_message(w, "⚠ Warning:", ansi::YELLOW, message, detail, None);
    }

    fn write_message<W: Write>(
        &self,
        w: &mut W,
        heading: &str,
        color: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        // Write failures on stderr are ignored: there is nowhere left to report them.
        if self.use_colors {
            let _ = writeln!(w, "{}{color}{heading}{} {message}", ansi::BOLD, ansi::RESET);
        } else {
            let _ = writeln!(w, "{heading} {message}");
        }

        if let Some(d) = detail {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {d}");
            }
        }

        if let Some(s) = suggestion {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }
}

impl Default for ErrorOutput {
    fn default() -> Self {
        Self::stderr()
    }
}

const fn suggestion_for(error: &MetricTrendsError) -> Option<&'static str> {
    match error {
        MetricTrendsError::MissingColumn { .. } => {
            Some("Map the header names under [input.columns] in the config file")
        }
        MetricTrendsError::NoRows => Some("Check [input] date_formats against the Date column"),
        MetricTrendsError::TomlParse(_) => Some("Run 'metric-trends config validate'"),
        _ => None,
    }
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
