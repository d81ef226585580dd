use std::fmt::Write;
use std::io::IsTerminal;

use crate::selector::SelectionEntry;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if the stream is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorMode {
    /// Resolve the mode against a stream's TTY status.
    #[must_use]
    pub fn use_colors(self, is_tty: bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            // Per <https://no-color.org>: presence of the variable (any value) disables color.
            Self::Auto => std::env::var_os("NO_COLOR").is_none() && is_tty,
        }
    }

    #[must_use]
    pub fn use_colors_on_stdout(self) -> bool {
        self.use_colors(std::io::stdout().is_terminal())
    }

    #[must_use]
    pub fn use_colors_on_stderr(self) -> bool {
        self.use_colors(std::io::stderr().is_terminal())
    }
}

/// ANSI color codes
pub(crate) mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

/// Human-readable listing of selection decisions.
pub struct SelectionTextFormatter {
    use_colors: bool,
}

impl SelectionTextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.use_colors_on_stdout(),
        }
    }

    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn status_color(status: &str) -> &'static str {
        match status.to_lowercase().as_str() {
            "red" => ansi::RED,
            "amber" => ansi::YELLOW,
            "green" => ansi::GREEN,
            _ => ansi::DIM,
        }
    }

    /// One line per metric, selected metrics marked with `✓`, then a summary.
    #[must_use]
    pub fn format(&self, entries: &[SelectionEntry]) -> String {
        let mut output = String::new();
        let ref_width = entries.iter().map(|e| e.reference.chars().count()).max().unwrap_or(0);
        let name_width = entries.iter().map(|e| e.name.chars().count()).max().unwrap_or(0);

        for entry in entries {
            let mark = if entry.selected {
                self.colorize("✓", ansi::CYAN)
            } else {
                " ".to_string()
            };
            // Pad before colorizing so escape codes don't skew the columns.
            let trend = format!("{:<7}", entry.trend.label());
            let trend = if entry.trend.is_directional() {
                self.colorize(&trend, ansi::BOLD)
            } else {
                trend
            };
            let status = self.colorize(&entry.status, Self::status_color(&entry.status));
            let line = format!(
                "{mark} {:<ref_width$}  {:<name_width$}  {} {}  {trend}  {status}",
                entry.reference, entry.name, entry.latest_period, entry.latest_date
            );
            let _ = writeln!(output, "{}", line.trim_end());
        }

        let selected = entries.iter().filter(|e| e.selected).count();
        let _ = writeln!(
            output,
            "\n{selected} of {} metrics need reporting",
            entries.len()
        );
        output
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
