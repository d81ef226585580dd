//! Chart rendering backends and console output.

mod error_output;
mod json;
mod preview;
mod progress;
mod svg;
mod text;

pub use error_output::ErrorOutput;
pub use json::JsonBackend;
pub use preview::render_preview;
pub use progress::ExportProgress;
pub use svg::SvgBackend;
pub use text::{ColorMode, SelectionTextFormatter};

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ChartError;
use crate::layout::ChartDescription;

/// File format written for each chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Svg,
    Json,
}

impl ExportFormat {
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Json => "json",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown export format: {s}")),
        }
    }
}

/// A chart held in memory between rendering and export.
#[derive(Debug, Clone)]
pub struct RenderedChart {
    pub description: ChartDescription,
    pub document: String,
}

/// A rendering backend holds at most one rendered chart at a time.
///
/// The export loop calls `render`, optionally `display`, then `export`, and
/// always `reset` before moving on to the next metric.
pub trait RenderBackend {
    fn format(&self) -> ExportFormat;

    /// Render `chart` and keep it as the current chart.
    ///
    /// # Errors
    /// Returns [`ChartError::Render`] if the document cannot be produced.
    fn render(&mut self, chart: &ChartDescription) -> Result<(), ChartError>;

    fn current(&self) -> Option<&RenderedChart>;

    /// Release the current chart.
    fn reset(&mut self);

    /// Write a terminal preview of the current chart.
    ///
    /// # Errors
    /// Returns [`ChartError::Render`] if nothing is rendered or the preview
    /// cannot be written.
    fn display(&self, out: &mut dyn Write) -> Result<(), ChartError> {
        let chart = self.current().ok_or_else(nothing_rendered)?;
        out.write_all(render_preview(&chart.description).as_bytes())
            .map_err(|e| ChartError::Render(format!("cannot write preview: {e}")))
    }

    /// Write the current chart's document to `path`.
    ///
    /// # Errors
    /// Returns [`ChartError::Export`] if the file cannot be written.
    fn export(&self, path: &Path) -> Result<(), ChartError> {
        let chart = self.current().ok_or_else(nothing_rendered)?;
        fs::write(path, &chart.document).map_err(|source| ChartError::Export {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn nothing_rendered() -> ChartError {
    ChartError::Render("no chart has been rendered".to_string())
}

/// Backend for the given export format.
#[must_use]
pub fn backend_for(format: ExportFormat) -> Box<dyn RenderBackend> {
    match format {
        ExportFormat::Svg => Box::new(SvgBackend::default()),
        ExportFormat::Json => Box::new(JsonBackend::default()),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
