use crate::error::ChartError;
use crate::layout::ChartDescription;

use super::{ExportFormat, RenderBackend, RenderedChart};

/// Writes the chart description itself as pretty-printed JSON.
///
/// The description carries d3-style tick formats, so the file can be fed to
/// a browser-side renderer.
#[derive(Debug, Default)]
pub struct JsonBackend {
    current: Option<RenderedChart>,
}

impl RenderBackend for JsonBackend {
    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }

    fn render(&mut self, chart: &ChartDescription) -> Result<(), ChartError> {
        let mut document = serde_json::to_string_pretty(chart)
            .map_err(|e| ChartError::Render(format!("cannot serialize chart: {e}")))?;
        document.push('\n');
        self.current = Some(RenderedChart {
            description: chart.clone(),
            document,
        });
        Ok(())
    }

    fn current(&self) -> Option<&RenderedChart> {
        self.current.as_ref()
    }

    fn reset(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
