use crate::error::ChartError;
use crate::layout::ChartDescription;
use crate::output::{ExportFormat, RenderBackend, RenderedChart};

use super::element::SvgElement;
use super::trend_chart::TrendChart;

/// Renders charts as standalone SVG images.
#[derive(Debug, Default)]
pub struct SvgBackend {
    current: Option<RenderedChart>,
}

impl RenderBackend for SvgBackend {
    fn format(&self) -> ExportFormat {
        ExportFormat::Svg
    }

    fn render(&mut self, chart: &ChartDescription) -> Result<(), ChartError> {
        if chart.trend.points.is_empty() {
            return Err(ChartError::Render("chart has no points".to_string()));
        }
        let document = TrendChart::new(chart).render();
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
#[path = "backend_tests.rs"]
mod tests;
