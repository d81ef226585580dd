//! Chart layout: turns one metric series into an inert chart description.
//!
//! The layout owns every numeric decision (axis ranges, threshold lines,
//! label placement, tick formats). Backends in [`crate::output`] only draw.

mod axis;
mod builder;
mod description;
mod style;

pub use axis::{AxisRange, TickFormat, TickStyle, YearGroup, y_range, year_groups};
pub use builder::ChartLayoutBuilder;
pub use description::{
    Annotation, Canvas, ChartDescription, Font, LineDash, Marker, Point, ThresholdLine, Tick,
    Title, TrendLine, XAxis, YAxis, YRef,
};
pub use style::ChartStyle;
