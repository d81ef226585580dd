//! SVG rendering of metric trend charts.
//!
//! Charts are standalone documents with explicit pixel dimensions, so they
//! open directly in a browser or image viewer.

mod backend;
mod builder;
mod element;
mod format;
mod projection;
mod style;
mod trend_chart;

pub use backend::SvgBackend;
