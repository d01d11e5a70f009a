#![forbid(unsafe_code)]

//! Headless layout + SVG renderer for band charts.
//!
//! [`layout::layout_band_chart`] turns validated chart data and a color map
//! into a [`model::BandChartLayout`] holding every pixel position; the
//! [`svg`] module serializes that geometry into a self-contained SVG string.
//! Both steps are pure and allocate all state per call.

pub mod layout;
pub mod model;
pub mod svg;

pub use layout::layout_band_chart;
pub use model::BandChartLayout;
pub use svg::render_band_chart_svg;
