//! Geometry model produced by layout and consumed by the SVG renderer.
//!
//! All positions are absolute pixels in the final document's coordinate
//! space. The structs are serializable so frontends can inspect the computed
//! geometry as JSON.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BandChartLayout {
    pub width: f64,
    pub height: f64,
    pub title: Option<TitleLayout>,
    pub rows: Vec<RowLayout>,
    pub legend_items: Vec<LegendItemLayout>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleLayout {
    /// Display text, already combined with the unit (`title（unit）`).
    pub text: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowLayout {
    pub name: String,
    /// Anchor of the right-aligned row label.
    pub label_x: f64,
    pub label_y: f64,
    /// Top edge of the bar.
    pub y: f64,
    pub segments: Vec<SegmentLayout>,
    pub total: f64,
    pub total_x: f64,
    pub total_y: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentLayout {
    pub label: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
    /// Whether the segment is wide enough to carry an in-segment value label.
    pub show_value: bool,
    pub value_x: f64,
    pub value_y: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegendItemLayout {
    pub label: String,
    pub fill: String,
    /// Top-left corner of the swatch.
    pub x: f64,
    pub y: f64,
}
