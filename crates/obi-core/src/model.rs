use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One labeled, valued slice of a row's bar. `value` is non-negative once the
/// input has passed [`crate::validate::validate_band_data`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Segment {
    pub label: String,
    pub value: f64,
}

/// One horizontal bar; `name` is its axis label. `segments` is non-empty for
/// validated input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Row {
    pub name: String,
    pub segments: Vec<Segment>,
}

/// The full chart input: optional title and unit plus at least one row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BandData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub rows: Vec<Row>,
}

/// An explicit label→color override; `color` is a `#RRGGBB` token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorMapping {
    pub label: String,
    pub color: String,
}

/// Per-label color overrides, applied after the automatic palette assignment.
/// The sequence may be empty and may repeat a label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleConfig {
    pub colors: Vec<ColorMapping>,
}

/// Label→color mapping built fresh per render call. Iteration follows first
/// appearance order of the labels in the chart data.
pub type ColorMap = IndexMap<String, String>;
