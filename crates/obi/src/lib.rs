#![forbid(unsafe_code)]

//! Band charts (stacked horizontal bars) rendered to SVG, headless.
//!
//! The whole pipeline is pure and synchronous, so the same entry points serve
//! the CLI and a browser editor:
//!
//! ```
//! use serde_json::json;
//!
//! let data = json!({
//!     "title": "Sales",
//!     "rows": [
//!         { "name": "2024", "segments": [{ "label": "X", "value": 3 }] }
//!     ]
//! });
//! let style = json!({ "colors": [] });
//!
//! let svg = obi::generate_band_chart(&data, &style)?;
//! assert!(svg.starts_with("<svg "));
//! # Ok::<(), obi::Error>(())
//! ```

pub use obi_core::{
    BandData, ColorMap, ColorMapping, Error, Result, Row, Segment, StyleConfig, build_color_map,
    hash_label,
};
pub use obi_core::{
    band_data_from_value, style_config_from_value, validate_band_data, validate_style_config,
};
pub use obi_render::{BandChartLayout, layout_band_chart, render_band_chart_svg};

use serde_json::Value;

/// Validates both inputs and renders the chart in one call.
///
/// Validation failures abort before any color or geometry work; partial
/// charts are never produced.
pub fn generate_band_chart(data: &Value, style: &Value) -> Result<String> {
    let data = band_data_from_value(data)?;
    let style = style_config_from_value(style)?;
    Ok(render_band_chart(&data, &style))
}

/// The already-validated pipeline, for callers holding typed data.
pub fn render_band_chart(data: &BandData, style: &StyleConfig) -> String {
    tracing::debug!(rows = data.rows.len(), "generating band chart");
    let colors = build_color_map(data, style);
    let layout = layout_band_chart(data, &colors);
    render_band_chart_svg(&layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn generates_chart_with_title_override_and_totals() {
        let data = json!({
            "title": "Sales",
            "unit": "M",
            "rows": [
                {
                    "name": "2024",
                    "segments": [
                        { "label": "X", "value": 3 },
                        { "label": "Y", "value": 2 }
                    ]
                }
            ]
        });
        let style = json!({ "colors": [{ "label": "X", "color": "#aabbcc" }] });

        let svg = generate_band_chart(&data, &style).unwrap();
        assert!(svg.contains("Sales（M）"), "{svg}");
        assert!(svg.contains(r##"fill="#aabbcc""##), "{svg}");
        assert!(svg.contains(r##"fill="#6b7280">5</text>"##), "{svg}");
        assert_eq!(svg.matches(">X</text>").count(), 1);
        assert_eq!(svg.matches(">Y</text>").count(), 1);
    }

    #[test]
    fn omitted_title_produces_no_title_element() {
        let data = json!({
            "rows": [
                { "name": "2024", "segments": [{ "label": "X", "value": 1 }] }
            ]
        });
        let svg = generate_band_chart(&data, &json!({ "colors": [] })).unwrap();
        assert!(!svg.contains(r#"text-anchor="middle" font-size="16""#));
    }

    #[test]
    fn invalid_data_aborts_before_rendering() {
        let err = generate_band_chart(&json!({ "rows": [] }), &json!({ "colors": [] }))
            .unwrap_err()
            .to_string();
        assert!(err.contains("at least one row"), "{err}");
    }

    #[test]
    fn invalid_style_aborts_before_rendering() {
        let data = json!({
            "rows": [
                { "name": "2024", "segments": [{ "label": "A", "value": 1 }] }
            ]
        });
        let err = generate_band_chart(&data, &json!({ "colors": [{ "label": "A", "color": "#GGG" }] }))
            .unwrap_err()
            .to_string();
        assert!(err.contains("colors[0].color"), "{err}");
    }

    #[test]
    fn zero_valued_chart_still_renders() {
        let data = json!({
            "rows": [
                { "name": "empty", "segments": [{ "label": "X", "value": 0 }] }
            ]
        });
        let svg = generate_band_chart(&data, &json!({ "colors": [] })).unwrap();
        assert!(svg.contains(r#"width="0""#), "{svg}");
        assert!(!svg.contains("NaN") && !svg.contains("inf"), "{svg}");
    }
}
