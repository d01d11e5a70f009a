//! Schema validation over the generic value tree.
//!
//! Inputs arrive as [`serde_json::Value`] (YAML and JSON deserialize into the
//! same tree), so every check is an exhaustive pattern match rather than
//! dynamic property probing. Validation fails fast on the first violation in
//! field order and always addresses the offending value with a zero-based
//! bracket path (`rows[1].segments[0].value`); `$` addresses the root.

use crate::model::{BandData, StyleConfig};
use crate::{Error, Result};
use serde_json::{Map, Value};

fn data_err(path: impl Into<String>, message: impl Into<String>) -> Error {
    Error::InvalidChartData {
        path: path.into(),
        message: message.into(),
    }
}

fn style_err(path: impl Into<String>, message: impl Into<String>) -> Error {
    Error::InvalidStyleConfig {
        path: path.into(),
        message: message.into(),
    }
}

fn as_object<'a>(value: &'a Value, path: &str, err: fn(String, String) -> Error) -> Result<&'a Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(err(path.to_string(), "must be a non-null object".to_string())),
    }
}

fn reject_unknown_fields(
    map: &Map<String, Value>,
    known: &[&str],
    prefix: &str,
    err: fn(String, String) -> Error,
) -> Result<()> {
    for key in map.keys() {
        if !known.contains(&key.as_str()) {
            let path = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{prefix}.{key}")
            };
            return Err(err(path, format!("unknown field `{key}`")));
        }
    }
    Ok(())
}

/// Checks a parsed value against the chart-data schema.
///
/// On success the value is guaranteed to deserialize into [`BandData`] with at
/// least one row, at least one segment per row, and non-negative segment
/// values.
pub fn validate_band_data(value: &Value) -> Result<()> {
    let obj = as_object(value, "$", data_err)?;
    reject_unknown_fields(obj, &["title", "unit", "rows"], "", data_err)?;

    if obj.get("title").is_some_and(|t| !t.is_string()) {
        return Err(data_err("title", "must be a string when present"));
    }
    if obj.get("unit").is_some_and(|u| !u.is_string()) {
        return Err(data_err("unit", "must be a string when present"));
    }

    let rows = match obj.get("rows") {
        Some(Value::Array(rows)) => rows,
        Some(_) => return Err(data_err("rows", "must be an array")),
        None => return Err(data_err("rows", "required array field is missing")),
    };
    if rows.is_empty() {
        return Err(data_err("rows", "must contain at least one row"));
    }

    for (i, row) in rows.iter().enumerate() {
        let prefix = format!("rows[{i}]");
        let row = as_object(row, &prefix, data_err)?;
        reject_unknown_fields(row, &["name", "segments"], &prefix, data_err)?;

        match row.get("name") {
            Some(Value::String(_)) => {}
            Some(_) => return Err(data_err(format!("{prefix}.name"), "must be a string")),
            None => {
                return Err(data_err(
                    format!("{prefix}.name"),
                    "required string field is missing",
                ));
            }
        }

        let segments = match row.get("segments") {
            Some(Value::Array(segments)) => segments,
            Some(_) => return Err(data_err(format!("{prefix}.segments"), "must be an array")),
            None => {
                return Err(data_err(
                    format!("{prefix}.segments"),
                    "required array field is missing",
                ));
            }
        };
        if segments.is_empty() {
            return Err(data_err(
                format!("{prefix}.segments"),
                "must contain at least one segment",
            ));
        }

        for (j, seg) in segments.iter().enumerate() {
            let seg_prefix = format!("{prefix}.segments[{j}]");
            let seg = as_object(seg, &seg_prefix, data_err)?;
            reject_unknown_fields(seg, &["label", "value"], &seg_prefix, data_err)?;

            match seg.get("label") {
                Some(Value::String(_)) => {}
                Some(_) => {
                    return Err(data_err(format!("{seg_prefix}.label"), "must be a string"));
                }
                None => {
                    return Err(data_err(
                        format!("{seg_prefix}.label"),
                        "required string field is missing",
                    ));
                }
            }

            match seg.get("value").and_then(Value::as_f64) {
                Some(v) if v >= 0.0 => {}
                Some(v) => {
                    return Err(data_err(
                        format!("{seg_prefix}.value"),
                        format!("must be >= 0, got {v}"),
                    ));
                }
                None => {
                    return Err(data_err(
                        format!("{seg_prefix}.value"),
                        "must be a number >= 0",
                    ));
                }
            }
        }
    }

    Ok(())
}

/// Checks a parsed value against the style-config schema.
pub fn validate_style_config(value: &Value) -> Result<()> {
    let obj = as_object(value, "$", style_err)?;
    reject_unknown_fields(obj, &["colors"], "", style_err)?;

    let colors = match obj.get("colors") {
        Some(Value::Array(colors)) => colors,
        Some(_) => return Err(style_err("colors", "must be an array")),
        None => return Err(style_err("colors", "required array field is missing")),
    };

    for (i, mapping) in colors.iter().enumerate() {
        let prefix = format!("colors[{i}]");
        let mapping = as_object(mapping, &prefix, style_err)?;
        reject_unknown_fields(mapping, &["label", "color"], &prefix, style_err)?;

        match mapping.get("label") {
            Some(Value::String(_)) => {}
            Some(_) => return Err(style_err(format!("{prefix}.label"), "must be a string")),
            None => {
                return Err(style_err(
                    format!("{prefix}.label"),
                    "required string field is missing",
                ));
            }
        }

        match mapping.get("color") {
            Some(Value::String(color)) if is_hex_color(color) => {}
            Some(Value::String(color)) => {
                return Err(style_err(
                    format!("{prefix}.color"),
                    format!("must match `#RRGGBB` (got `{color}`)"),
                ));
            }
            Some(_) => return Err(style_err(format!("{prefix}.color"), "must be a string")),
            None => {
                return Err(style_err(
                    format!("{prefix}.color"),
                    "required string field is missing",
                ));
            }
        }
    }

    Ok(())
}

fn is_hex_color(s: &str) -> bool {
    match s.strip_prefix('#') {
        Some(hex) => hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit()),
        None => false,
    }
}

/// Validates and narrows a parsed value into typed chart data.
pub fn band_data_from_value(value: &Value) -> Result<BandData> {
    validate_band_data(value)?;
    serde_json::from_value(value.clone()).map_err(|e| data_err("$", e.to_string()))
}

/// Validates and narrows a parsed value into a typed style config.
pub fn style_config_from_value(value: &Value) -> Result<StyleConfig> {
    validate_style_config(value)?;
    serde_json::from_value(value.clone()).map_err(|e| style_err("$", e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data_err_message(value: Value) -> String {
        validate_band_data(&value).unwrap_err().to_string()
    }

    fn style_err_message(value: Value) -> String {
        validate_style_config(&value).unwrap_err().to_string()
    }

    #[test]
    fn accepts_minimal_chart_data() {
        let value = json!({
            "rows": [
                { "name": "2024", "segments": [{ "label": "X", "value": 1 }] }
            ]
        });
        validate_band_data(&value).unwrap();
        let data = band_data_from_value(&value).unwrap();
        assert_eq!(data.title, None);
        assert_eq!(data.rows[0].segments[0].label, "X");
    }

    #[test]
    fn accepts_title_and_unit() {
        let value = json!({
            "title": "Sales",
            "unit": "M",
            "rows": [
                { "name": "2024", "segments": [{ "label": "X", "value": 0.5 }] }
            ]
        });
        let data = band_data_from_value(&value).unwrap();
        assert_eq!(data.title.as_deref(), Some("Sales"));
        assert_eq!(data.unit.as_deref(), Some("M"));
    }

    #[test]
    fn rejects_non_object_root() {
        assert!(data_err_message(json!(null)).contains("$"));
        assert!(data_err_message(json!([1, 2])).contains("non-null object"));
    }

    #[test]
    fn rejects_non_string_title_and_unit() {
        let msg = data_err_message(json!({ "title": 3, "rows": [] }));
        assert!(msg.contains("title"), "{msg}");

        let msg = data_err_message(json!({ "unit": [], "rows": [] }));
        assert!(msg.contains("unit"), "{msg}");
    }

    #[test]
    fn rejects_missing_and_empty_rows() {
        let msg = data_err_message(json!({}));
        assert!(msg.contains("rows"), "{msg}");

        let msg = data_err_message(json!({ "rows": [] }));
        assert!(msg.contains("at least one row"), "{msg}");

        let msg = data_err_message(json!({ "rows": "nope" }));
        assert!(msg.contains("rows") && msg.contains("array"), "{msg}");
    }

    #[test]
    fn rejects_row_violations_with_indexed_paths() {
        let msg = data_err_message(json!({ "rows": [ "nope" ] }));
        assert!(msg.contains("rows[0]"), "{msg}");

        let msg = data_err_message(json!({
            "rows": [
                { "name": "a", "segments": [{ "label": "X", "value": 1 }] },
                { "segments": [{ "label": "X", "value": 1 }] }
            ]
        }));
        assert!(msg.contains("rows[1].name"), "{msg}");

        let msg = data_err_message(json!({ "rows": [ { "name": "a" } ] }));
        assert!(msg.contains("rows[0].segments"), "{msg}");

        let msg = data_err_message(json!({ "rows": [ { "name": "a", "segments": [] } ] }));
        assert!(msg.contains("at least one segment"), "{msg}");
    }

    #[test]
    fn rejects_segment_violations_with_indexed_paths() {
        let msg = data_err_message(json!({
            "rows": [
                { "name": "a", "segments": [{ "label": "X", "value": 1 }, { "value": 2 }] }
            ]
        }));
        assert!(msg.contains("rows[0].segments[1].label"), "{msg}");

        let msg = data_err_message(json!({
            "rows": [
                { "name": "a", "segments": [{ "label": "X", "value": "three" }] }
            ]
        }));
        assert!(msg.contains("rows[0].segments[0].value"), "{msg}");

        let msg = data_err_message(json!({
            "rows": [
                { "name": "a", "segments": [{ "label": "X" }] }
            ]
        }));
        assert!(msg.contains("rows[0].segments[0].value"), "{msg}");
    }

    #[test]
    fn rejects_negative_segment_value() {
        let msg = data_err_message(json!({
            "rows": [
                { "name": "a", "segments": [{ "label": "X", "value": -1.5 }] }
            ]
        }));
        assert!(msg.contains("rows[0].segments[0].value"), "{msg}");
        assert!(msg.contains(">= 0"), "{msg}");
    }

    #[test]
    fn rejects_unknown_fields_at_every_level() {
        let msg = data_err_message(json!({
            "rows": [{ "name": "a", "segments": [{ "label": "X", "value": 1 }] }],
            "subtitle": "extra"
        }));
        assert!(msg.contains("unknown field `subtitle`"), "{msg}");

        let msg = data_err_message(json!({
            "rows": [{ "name": "a", "color": "red", "segments": [{ "label": "X", "value": 1 }] }]
        }));
        assert!(msg.contains("rows[0].color"), "{msg}");

        let msg = data_err_message(json!({
            "rows": [{ "name": "a", "segments": [{ "label": "X", "value": 1, "width": 3 }] }]
        }));
        assert!(msg.contains("rows[0].segments[0].width"), "{msg}");
    }

    #[test]
    fn accepts_style_with_empty_colors() {
        validate_style_config(&json!({ "colors": [] })).unwrap();
        let style = style_config_from_value(&json!({ "colors": [] })).unwrap();
        assert!(style.colors.is_empty());
    }

    #[test]
    fn rejects_style_violations() {
        let msg = style_err_message(json!(null));
        assert!(msg.contains("$"), "{msg}");

        let msg = style_err_message(json!({}));
        assert!(msg.contains("colors"), "{msg}");

        let msg = style_err_message(json!({ "colors": [{ "color": "#aabbcc" }] }));
        assert!(msg.contains("colors[0].label"), "{msg}");

        let msg = style_err_message(json!({ "colors": [{ "label": "A" }] }));
        assert!(msg.contains("colors[0].color"), "{msg}");

        let msg = style_err_message(json!({ "colors": [], "theme": "dark" }));
        assert!(msg.contains("unknown field `theme`"), "{msg}");
    }

    #[test]
    fn rejects_malformed_color_tokens() {
        for bad in ["#GGG", "aabbcc", "#aabbc", "#aabbccdd", "#ggHHii"] {
            let msg = style_err_message(json!({ "colors": [{ "label": "A", "color": bad }] }));
            assert!(msg.contains("colors[0].color"), "{bad}: {msg}");
        }
        validate_style_config(&json!({ "colors": [{ "label": "A", "color": "#AaBbCc" }] }))
            .unwrap();
    }
}
