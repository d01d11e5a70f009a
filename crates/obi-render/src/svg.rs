//! SVG serialization of a computed band-chart layout.

use crate::model::BandChartLayout;
use std::fmt::Write as _;

const FONT_FAMILY: &str = "sans-serif";

fn fmt(v: f64) -> String {
    // Round-trippable decimal form (similar to JS `Number#toString()`), but
    // avoid `-0` and tiny float noise from our own calculations.
    if !v.is_finite() {
        return "0".to_string();
    }

    let mut v = if v.abs() < 1e-9 { 0.0 } else { v };
    let nearest = v.round();
    if (v - nearest).abs() < 1e-6 {
        v = nearest;
    }
    let s = v.to_string();
    if s == "-0" { "0".to_string() } else { s }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Serializes the layout into a self-contained SVG document.
///
/// All user-supplied strings are escaped; fill colors are escaped too, even
/// though validated style tokens cannot contain markup.
pub fn render_band_chart_svg(layout: &BandChartLayout) -> String {
    let mut out = String::new();
    let width = fmt(layout.width);
    let height = fmt(layout.height);

    let _ = writeln!(
        &mut out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    let _ = writeln!(
        &mut out,
        r#"<rect width="{width}" height="{height}" fill="white"/>"#
    );

    if let Some(title) = &layout.title {
        let _ = writeln!(
            &mut out,
            r##"<text x="{}" y="{}" text-anchor="middle" font-size="16" font-weight="bold" font-family="{FONT_FAMILY}" fill="#1f2937">{}</text>"##,
            fmt(title.x),
            fmt(title.y),
            escape_xml(&title.text)
        );
    }

    for row in &layout.rows {
        let _ = writeln!(
            &mut out,
            r##"<text x="{}" y="{}" text-anchor="end" font-size="13" font-family="{FONT_FAMILY}" fill="#374151">{}</text>"##,
            fmt(row.label_x),
            fmt(row.label_y),
            escape_xml(&row.name)
        );
        for seg in &row.segments {
            let _ = writeln!(
                &mut out,
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" rx="2"/>"#,
                fmt(seg.x),
                fmt(seg.y),
                fmt(seg.width),
                fmt(seg.height),
                escape_xml(&seg.fill)
            );
            if seg.show_value {
                let _ = writeln!(
                    &mut out,
                    r#"<text x="{}" y="{}" text-anchor="middle" font-size="12" font-family="{FONT_FAMILY}" fill="white">{}</text>"#,
                    fmt(seg.value_x),
                    fmt(seg.value_y),
                    fmt(seg.value)
                );
            }
        }
        let _ = writeln!(
            &mut out,
            r##"<text x="{}" y="{}" text-anchor="start" font-size="12" font-family="{FONT_FAMILY}" fill="#6b7280">{}</text>"##,
            fmt(row.total_x),
            fmt(row.total_y),
            fmt(row.total)
        );
    }

    for item in &layout.legend_items {
        let _ = writeln!(
            &mut out,
            r#"<rect x="{}" y="{}" width="14" height="14" fill="{}" rx="2"/>"#,
            fmt(item.x),
            fmt(item.y),
            escape_xml(&item.fill)
        );
        let _ = writeln!(
            &mut out,
            r##"<text x="{}" y="{}" font-size="12" font-family="{FONT_FAMILY}" fill="#374151">{}</text>"##,
            fmt(item.x + 20.0),
            fmt(item.y + 12.0),
            escape_xml(&item.label)
        );
    }

    out.push_str("</svg>\n");
    out
}
