//! Layout engine: turns validated chart data plus a color map into pixel
//! geometry. Pure; all layout constants are fixed at build time.

use crate::model::{BandChartLayout, LegendItemLayout, RowLayout, SegmentLayout, TitleLayout};
use obi_core::{BandData, ColorMap};

pub const PADDING: f64 = 40.0;
pub const BAR_HEIGHT: f64 = 36.0;
pub const BAR_GAP: f64 = 16.0;
pub const LABEL_WIDTH: f64 = 80.0;
pub const CHART_WIDTH: f64 = 500.0;
pub const LEGEND_ITEM_WIDTH: f64 = 100.0;
pub const LEGEND_HEIGHT: f64 = 30.0;
pub const TITLE_HEIGHT: f64 = 36.0;

/// Segments narrower than this carry no in-segment value label.
pub const VALUE_LABEL_MIN_WIDTH: f64 = 30.0;

/// Neutral fill for labels missing from the color map. Incomplete overrides
/// are not an error; the chart still renders usefully.
pub const FALLBACK_COLOR: &str = "#94a3b8";

fn row_total(row: &obi_core::Row) -> f64 {
    row.segments.iter().map(|s| s.value).sum()
}

fn fill_for(colors: &ColorMap, label: &str) -> String {
    colors
        .get(label)
        .cloned()
        .unwrap_or_else(|| FALLBACK_COLOR.to_string())
}

/// Computes the full chart geometry for validated data and a color map.
///
/// The maximum row total maps to the full plot width; other rows scale
/// proportionally. When every row total is 0 all segments get width 0 so no
/// non-finite number can reach the output.
pub fn layout_band_chart(data: &BandData, colors: &ColorMap) -> BandChartLayout {
    // Distinct labels in first-appearance (row-major) order drive the legend.
    let mut legend_labels: Vec<&str> = Vec::new();
    for row in &data.rows {
        for seg in &row.segments {
            if !legend_labels.contains(&seg.label.as_str()) {
                legend_labels.push(&seg.label);
            }
        }
    }

    let max_total = data.rows.iter().map(row_total).fold(0.0_f64, f64::max);

    let title_area_height = if data.title.is_some() {
        TITLE_HEIGHT
    } else {
        0.0
    };
    let bars_area_height = data.rows.len() as f64 * BAR_HEIGHT
        + data.rows.len().saturating_sub(1) as f64 * BAR_GAP;
    let items_per_row = ((LABEL_WIDTH + CHART_WIDTH) / LEGEND_ITEM_WIDTH).floor();
    let legend_rows = (legend_labels.len() as f64 / items_per_row).ceil();

    let width = PADDING + LABEL_WIDTH + CHART_WIDTH + PADDING;
    let height =
        PADDING + title_area_height + bars_area_height + PADDING + legend_rows * LEGEND_HEIGHT
            + PADDING;

    let mut y_offset = PADDING;

    let title = data.title.as_ref().map(|title| {
        let text = match &data.unit {
            Some(unit) => format!("{title}（{unit}）"),
            None => title.clone(),
        };
        let t = TitleLayout {
            text,
            x: width / 2.0,
            y: y_offset + 4.0,
        };
        y_offset += TITLE_HEIGHT;
        t
    });

    let mut rows: Vec<RowLayout> = Vec::new();
    for row in &data.rows {
        let total = row_total(row);
        let text_y = y_offset + BAR_HEIGHT / 2.0 + 5.0;

        let mut x_offset = PADDING + LABEL_WIDTH;
        let mut segments: Vec<SegmentLayout> = Vec::new();
        for seg in &row.segments {
            let seg_width = if max_total > 0.0 {
                seg.value / max_total * CHART_WIDTH
            } else {
                0.0
            };
            segments.push(SegmentLayout {
                label: seg.label.clone(),
                value: seg.value,
                x: x_offset,
                y: y_offset,
                width: seg_width,
                height: BAR_HEIGHT,
                fill: fill_for(colors, &seg.label),
                show_value: seg_width > VALUE_LABEL_MIN_WIDTH,
                value_x: x_offset + seg_width / 2.0,
                value_y: text_y,
            });
            x_offset += seg_width;
        }

        rows.push(RowLayout {
            name: row.name.clone(),
            label_x: PADDING + LABEL_WIDTH - 8.0,
            label_y: text_y,
            y: y_offset,
            segments,
            total,
            total_x: x_offset + 6.0,
            total_y: text_y,
        });
        y_offset += BAR_HEIGHT + BAR_GAP;
    }

    // Legend block starts half a padding below the last bar.
    y_offset += PADDING / 2.0;
    let legend_start_x = PADDING + LABEL_WIDTH;
    let mut lx = legend_start_x;
    let mut ly = y_offset;
    let mut legend_items: Vec<LegendItemLayout> = Vec::new();
    for label in legend_labels {
        if lx + LEGEND_ITEM_WIDTH > width - PADDING {
            lx = legend_start_x;
            ly += LEGEND_HEIGHT;
        }
        legend_items.push(LegendItemLayout {
            label: label.to_string(),
            fill: fill_for(colors, label),
            x: lx,
            y: ly,
        });
        lx += LEGEND_ITEM_WIDTH;
    }

    tracing::debug!(
        rows = rows.len(),
        legend = legend_items.len(),
        width,
        height,
        "band chart layout computed"
    );

    BandChartLayout {
        width,
        height,
        title,
        rows,
        legend_items,
    }
}
