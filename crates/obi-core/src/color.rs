//! Deterministic label→color assignment.

use crate::model::{BandData, StyleConfig};

pub use crate::model::ColorMap;

/// Traditional Japanese colors, in palette order.
pub const WAFU_COLORS: [&str; 12] = [
    "#C53D43", // 紅色 (べにいろ)
    "#2E4F8F", // 瑠璃紺 (るりこん)
    "#68975C", // 若竹色 (わかたけいろ)
    "#E8B647", // 山吹色 (やまぶきいろ)
    "#7A4171", // 二藍 (ふたあい)
    "#2D6D6B", // 青碧 (せいへき)
    "#C47756", // 柿色 (かきいろ)
    "#5B7E91", // 藍鼠 (あいねず)
    "#A8497A", // 牡丹色 (ぼたんいろ)
    "#8D6449", // 胡桃色 (くるみいろ)
    "#4D6E50", // 千歳緑 (ちとせみどり)
    "#D4A168", // 芥子色 (からしいろ)
];

/// Hashes a label to a stable non-negative integer.
///
/// Accumulates `hash * 31 + unit` over the label's UTF-16 code units with
/// 32-bit signed wrapping, then takes the absolute value. The result depends
/// only on the label itself, so a label keeps its palette color across
/// datasets, processes and machines. The empty string hashes to 0.
pub fn hash_label(label: &str) -> u32 {
    let mut hash: i32 = 0;
    for unit in label.encode_utf16() {
        hash = hash.wrapping_mul(31).wrapping_add(i32::from(unit));
    }
    hash.unsigned_abs()
}

/// Builds the label→color mapping for one render call.
///
/// Every distinct segment label, scanned in row order then segment order,
/// gets `WAFU_COLORS[hash(label) % len]` on first appearance. Style overrides
/// are applied afterwards in sequence order; when a label repeats in the
/// overrides the later entry wins (observed behavior of sequential overwrite,
/// not a stability promise).
pub fn build_color_map(data: &BandData, style: &StyleConfig) -> ColorMap {
    let mut colors = ColorMap::new();
    for row in &data.rows {
        for seg in &row.segments {
            if !colors.contains_key(&seg.label) {
                let idx = hash_label(&seg.label) as usize % WAFU_COLORS.len();
                colors.insert(seg.label.clone(), WAFU_COLORS[idx].to_string());
            }
        }
    }
    for mapping in &style.colors {
        colors.insert(mapping.label.clone(), mapping.color.clone());
    }
    tracing::debug!(labels = colors.len(), overrides = style.colors.len(), "built color map");
    colors
}
