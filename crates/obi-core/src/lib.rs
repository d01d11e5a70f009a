#![forbid(unsafe_code)]

//! Band-chart core: data model, schema validation, color assignment (headless).
//!
//! Design goals:
//! - pure, side-effect-free functions usable from both a CLI and a browser editor
//! - deterministic outputs (stable label hashing, ordered color maps)
//! - precise, field-addressed validation errors

pub mod color;
pub mod error;
pub mod model;
pub mod validate;

pub use color::{ColorMap, build_color_map, hash_label};
pub use error::{Error, Result};
pub use model::{BandData, ColorMapping, Row, Segment, StyleConfig};
pub use validate::{
    band_data_from_value, style_config_from_value, validate_band_data, validate_style_config,
};
