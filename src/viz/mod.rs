//! Visualization helpers
//!
//! Currently just color resolution: mapping class names in a rendering
//! config to RGB triples, or drawing a random color when none is given.

mod color;

pub use color::{resolve_color, ColorError, Rgb};
