//! Image augmentation transforms and serialized-pipeline validation
//!
//! Transforms operate on channel-last `f32` images: rank 1 and 2 arrays are
//! a single channel, rank 3 is `(height, width, channels)`. A [`Pipeline`]
//! is an ordered list of transforms, each applied with its own probability,
//! and round-trips through serde so training configs can embed it.

mod error;
mod minmax;
mod pipeline;


pub use error::ConfigError;
pub use minmax::MinMaxNormalize;
pub use pipeline::{validate_pipeline, HorizontalFlip, Pipeline, Transform, VerticalFlip};
