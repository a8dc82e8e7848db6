//! Transform schema, pipeline application, and serialized-config validation

use ndarray::{ArrayD, Axis};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::minmax::MinMaxNormalize;

/// Mirror the image left-right (reverses the width axis)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HorizontalFlip {
    pub p: f64,
}

impl Default for HorizontalFlip {
    fn default() -> Self {
        Self { p: 0.5 }
    }
}

impl HorizontalFlip {
    pub fn apply(&self, image: &ArrayD<f32>) -> ArrayD<f32> {
        flip_axis(image, Axis(1))
    }
}

/// Mirror the image top-bottom (reverses the height axis)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerticalFlip {
    pub p: f64,
}

impl Default for VerticalFlip {
    fn default() -> Self {
        Self { p: 0.5 }
    }
}

impl VerticalFlip {
    pub fn apply(&self, image: &ArrayD<f32>) -> ArrayD<f32> {
        flip_axis(image, Axis(0))
    }
}

fn flip_axis(image: &ArrayD<f32>, axis: Axis) -> ArrayD<f32> {
    assert!(image.ndim() >= 2, "expected a rank >= 2 image");
    let mut out = image.clone();
    out.invert_axis(axis);
    out
}

/// One step of an augmentation pipeline
///
/// Serializes internally tagged, so a pipeline written by
/// `serde_json::to_value` reads back with `serde_json::from_value`:
///
/// ```json
/// { "name": "min_max_normalize", "min_val": 0.0, "max_val": 1.0, "p": 1.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum Transform {
    MinMaxNormalize(MinMaxNormalize),
    HorizontalFlip(HorizontalFlip),
    VerticalFlip(VerticalFlip),
}

impl Transform {
    /// Application probability rolled per pipeline pass
    pub fn probability(&self) -> f64 {
        match self {
            Transform::MinMaxNormalize(t) => t.p,
            Transform::HorizontalFlip(t) => t.p,
            Transform::VerticalFlip(t) => t.p,
        }
    }

    /// Apply unconditionally, ignoring the probability
    pub fn apply(&self, image: &ArrayD<f32>) -> ArrayD<f32> {
        match self {
            Transform::MinMaxNormalize(t) => t.apply(image),
            Transform::HorizontalFlip(t) => t.apply(image),
            Transform::VerticalFlip(t) => t.apply(image),
        }
    }
}

/// Ordered augmentation pipeline
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pipeline {
    pub transforms: Vec<Transform>,
}

impl Pipeline {
    pub fn new(transforms: Vec<Transform>) -> Self {
        Self { transforms }
    }

    /// Run the pipeline, rolling each transform's probability independently
    pub fn apply<R: Rng>(&self, rng: &mut R, image: ArrayD<f32>) -> ArrayD<f32> {
        let mut image = image;
        for transform in &self.transforms {
            if rng.random::<f64>() < transform.probability() {
                image = transform.apply(&image);
            }
        }
        image
    }
}

/// Validate a serialized augmentation pipeline
///
/// `None` passes. `Some` must deserialize against the [`Pipeline`] schema;
/// the value itself is never transformed, so a successful call leaves the
/// caller's config exactly as given.
///
/// # Errors
/// [`ConfigError::InvalidPipeline`] with a remediation hint when the value
/// does not match the schema.
pub fn validate_pipeline(serialized: Option<&serde_json::Value>) -> Result<(), ConfigError> {
    if let Some(value) = serialized {
        serde_json::from_value::<Pipeline>(value.clone()).map_err(|e| {
            ConfigError::InvalidPipeline {
                reason: e.to_string(),
            }
        })?;
    }
    Ok(())
}
