//! Min-max normalization transform

use ndarray::{ArrayD, ArrayViewD, Axis};
use serde::{Deserialize, Serialize};

/// Rescales each channel linearly so its minimum maps to `min_val` and its
/// maximum to `max_val`, then clips into `[min_val, max_val]` to correct
/// rounding error.
///
/// Rank 1 and 2 images are normalized directly; rank 3 images are treated as
/// channel-last and each channel is normalized independently, then restacked
/// in the original channel order. A constant channel maps to `min_val`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinMaxNormalize {
    pub min_val: f32,
    pub max_val: f32,
    /// Application probability when run inside a pipeline
    pub p: f64,
}

impl Default for MinMaxNormalize {
    fn default() -> Self {
        Self {
            min_val: 0.0,
            max_val: 1.0,
            p: 1.0,
        }
    }
}

impl MinMaxNormalize {
    pub fn new(min_val: f32, max_val: f32) -> Self {
        Self {
            min_val,
            max_val,
            p: 1.0,
        }
    }

    /// Normalize an image
    ///
    /// # Panics
    /// Panics on images of rank greater than 3.
    pub fn apply(&self, image: &ArrayD<f32>) -> ArrayD<f32> {
        if image.ndim() <= 2 {
            return self.apply_on_channel(image.view());
        }

        assert_eq!(image.ndim(), 3, "expected a rank <= 3 channel-last image");

        let channel_axis = Axis(2);
        let channels: Vec<ArrayD<f32>> = (0..image.len_of(channel_axis))
            .map(|c| self.apply_on_channel(image.index_axis(channel_axis, c)))
            .collect();
        let views: Vec<ArrayViewD<'_, f32>> = channels.iter().map(|c| c.view()).collect();
        ndarray::stack(channel_axis, &views).expect("channels share the input's shape")
    }

    fn apply_on_channel(&self, channel: ArrayViewD<'_, f32>) -> ArrayD<f32> {
        let mut lo = f32::INFINITY;
        let mut hi = f32::NEG_INFINITY;
        for &v in channel.iter() {
            lo = lo.min(v);
            hi = hi.max(v);
        }

        // Empty or constant channel: no range to stretch
        if !(hi > lo) {
            return ArrayD::from_elem(channel.raw_dim(), self.min_val);
        }

        let scale = (self.max_val - self.min_val) / (hi - lo);
        channel.mapv(|v| (self.min_val + (v - lo) * scale).clamp(self.min_val, self.max_val))
    }
}
