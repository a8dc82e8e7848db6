//! Metric computation error types

use thiserror::Error;

/// Errors raised by confusion-matrix accumulation and metric derivation
///
/// Accumulation bounds-checks its inputs so a stray label surfaces at the
/// call site instead of silently corrupting counts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MetricsError {
    /// Predicted and ground-truth inputs differ in length
    #[error("Predicted and ground-truth lengths differ: {predicted} vs {ground_truth}")]
    LengthMismatch {
        predicted: usize,
        ground_truth: usize,
    },

    /// Predicted and ground-truth label arrays differ in shape
    #[error("Predicted and ground-truth shapes differ: {predicted:?} vs {ground_truth:?}")]
    ShapeMismatch {
        predicted: Vec<usize>,
        ground_truth: Vec<usize>,
    },

    /// A label value falls outside `[0, num_labels)`
    #[error("Label {label} out of range for {num_labels} classes")]
    LabelOutOfRange { label: usize, num_labels: usize },

    /// Two matrices of different dimension cannot be merged
    #[error("Cannot merge confusion matrices of dimension {left} and {right}")]
    DimensionMismatch { left: usize, right: usize },

    /// Label names do not match the matrix dimension
    #[error("Got {names} label names for a {num_labels}-class confusion matrix")]
    LabelCountMismatch { names: usize, num_labels: usize },
}
