//! Classification metrics from confusion matrices
//!
//! Provides the evaluation-epoch workflow:
//!
//! - `ConfusionMatrix`: accumulate predicted/ground-truth label pairs,
//!   batch by batch, into a square count table
//! - `MetricsReport`: derive per-class and support-weighted
//!   precision/recall/F1 from a matrix snapshot
//!
//! Accumulation is an elementwise sum, so per-worker partial matrices can be
//! combined with [`ConfusionMatrix::merge`] after the fact.

mod confusion;
mod error;
mod report;


pub use confusion::ConfusionMatrix;
pub use error::MetricsError;
pub use report::{ClassMetrics, MetricsReport, DEFAULT_EPS};

/// Compute a confusion matrix from predictions and ground truth
///
/// # Arguments
/// * `predicted` - Predicted class labels
/// * `ground_truth` - Ground truth class labels, same length
/// * `num_labels` - Total number of classes
///
/// # Errors
/// Returns [`MetricsError`] if the slices differ in length or any label
/// falls outside `[0, num_labels)`.
pub fn confusion_matrix(
    predicted: &[usize],
    ground_truth: &[usize],
    num_labels: usize,
) -> Result<ConfusionMatrix, MetricsError> {
    let mut cm = ConfusionMatrix::new(num_labels);
    cm.accumulate(predicted, ground_truth)?;
    Ok(cm)
}
