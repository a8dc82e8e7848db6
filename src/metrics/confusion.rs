//! Confusion matrix for multi-class classification

use std::fmt;

use ndarray::{Array2, ArrayD};

use super::error::MetricsError;

/// Confusion matrix for multi-class classification
///
/// Element `[i][j]` counts samples with true label `i` predicted as `j`.
/// Counts are stored as `f64` so the derived ratios divide without casts.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfusionMatrix {
    /// counts[[true_label, predicted_label]]
    counts: Array2<f64>,
    num_labels: usize,
}

impl ConfusionMatrix {
    /// Create an all-zero matrix for the given number of classes
    pub fn new(num_labels: usize) -> Self {
        Self {
            counts: Array2::zeros((num_labels, num_labels)),
            num_labels,
        }
    }

    /// Number of classes
    pub fn num_labels(&self) -> usize {
        self.num_labels
    }

    /// Count at `[true_label][predicted_label]`
    pub fn get(&self, true_label: usize, predicted_label: usize) -> f64 {
        self.counts[[true_label, predicted_label]]
    }

    /// Accumulate one batch of predicted/ground-truth label pairs
    ///
    /// Every position contributes one count to `[ground_truth][predicted]`.
    /// Labels are bounds-checked before any cell is touched, so a failed call
    /// leaves the matrix unchanged.
    pub fn accumulate(
        &mut self,
        predicted: &[usize],
        ground_truth: &[usize],
    ) -> Result<(), MetricsError> {
        if predicted.len() != ground_truth.len() {
            return Err(MetricsError::LengthMismatch {
                predicted: predicted.len(),
                ground_truth: ground_truth.len(),
            });
        }
        for &label in predicted.iter().chain(ground_truth.iter()) {
            if label >= self.num_labels {
                return Err(MetricsError::LabelOutOfRange {
                    label,
                    num_labels: self.num_labels,
                });
            }
        }

        for (&pred, &truth) in predicted.iter().zip(ground_truth.iter()) {
            self.counts[[truth, pred]] += 1.0;
        }
        Ok(())
    }

    /// Accumulate label arrays of arbitrary matching shape
    ///
    /// Covers dense outputs such as per-pixel segmentation labels: both
    /// arrays are walked elementwise and every element contributes.
    pub fn accumulate_array(
        &mut self,
        predicted: &ArrayD<usize>,
        ground_truth: &ArrayD<usize>,
    ) -> Result<(), MetricsError> {
        if predicted.shape() != ground_truth.shape() {
            return Err(MetricsError::ShapeMismatch {
                predicted: predicted.shape().to_vec(),
                ground_truth: ground_truth.shape().to_vec(),
            });
        }
        for &label in predicted.iter().chain(ground_truth.iter()) {
            if label >= self.num_labels {
                return Err(MetricsError::LabelOutOfRange {
                    label,
                    num_labels: self.num_labels,
                });
            }
        }

        for (&pred, &truth) in predicted.iter().zip(ground_truth.iter()) {
            self.counts[[truth, pred]] += 1.0;
        }
        Ok(())
    }

    /// Add another matrix's counts into this one
    ///
    /// Accumulation is elementwise addition, so merging per-worker partial
    /// matrices is equivalent to accumulating the concatenated batches.
    pub fn merge(&mut self, other: &ConfusionMatrix) -> Result<(), MetricsError> {
        if self.num_labels != other.num_labels {
            return Err(MetricsError::DimensionMismatch {
                left: self.num_labels,
                right: other.num_labels,
            });
        }
        self.counts += &other.counts;
        Ok(())
    }

    /// Zero all counts for the next evaluation epoch
    pub fn reset(&mut self) {
        self.counts.fill(0.0);
    }

    /// Total ground-truth instances of a class (row sum)
    pub fn row_sum(&self, true_label: usize) -> f64 {
        self.counts.row(true_label).sum()
    }

    /// Total predicted instances of a class (column sum)
    pub fn col_sum(&self, predicted_label: usize) -> f64 {
        self.counts.column(predicted_label).sum()
    }

    /// Sum of all counts
    pub fn total(&self) -> f64 {
        self.counts.sum()
    }

    /// Diagonal count for a class
    pub fn true_positives(&self, class: usize) -> f64 {
        self.counts[[class, class]]
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Confusion Matrix:")?;

        write!(f, "      ")?;
        for j in 0..self.num_labels {
            write!(f, "{:>8} ", format!("Pred {j}"))?;
        }
        writeln!(f)?;

        for i in 0..self.num_labels {
            write!(f, "True {i}")?;
            for j in 0..self.num_labels {
                write!(f, "{:>8.0} ", self.counts[[i, j]])?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
