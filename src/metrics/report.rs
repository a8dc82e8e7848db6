//! Precision/recall/F1 derivation from a confusion-matrix snapshot

use super::confusion::ConfusionMatrix;
use super::error::MetricsError;

/// Default divisor floor guarding against division by zero
pub const DEFAULT_EPS: f64 = 1e-6;

/// Per-class precision/recall/F1 with its human-readable label
#[derive(Clone, Debug)]
pub struct ClassMetrics {
    pub name: String,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    /// Ground-truth instance count (row sum)
    pub support: f64,
}

/// Aggregate metrics derived from one confusion-matrix snapshot
///
/// Averages are weighted by class support. `avg_f1` is combined from the
/// averaged precision and recall rather than averaging per-class F1 scores,
/// matching a micro-averaged-then-combined metric.
#[derive(Clone, Debug)]
pub struct MetricsReport {
    pub avg_precision: f64,
    pub avg_recall: f64,
    pub avg_f1: f64,
    /// Per-class metrics in `label_names` order
    pub classes: Vec<ClassMetrics>,
}

impl MetricsReport {
    /// Derive metrics with the default epsilon floor
    ///
    /// # Errors
    /// Returns [`MetricsError::LabelCountMismatch`] when `label_names` does
    /// not match the matrix dimension.
    pub fn from_confusion_matrix(
        cm: &ConfusionMatrix,
        label_names: &[&str],
    ) -> Result<Self, MetricsError> {
        Self::from_confusion_matrix_with_eps(cm, label_names, DEFAULT_EPS)
    }

    /// Derive metrics with an explicit epsilon floor
    ///
    /// Per-class ratios divide by `max(denominator, eps)`. Class weights are
    /// `gt_count / total`, defined as 0 when the matrix is empty so an
    /// all-zero matrix yields all-zero averages instead of NaN.
    pub fn from_confusion_matrix_with_eps(
        cm: &ConfusionMatrix,
        label_names: &[&str],
        eps: f64,
    ) -> Result<Self, MetricsError> {
        if label_names.len() != cm.num_labels() {
            return Err(MetricsError::LabelCountMismatch {
                names: label_names.len(),
                num_labels: cm.num_labels(),
            });
        }

        let total = cm.total();
        let mut classes = Vec::with_capacity(label_names.len());
        let mut avg_precision = 0.0;
        let mut avg_recall = 0.0;

        for (i, &name) in label_names.iter().enumerate() {
            let gt_count = cm.row_sum(i);
            let pred_count = cm.col_sum(i);
            let true_pos = cm.true_positives(i);

            let precision = true_pos / pred_count.max(eps);
            let recall = true_pos / gt_count.max(eps);
            let f1 = 2.0 * precision * recall / (precision + recall).max(eps);

            let weight = if total > 0.0 { gt_count / total } else { 0.0 };
            avg_precision += weight * precision;
            avg_recall += weight * recall;

            classes.push(ClassMetrics {
                name: name.to_string(),
                precision,
                recall,
                f1,
                support: gt_count,
            });
        }

        let avg_f1 = 2.0 * avg_precision * avg_recall / (avg_precision + avg_recall).max(eps);

        Ok(Self {
            avg_precision,
            avg_recall,
            avg_f1,
            classes,
        })
    }

    /// Flatten into ordered `(key, value)` pairs
    ///
    /// Keys are `avg_precision`, `avg_recall`, `avg_f1`, then
    /// `{name}_precision`, `{name}_recall`, `{name}_f1` per class in label
    /// order.
    pub fn entries(&self) -> Vec<(String, f64)> {
        let mut entries = vec![
            ("avg_precision".to_string(), self.avg_precision),
            ("avg_recall".to_string(), self.avg_recall),
            ("avg_f1".to_string(), self.avg_f1),
        ];
        for class in &self.classes {
            entries.push((format!("{}_precision", class.name), class.precision));
            entries.push((format!("{}_recall", class.name), class.recall));
            entries.push((format!("{}_f1", class.name), class.f1));
        }
        entries
    }

    /// Render an aligned per-class table with the weighted-average row
    pub fn text_report(&self) -> String {
        let mut report = String::new();

        report.push_str(&format!(
            "{:>12} {:>10} {:>10} {:>10} {:>10}\n",
            "", "precision", "recall", "f1-score", "support"
        ));
        report.push_str(&"-".repeat(56));
        report.push('\n');

        for class in &self.classes {
            report.push_str(&format!(
                "{:>12} {:>10.2} {:>10.2} {:>10.2} {:>10.0}\n",
                class.name, class.precision, class.recall, class.f1, class.support
            ));
        }

        report.push_str(&"-".repeat(56));
        report.push('\n');

        let total_support: f64 = self.classes.iter().map(|c| c.support).sum();
        report.push_str(&format!(
            "{:>12} {:>10.2} {:>10.2} {:>10.2} {:>10.0}\n",
            "weighted avg", self.avg_precision, self.avg_recall, self.avg_f1, total_support
        ));

        report
    }
}
