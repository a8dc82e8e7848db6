//! Property tests for confusion-matrix metrics
//!
//! Ensures the derived metrics satisfy their mathematical invariants:
//! - Precision/recall/F1 bounded to [0, 1], never NaN or Infinity
//! - Perfect predictions score 1.0
//! - Accumulation is linear: merging partial matrices equals accumulating
//!   the concatenated batches

use medir::metrics::{confusion_matrix, ConfusionMatrix, MetricsReport};
use proptest::collection::vec;
use proptest::prelude::*;

const NUM_LABELS: usize = 5;
const LABEL_NAMES: [&str; NUM_LABELS] = ["a", "b", "c", "d", "e"];

/// Generate a vector of class labels in range [0, NUM_LABELS)
fn class_labels(len: std::ops::Range<usize>) -> impl Strategy<Value = Vec<usize>> {
    vec(0..NUM_LABELS, len)
}

/// Generate a prediction/ground-truth pair of equal length
fn label_pair(len: std::ops::Range<usize>) -> impl Strategy<Value = (Vec<usize>, Vec<usize>)> {
    len.prop_flat_map(|l| (vec(0..NUM_LABELS, l), vec(0..NUM_LABELS, l)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn prop_per_class_metrics_bounded(
        (predicted, ground_truth) in label_pair(1..100)
    ) {
        let cm = confusion_matrix(&predicted, &ground_truth, NUM_LABELS).unwrap();
        let report = MetricsReport::from_confusion_matrix(&cm, &LABEL_NAMES).unwrap();

        for class in &report.classes {
            for (metric, value) in [
                ("precision", class.precision),
                ("recall", class.recall),
                ("f1", class.f1),
            ] {
                prop_assert!(
                    (0.0..=1.0).contains(&value),
                    "{} {} for class {} not in [0, 1]",
                    metric, value, class.name
                );
                prop_assert!(
                    !value.is_nan() && !value.is_infinite(),
                    "{} {} for class {} is NaN or Inf",
                    metric, value, class.name
                );
            }
        }
    }

    #[test]
    fn prop_averages_bounded(
        (predicted, ground_truth) in label_pair(1..100)
    ) {
        let cm = confusion_matrix(&predicted, &ground_truth, NUM_LABELS).unwrap();
        let report = MetricsReport::from_confusion_matrix(&cm, &LABEL_NAMES).unwrap();

        for (metric, value) in [
            ("avg_precision", report.avg_precision),
            ("avg_recall", report.avg_recall),
            ("avg_f1", report.avg_f1),
        ] {
            prop_assert!(
                (0.0..=1.0).contains(&value),
                "{} {} not in [0, 1]",
                metric, value
            );
            prop_assert!(
                !value.is_nan() && !value.is_infinite(),
                "{} {} is NaN or Inf",
                metric, value
            );
        }
    }

    #[test]
    fn prop_perfect_predictions_score_one(
        labels in class_labels(1..100)
    ) {
        let cm = confusion_matrix(&labels, &labels, NUM_LABELS).unwrap();
        let report = MetricsReport::from_confusion_matrix(&cm, &LABEL_NAMES).unwrap();

        prop_assert!(
            (report.avg_precision - 1.0).abs() < 1e-6,
            "Perfect predictions should have avg_precision 1.0, got {}",
            report.avg_precision
        );
        prop_assert!(
            (report.avg_recall - 1.0).abs() < 1e-6,
            "Perfect predictions should have avg_recall 1.0, got {}",
            report.avg_recall
        );
        prop_assert!(
            (report.avg_f1 - 1.0).abs() < 1e-5,
            "Perfect predictions should have avg_f1 1.0, got {}",
            report.avg_f1
        );
    }

    #[test]
    fn prop_merge_equals_joint_accumulation(
        (pred_a, truth_a) in label_pair(1..50),
        (pred_b, truth_b) in label_pair(1..50)
    ) {
        let mut merged = confusion_matrix(&pred_a, &truth_a, NUM_LABELS).unwrap();
        let partial = confusion_matrix(&pred_b, &truth_b, NUM_LABELS).unwrap();
        merged.merge(&partial).unwrap();

        let all_pred: Vec<usize> = pred_a.iter().chain(&pred_b).copied().collect();
        let all_truth: Vec<usize> = truth_a.iter().chain(&truth_b).copied().collect();
        let joint = confusion_matrix(&all_pred, &all_truth, NUM_LABELS).unwrap();

        prop_assert_eq!(merged, joint);
    }

    #[test]
    fn prop_total_counts_every_position(
        (predicted, ground_truth) in label_pair(1..100)
    ) {
        let cm = confusion_matrix(&predicted, &ground_truth, NUM_LABELS).unwrap();
        prop_assert!((cm.total() - predicted.len() as f64).abs() < f64::EPSILON);
    }

    #[test]
    fn prop_row_and_column_sums_partition_total(
        (predicted, ground_truth) in label_pair(1..100)
    ) {
        let cm = confusion_matrix(&predicted, &ground_truth, NUM_LABELS).unwrap();

        let row_total: f64 = (0..NUM_LABELS).map(|i| cm.row_sum(i)).sum();
        let col_total: f64 = (0..NUM_LABELS).map(|i| cm.col_sum(i)).sum();
        prop_assert!((row_total - cm.total()).abs() < 1e-9);
        prop_assert!((col_total - cm.total()).abs() < 1e-9);
    }
}

#[test]
fn empty_matrix_reports_zero_averages() {
    let cm = ConfusionMatrix::new(NUM_LABELS);
    let report = MetricsReport::from_confusion_matrix(&cm, &LABEL_NAMES).unwrap();

    assert_eq!(report.avg_precision, 0.0);
    assert_eq!(report.avg_recall, 0.0);
    assert_eq!(report.avg_f1, 0.0);
}
