//! Evaluation metrics and augmentation utilities for training pipelines
//!
//! Small, self-contained helpers shared by training and evaluation code:
//!
//! - `metrics`: confusion-matrix accumulation and derived precision/recall/F1
//! - `augment`: image transforms, serializable pipelines, config validation
//! - `nn`: composition wrappers over tensor-to-tensor callables
//! - `viz`: color resolution for rendering predictions
//!
//! Every function here is a one-shot pure computation: no I/O, no shared
//! mutable state, no ambient randomness (generators are always injected).

pub mod augment;
pub mod metrics;
pub mod nn;
pub mod viz;

pub use augment::{validate_pipeline, ConfigError, MinMaxNormalize, Pipeline, Transform};
pub use metrics::{confusion_matrix, ConfusionMatrix, MetricsError, MetricsReport};
pub use nn::{AddTensors, Module, Parallel, SplitSizes, SplitTensor};
pub use viz::{resolve_color, ColorError, Rgb};
