//! Augmentation configuration error types

use thiserror::Error;

/// Errors raised while validating augmentation configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Serialized pipeline does not match the transform schema
    #[error(
        "Invalid augmentation pipeline serialization: {reason}. \
         Serialize pipelines with serde_json::to_value(&pipeline)."
    )]
    InvalidPipeline { reason: String },
}
