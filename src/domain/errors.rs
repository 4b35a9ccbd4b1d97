use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while deserializing an uploaded artifact
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("artifact could not be deserialized: {reason}")]
    Malformed { reason: String },

    #[error("artifact is missing required component '{name}'")]
    MissingComponent { name: String },
}

/// Errors raised while computing an advisory.
///
/// All variants are request-scoped: the held bundle stays valid and the
/// caller may immediately retry with different inputs.
#[derive(Debug, Error)]
pub enum PredictError {
    #[error("no reference data for crop '{crop}' in state '{state}'")]
    NoData { crop: String, state: String },

    #[error("feature width mismatch: scaler expects {expected} features, row provides {actual}")]
    FeatureMismatch { expected: usize, actual: usize },

    #[error("current price must be greater than zero, got {price}")]
    InvalidCurrentPrice { price: Decimal },

    #[error("model inference failed: {reason}")]
    InferenceFailed { reason: String },
}
