//! Artifact deserialization.
//!
//! An artifact is a single JSON document with three top-level components:
//! `model` (random-forest regressor), `scaler` (fitted column ranges) and
//! `reference_table` (historical rows plus the feature schema). All three
//! must deserialize before a bundle exists; a failed load leaves any
//! previously held bundle untouched.

use crate::domain::bundle::ModelBundle;
use crate::domain::errors::LoadError;
use crate::domain::market::ReferenceTable;
use crate::infrastructure::scaler::MinMaxScaler;
use crate::infrastructure::smartcore_model::SmartcoreForecaster;
use serde::Deserialize;
use serde_json::Value;
use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use smartcore::linalg::basic::matrix::DenseMatrix;
use tracing::info;

#[derive(Deserialize)]
struct RawArtifact {
    model: Option<Value>,
    scaler: Option<Value>,
    reference_table: Option<Value>,
}

/// Deserializes artifact bytes into a ready-to-serve bundle.
pub fn load(artifact_bytes: &[u8]) -> Result<ModelBundle, LoadError> {
    let raw: RawArtifact =
        serde_json::from_slice(artifact_bytes).map_err(|e| LoadError::Malformed {
            reason: e.to_string(),
        })?;

    let model_value = require(raw.model, "model")?;
    let scaler_value = require(raw.scaler, "scaler")?;
    let reference_value = require(raw.reference_table, "reference_table")?;

    let model: RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>> =
        serde_json::from_value(model_value).map_err(|e| LoadError::Malformed {
            reason: format!("model: {}", e),
        })?;

    let scaler: MinMaxScaler =
        serde_json::from_value(scaler_value).map_err(|e| LoadError::Malformed {
            reason: format!("scaler: {}", e),
        })?;

    let reference: ReferenceTable =
        serde_json::from_value(reference_value).map_err(|e| LoadError::Malformed {
            reason: format!("reference_table: {}", e),
        })?;

    info!(
        "Loaded artifact: {} reference rows, {} feature columns, scaler width {}",
        reference.len(),
        reference.feature_columns.len(),
        scaler.columns.len()
    );

    Ok(ModelBundle::new(
        Box::new(SmartcoreForecaster::new(model)),
        Box::new(scaler),
        reference,
    ))
}

fn require(value: Option<Value>, name: &str) -> Result<Value, LoadError> {
    match value {
        Some(Value::Null) | None => Err(LoadError::MissingComponent {
            name: name.to_string(),
        }),
        Some(value) => Ok(value),
    }
}
