//! Test doubles for the model and scaler ports.

use crate::domain::ports::{FeatureScaler, PriceModel};

/// Model stub returning a fixed forecast or a fixed failure.
pub struct MockModel {
    outcome: Result<f64, String>,
}

impl MockModel {
    pub fn returning(forecast: f64) -> Self {
        Self {
            outcome: Ok(forecast),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            outcome: Err(reason.to_string()),
        }
    }
}

impl PriceModel for MockModel {
    fn predict(&self, _features: &[f64]) -> Result<f64, String> {
        self.outcome.clone()
    }

    fn name(&self) -> &str {
        "Mock Model"
    }
}

/// Pass-through scaler of a fixed width, with the same width checks a
/// fitted scaler performs.
pub struct IdentityScaler {
    width: usize,
}

impl IdentityScaler {
    pub fn new(width: usize) -> Self {
        Self { width }
    }
}

impl FeatureScaler for IdentityScaler {
    fn width(&self) -> usize {
        self.width
    }

    fn transform(&self, raw: &[f64]) -> Result<Vec<f64>, String> {
        let expected = self.width.saturating_sub(1);
        if raw.len() != expected {
            return Err(format!(
                "transform expects {} feature values, got {}",
                expected,
                raw.len()
            ));
        }
        Ok(raw.to_vec())
    }

    fn inverse_transform(&self, scaled: &[f64]) -> Result<Vec<f64>, String> {
        if scaled.len() != self.width {
            return Err(format!(
                "inverse transform expects {} values, got {}",
                self.width,
                scaled.len()
            ));
        }
        Ok(scaled.to_vec())
    }
}
