/// Interface for forecasting model backends
pub trait PriceModel: Send + Sync {
    /// Predict a scaled scalar forecast from a scaled feature vector.
    fn predict(&self, features: &[f64]) -> Result<f64, String>;

    /// Get model name/type
    fn name(&self) -> &str;
}

/// Bidirectional transform between raw and scaled feature space.
///
/// A scaler is fitted over full table rows: every feature column plus the
/// trailing target (price) column. `transform` therefore accepts
/// `width() - 1` feature values, while `inverse_transform` accepts a
/// full-width vector so a forecast can be mapped back through the target
/// column slot.
pub trait FeatureScaler: Send + Sync {
    /// Number of fitted columns, including the trailing target column.
    fn width(&self) -> usize;

    fn transform(&self, raw: &[f64]) -> Result<Vec<f64>, String>;

    fn inverse_transform(&self, scaled: &[f64]) -> Result<Vec<f64>, String>;
}
