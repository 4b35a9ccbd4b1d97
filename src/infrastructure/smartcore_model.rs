use crate::domain::ports::PriceModel;
use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use smartcore::linalg::basic::matrix::DenseMatrix;

/// Random-forest forecasting backend.
///
/// Holds a fully deserialized model; an artifact without a usable model is
/// rejected at load time rather than represented by an empty predictor.
pub struct SmartcoreForecaster {
    model: RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>,
}

impl SmartcoreForecaster {
    pub fn new(model: RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>) -> Self {
        Self { model }
    }
}

impl PriceModel for SmartcoreForecaster {
    fn predict(&self, features: &[f64]) -> Result<f64, String> {
        let input_matrix = DenseMatrix::from_2d_vec(&vec![features.to_vec()])
            .map_err(|e| format!("Matrix creation failed: {}", e))?;

        let predictions = self
            .model
            .predict(&input_matrix)
            .map_err(|e| format!("Prediction failed: {}", e))?;

        predictions
            .first()
            .copied()
            .ok_or_else(|| "No prediction returned".to_string())
    }

    fn name(&self) -> &str {
        "SmartCore Random Forest"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartcore::ensemble::random_forest_regressor::RandomForestRegressorParameters;

    fn trained() -> SmartcoreForecaster {
        let x = DenseMatrix::from_2d_vec(&vec![
            vec![0.0, 0.0],
            vec![0.25, 0.25],
            vec![0.5, 0.5],
            vec![0.75, 0.75],
            vec![1.0, 1.0],
        ])
        .unwrap();
        let y = vec![0.0, 0.25, 0.5, 0.75, 1.0];
        let model = RandomForestRegressor::fit(
            &x,
            &y,
            RandomForestRegressorParameters::default()
                .with_n_trees(10)
                .with_max_depth(4),
        )
        .unwrap();
        SmartcoreForecaster::new(model)
    }

    #[test]
    fn test_predict_returns_a_finite_scalar() {
        let forecaster = trained();
        let forecast = forecaster.predict(&[0.5, 0.5]).unwrap();
        assert!(forecast.is_finite());
        assert!((0.0..=1.0).contains(&forecast));
    }

    #[test]
    fn test_name_identifies_the_backend() {
        assert_eq!(trained().name(), "SmartCore Random Forest");
    }
}
