use crate::domain::ports::FeatureScaler;
use serde::{Deserialize, Serialize};

/// Fitted range of one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnRange {
    pub min: f64,
    pub max: f64,
}

impl ColumnRange {
    fn scale(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span == 0.0 {
            // A constant column carries no signal; map it to the midpoint so
            // it neither divides by zero nor drags the forecast.
            0.5
        } else {
            (value - self.min) / span
        }
    }

    fn unscale(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span == 0.0 {
            self.min
        } else {
            value * span + self.min
        }
    }
}

/// Column-wise min-max scaler over full table rows.
///
/// Fitted with the target (price) column as the trailing column, so the
/// inverse transform can map a scaled forecast back into currency space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinMaxScaler {
    pub columns: Vec<ColumnRange>,
}

impl MinMaxScaler {
    /// Fits per-column ranges over `rows`. Every row must have the same
    /// width; the last column is the target.
    pub fn fit(rows: &[Vec<f64>]) -> Result<Self, String> {
        let width = match rows.first() {
            Some(first) => first.len(),
            None => return Err("cannot fit a scaler on zero rows".to_string()),
        };
        if width == 0 {
            return Err("cannot fit a scaler on zero columns".to_string());
        }

        let mut columns = vec![
            ColumnRange {
                min: f64::INFINITY,
                max: f64::NEG_INFINITY,
            };
            width
        ];
        for (index, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(format!(
                    "row {} has {} columns, expected {}",
                    index,
                    row.len(),
                    width
                ));
            }
            for (column, value) in columns.iter_mut().zip(row) {
                column.min = column.min.min(*value);
                column.max = column.max.max(*value);
            }
        }
        Ok(Self { columns })
    }
}

impl FeatureScaler for MinMaxScaler {
    fn width(&self) -> usize {
        self.columns.len()
    }

    fn transform(&self, raw: &[f64]) -> Result<Vec<f64>, String> {
        let expected = self.columns.len().saturating_sub(1);
        if raw.len() != expected {
            return Err(format!(
                "transform expects {} feature values, got {}",
                expected,
                raw.len()
            ));
        }
        Ok(self
            .columns
            .iter()
            .zip(raw)
            .map(|(column, value)| column.scale(*value))
            .collect())
    }

    fn inverse_transform(&self, scaled: &[f64]) -> Result<Vec<f64>, String> {
        if scaled.len() != self.columns.len() {
            return Err(format!(
                "inverse transform expects {} values, got {}",
                self.columns.len(),
                scaled.len()
            ));
        }
        Ok(self
            .columns
            .iter()
            .zip(scaled)
            .map(|(column, value)| column.unscale(*value))
            .collect())
    }
}
