use super::market::FeatureValue;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// One user submission: crop, state, the price currently offered, and any
/// optional feature overrides. Immutable; discarded after the request
/// completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub crop: String,
    pub state: String,
    pub current_price: Decimal,
    #[serde(default)]
    pub feature_overrides: HashMap<String, FeatureValue>,
}

impl PredictionRequest {
    pub fn new(crop: impl Into<String>, state: impl Into<String>, current_price: Decimal) -> Self {
        Self {
            crop: crop.into(),
            state: state.into(),
            current_price,
            feature_overrides: HashMap::new(),
        }
    }

    pub fn with_override(mut self, name: impl Into<String>, value: FeatureValue) -> Self {
        self.feature_overrides.insert(name.into(), value);
        self
    }
}

/// Discrete advice derived from the predicted/current price ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    SellNow,
    WaitShort,
    WaitLong,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::SellNow => write!(f, "SELL_NOW"),
            Recommendation::WaitShort => write!(f, "WAIT_SHORT"),
            Recommendation::WaitLong => write!(f, "WAIT_LONG"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::Low => write!(f, "LOW"),
            Confidence::Medium => write!(f, "MEDIUM"),
            Confidence::High => write!(f, "HIGH"),
        }
    }
}

/// The outcome of one prediction request. Derived value: recomputed every
/// request, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisory {
    /// Forecast in currency units, floored at zero, 2-decimal precision.
    pub predicted_price: Decimal,
    pub recommendation: Recommendation,
    pub confidence: Confidence,
    pub suggested_date: NaiveDate,
    pub price_delta: Decimal,
    pub price_delta_pct: Decimal,
}
