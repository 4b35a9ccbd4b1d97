use crate::config::AdvisoryPolicy;
use crate::domain::advisory::{Advisory, Confidence, PredictionRequest, Recommendation};
use crate::domain::bundle::ModelBundle;
use crate::domain::errors::PredictError;
use crate::domain::features;
use chrono::{Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use tracing::{debug, info, warn};

/// Computes a price forecast and a sell/wait advisory for one request.
///
/// Synchronous and side-effect-free: the bundle is only borrowed, a failed
/// prediction leaves it untouched, and identical inputs produce identical
/// advisories.
pub struct AdvisoryEngine {
    policy: AdvisoryPolicy,
}

impl AdvisoryEngine {
    pub fn new(policy: AdvisoryPolicy) -> Self {
        Self { policy }
    }

    pub fn predict(
        &self,
        bundle: &ModelBundle,
        request: &PredictionRequest,
    ) -> Result<Advisory, PredictError> {
        // Checked ahead of the reference lookup so a zero price is reported
        // as such even for an unknown crop/state pair.
        if request.current_price <= Decimal::ZERO {
            return Err(PredictError::InvalidCurrentPrice {
                price: request.current_price,
            });
        }

        let base = bundle
            .reference()
            .latest_for(&request.crop, &request.state)
            .ok_or_else(|| {
                warn!(
                    "No reference data for {}/{}",
                    request.crop, request.state
                );
                PredictError::NoData {
                    crop: request.crop.clone(),
                    state: request.state.clone(),
                }
            })?;

        let mut feature_map = base.features.clone();
        for (name, value) in &request.feature_overrides {
            if feature_map.contains_key(name) {
                feature_map.insert(name.clone(), value.clone());
            } else {
                debug!("Ignoring unknown feature override '{}'", name);
            }
        }

        let raw = features::assemble(&bundle.reference().feature_columns, &feature_map);

        let scaler = bundle.scaler();
        let expected = scaler.width().saturating_sub(1);
        if raw.len() != expected {
            return Err(PredictError::FeatureMismatch {
                expected,
                actual: raw.len(),
            });
        }

        let scaled = scaler
            .transform(&raw)
            .map_err(|reason| PredictError::InferenceFailed { reason })?;

        let forecast = bundle
            .model()
            .predict(&scaled)
            .map_err(|reason| PredictError::InferenceFailed { reason })?;

        // Reconstruct a full-width vector with the forecast in the target
        // slot, mirroring how the scaler was fitted.
        let target = scaler.width() - 1;
        let mut full = vec![0.0; scaler.width()];
        full[target] = forecast;
        let inverse = scaler
            .inverse_transform(&full)
            .map_err(|reason| PredictError::InferenceFailed { reason })?;

        // Forecasts below zero are not economically meaningful; floor them.
        let raw_price = inverse[target].max(0.0);
        let predicted_price = Decimal::from_f64(raw_price)
            .ok_or_else(|| PredictError::InferenceFailed {
                reason: format!("forecast {} is not a finite number", raw_price),
            })?
            .round_dp(2);

        let price_delta = predicted_price - request.current_price;
        let price_delta_pct =
            (price_delta / request.current_price * Decimal::ONE_HUNDRED).round_dp(2);
        let ratio = predicted_price / request.current_price;

        let today = Utc::now().date_naive();
        let (recommendation, confidence, suggested_date) = self.classify(ratio, today);

        info!(
            "Advisory for {}/{}: predicted {} vs current {} -> {} ({})",
            request.crop,
            request.state,
            predicted_price,
            request.current_price,
            recommendation,
            confidence
        );

        Ok(Advisory {
            predicted_price,
            recommendation,
            confidence,
            suggested_date,
            price_delta,
            price_delta_pct,
        })
    }

    /// Classifies the predicted/current ratio into a recommendation tier.
    /// Strict `>` at both cut points: ties go to the lower-urgency tier.
    pub fn classify(
        &self,
        ratio: Decimal,
        today: NaiveDate,
    ) -> (Recommendation, Confidence, NaiveDate) {
        if ratio > self.policy.wait_long_ratio {
            (
                Recommendation::WaitLong,
                Confidence::High,
                today + Duration::days(self.policy.wait_long_days),
            )
        } else if ratio > self.policy.wait_short_ratio {
            (
                Recommendation::WaitShort,
                Confidence::Medium,
                today + Duration::days(self.policy.wait_short_days),
            )
        } else {
            (Recommendation::SellNow, Confidence::Low, today)
        }
    }
}

impl Default for AdvisoryEngine {
    fn default() -> Self {
        Self::new(AdvisoryPolicy::default())
    }
}
