//! Policy configuration for the advisory engine.
//!
//! The ratio cut points and wait horizons are policy constants, not derived
//! statistics. Defaults preserve the three-tier structure callers depend on;
//! each value can be overridden via environment variables.

use anyhow::{Context, Result, bail};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::env;

/// Recommendation policy: ratio cut points and wait horizons.
///
/// Ties at a cut point classify into the lower-urgency tier (strict `>`).
#[derive(Debug, Clone, PartialEq)]
pub struct AdvisoryPolicy {
    /// Ratio above which the advice is WAIT_LONG.
    pub wait_long_ratio: Decimal,
    /// Ratio above which the advice is WAIT_SHORT.
    pub wait_short_ratio: Decimal,
    /// Days ahead suggested for WAIT_LONG.
    pub wait_long_days: i64,
    /// Days ahead suggested for WAIT_SHORT.
    pub wait_short_days: i64,
}

impl Default for AdvisoryPolicy {
    fn default() -> Self {
        Self {
            wait_long_ratio: dec!(1.10),
            wait_short_ratio: dec!(1.05),
            wait_long_days: 14,
            wait_short_days: 7,
        }
    }
}

impl AdvisoryPolicy {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        let policy = Self {
            wait_long_ratio: Self::parse_decimal("WAIT_LONG_RATIO", defaults.wait_long_ratio)?,
            wait_short_ratio: Self::parse_decimal("WAIT_SHORT_RATIO", defaults.wait_short_ratio)?,
            wait_long_days: Self::parse_i64("WAIT_LONG_DAYS", defaults.wait_long_days)?,
            wait_short_days: Self::parse_i64("WAIT_SHORT_DAYS", defaults.wait_short_days)?,
        };
        policy.validate()?;
        Ok(policy)
    }

    pub fn validate(&self) -> Result<()> {
        if self.wait_short_ratio <= Decimal::ZERO {
            bail!(
                "WAIT_SHORT_RATIO must be positive, got {}",
                self.wait_short_ratio
            );
        }
        if self.wait_short_ratio >= self.wait_long_ratio {
            bail!(
                "WAIT_SHORT_RATIO ({}) must be below WAIT_LONG_RATIO ({})",
                self.wait_short_ratio,
                self.wait_long_ratio
            );
        }
        if self.wait_short_days <= 0 || self.wait_long_days <= 0 {
            bail!(
                "Wait horizons must be positive, got {} and {}",
                self.wait_short_days,
                self.wait_long_days
            );
        }
        if self.wait_short_days >= self.wait_long_days {
            bail!(
                "WAIT_SHORT_DAYS ({}) must be below WAIT_LONG_DAYS ({})",
                self.wait_short_days,
                self.wait_long_days
            );
        }
        Ok(())
    }

    fn parse_decimal(key: &str, default: Decimal) -> Result<Decimal> {
        env::var(key)
            .unwrap_or_else(|_| default.to_string())
            .parse::<Decimal>()
            .context(format!("Failed to parse {}", key))
    }

    fn parse_i64(key: &str, default: i64) -> Result<i64> {
        env::var(key)
            .unwrap_or_else(|_| default.to_string())
            .parse::<i64>()
            .context(format!("Failed to parse {}", key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_matches_documented_constants() {
        let policy = AdvisoryPolicy::default();
        assert_eq!(policy.wait_long_ratio, dec!(1.10));
        assert_eq!(policy.wait_short_ratio, dec!(1.05));
        assert_eq!(policy.wait_long_days, 14);
        assert_eq!(policy.wait_short_days, 7);
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_ratios() {
        let policy = AdvisoryPolicy {
            wait_short_ratio: dec!(1.20),
            wait_long_ratio: dec!(1.10),
            ..AdvisoryPolicy::default()
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_positive_horizons() {
        let policy = AdvisoryPolicy {
            wait_short_days: 0,
            ..AdvisoryPolicy::default()
        };
        assert!(policy.validate().is_err());
    }
}
