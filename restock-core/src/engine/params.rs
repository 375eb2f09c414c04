//! PolicyParameters — the immutable per-run configuration snapshot.
//!
//! Passed by reference into every per-product computation; never a module
//! global. Validation happens once, before any per-product work, because the
//! parameters are run-global.

use serde::{Deserialize, Serialize};

use crate::error::InvalidParameterError;
use crate::stats::norm_ppf;

/// How to size safety stock for a product with exactly one observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SingleObservationPolicy {
    /// Treat the unmeasured variability as zero, yielding zero safety stock
    /// pending more data. Conservative, matches the original report.
    #[default]
    ZeroVariability,
    /// Refuse to compute a policy for the product (surfaced as
    /// `InsufficientDataError`; other products proceed).
    Reject,
}

/// Run-global replenishment parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyParameters {
    /// Days between placing an order and receiving stock.
    pub lead_time_days: u32,
    /// Target probability of not stocking out during lead time, in (0, 1).
    pub service_level: f64,
    /// Stock on hand, applied to every product unless the caller overrides
    /// per product.
    pub current_stock: f64,
    #[serde(default)]
    pub single_observation: SingleObservationPolicy,
}

impl Default for PolicyParameters {
    /// Defaults from the original report script: 14-day lead time, 95%
    /// service level, 100 units on hand.
    fn default() -> Self {
        Self {
            lead_time_days: 14,
            service_level: 0.95,
            current_stock: 100.0,
            single_observation: SingleObservationPolicy::default(),
        }
    }
}

impl PolicyParameters {
    /// Range-check all fields and resolve the service-level Z factor.
    ///
    /// Returns the Z factor so callers validate and obtain it in one step;
    /// the quantile function itself rejects service levels outside (0, 1).
    pub fn validate(&self) -> Result<f64, InvalidParameterError> {
        if self.lead_time_days == 0 {
            return Err(InvalidParameterError::NonPositiveLeadTime(0));
        }
        if !self.current_stock.is_finite() || self.current_stock < 0.0 {
            return Err(InvalidParameterError::InvalidCurrentStock {
                value: self.current_stock,
                product: None,
            });
        }
        norm_ppf(self.service_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_parameters_validate() {
        let z = PolicyParameters::default().validate().unwrap();
        assert!((z - 1.6448536).abs() < 1e-6);
    }

    #[test]
    fn zero_lead_time_is_rejected() {
        let params = PolicyParameters {
            lead_time_days: 0,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(InvalidParameterError::NonPositiveLeadTime(0))
        ));
    }

    #[test]
    fn service_level_bounds_are_exclusive() {
        for service_level in [0.0, 1.0, -0.1, 1.1] {
            let params = PolicyParameters {
                service_level,
                ..Default::default()
            };
            assert!(matches!(
                params.validate(),
                Err(InvalidParameterError::ServiceLevelOutOfRange(_))
            ));
        }
    }

    #[test]
    fn negative_stock_is_rejected() {
        let params = PolicyParameters {
            current_stock: -5.0,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(InvalidParameterError::InvalidCurrentStock { .. })
        ));
    }

    #[test]
    fn single_observation_policy_defaults_to_zero_variability() {
        assert_eq!(
            PolicyParameters::default().single_observation,
            SingleObservationPolicy::ZeroVariability
        );
    }

    #[test]
    fn parameters_toml_roundtrip() {
        let params = PolicyParameters {
            lead_time_days: 21,
            service_level: 0.99,
            current_stock: 250.0,
            single_observation: SingleObservationPolicy::Reject,
        };
        let text = toml::to_string(&params).unwrap();
        let back: PolicyParameters = toml::from_str(&text).unwrap();
        assert_eq!(params, back);
    }
}
