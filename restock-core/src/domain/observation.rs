//! SalesObservation — the fundamental demand data unit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of sales for a single product.
///
/// Produced by the ingestion collaborator after aggregation: at most one
/// observation per (product, date) pair. Quantity is a count of units sold
/// and must be non-negative and finite.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SalesObservation {
    pub product: String,
    pub date: NaiveDate,
    pub quantity: f64,
}

impl SalesObservation {
    pub fn new(product: impl Into<String>, date: NaiveDate, quantity: f64) -> Self {
        Self {
            product: product.into(),
            date,
            quantity,
        }
    }

    /// Basic sanity check: non-empty product, finite non-negative quantity.
    pub fn is_sane(&self) -> bool {
        !self.product.is_empty() && self.quantity.is_finite() && self.quantity >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SalesObservation {
        SalesObservation::new(
            "Widget A",
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            18.0,
        )
    }

    #[test]
    fn observation_is_sane() {
        assert!(sample().is_sane());
    }

    #[test]
    fn observation_detects_negative_quantity() {
        let mut obs = sample();
        obs.quantity = -1.0;
        assert!(!obs.is_sane());
    }

    #[test]
    fn observation_detects_nan_quantity() {
        let mut obs = sample();
        obs.quantity = f64::NAN;
        assert!(!obs.is_sane());
    }

    #[test]
    fn observation_detects_empty_product() {
        let mut obs = sample();
        obs.product.clear();
        assert!(!obs.is_sane());
    }

    #[test]
    fn observation_serialization_roundtrip() {
        let obs = sample();
        let json = serde_json::to_string(&obs).unwrap();
        let deser: SalesObservation = serde_json::from_str(&json).unwrap();
        assert_eq!(obs, deser);
    }
}
