//! Demand signal sources.
//!
//! The `DemandSignalSource` trait abstracts over where a product's demand
//! sequence comes from — historical observations or an external forecasting
//! model — so the engine can be fed either without knowing which. Both
//! implementations hold already-materialized data; any upstream fetching or
//! timeouts belong to the collaborator that produced the data.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use restock_core::domain::{FeatureRecord, SalesObservation};

/// A per-product, date-ordered demand sequence provider.
pub trait DemandSignalSource {
    /// Products with at least one data point, in identifier order.
    fn products(&self) -> Vec<String>;

    /// The demand quantities for one product, ordered by date. Empty when
    /// the product is unknown.
    fn quantities(&self, product: &str) -> Vec<f64>;
}

/// Historical demand taken directly from sales observations.
#[derive(Debug, Clone, Default)]
pub struct HistoricalSignal {
    by_product: BTreeMap<String, Vec<(NaiveDate, f64)>>,
}

impl HistoricalSignal {
    /// Build from observations in any order; each product's sequence is
    /// sorted by date. Does not detect duplicates — run raw input through
    /// the feature builder first when that guarantee is needed.
    pub fn from_observations(observations: &[SalesObservation]) -> Self {
        let mut by_product: BTreeMap<String, Vec<(NaiveDate, f64)>> = BTreeMap::new();
        for obs in observations {
            by_product
                .entry(obs.product.clone())
                .or_default()
                .push((obs.date, obs.quantity));
        }
        for series in by_product.values_mut() {
            series.sort_by_key(|(date, _)| *date);
        }
        Self { by_product }
    }

    /// Build from feature-builder output, which is already validated, sorted,
    /// and duplicate-free.
    pub fn from_features(records: &[FeatureRecord]) -> Self {
        let mut by_product: BTreeMap<String, Vec<(NaiveDate, f64)>> = BTreeMap::new();
        for record in records {
            by_product
                .entry(record.product.clone())
                .or_default()
                .push((record.date, record.quantity));
        }
        Self { by_product }
    }
}

impl DemandSignalSource for HistoricalSignal {
    fn products(&self) -> Vec<String> {
        self.by_product.keys().cloned().collect()
    }

    fn quantities(&self, product: &str) -> Vec<f64> {
        self.by_product
            .get(product)
            .map(|series| series.iter().map(|(_, q)| *q).collect())
            .unwrap_or_default()
    }
}

/// Forecast demand from an external point-forecast model.
///
/// Treated identically to historical data by the engine; the only difference
/// is provenance.
#[derive(Debug, Clone, Default)]
pub struct ForecastSignal {
    by_product: BTreeMap<String, Vec<(NaiveDate, f64)>>,
}

impl ForecastSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one product's forecast as (date, quantity) pairs; sorted by date
    /// on insertion.
    pub fn insert(&mut self, product: impl Into<String>, mut forecast: Vec<(NaiveDate, f64)>) {
        forecast.sort_by_key(|(date, _)| *date);
        self.by_product.insert(product.into(), forecast);
    }
}

impl DemandSignalSource for ForecastSignal {
    fn products(&self) -> Vec<String> {
        self.by_product.keys().cloned().collect()
    }

    fn quantities(&self, product: &str) -> Vec<f64> {
        self.by_product
            .get(product)
            .map(|series| series.iter().map(|(_, q)| *q).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn historical_orders_by_date_within_product() {
        let observations = vec![
            SalesObservation::new("A", date(3), 30.0),
            SalesObservation::new("A", date(1), 10.0),
            SalesObservation::new("A", date(2), 20.0),
        ];
        let signal = HistoricalSignal::from_observations(&observations);
        assert_eq!(signal.quantities("A"), vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn products_come_back_in_identifier_order() {
        let observations = vec![
            SalesObservation::new("Zeta", date(1), 1.0),
            SalesObservation::new("Alpha", date(1), 2.0),
        ];
        let signal = HistoricalSignal::from_observations(&observations);
        assert_eq!(signal.products(), vec!["Alpha", "Zeta"]);
    }

    #[test]
    fn unknown_product_is_empty() {
        let signal = HistoricalSignal::default();
        assert!(signal.quantities("Ghost").is_empty());
    }

    #[test]
    fn forecast_behaves_like_historical() {
        let mut forecast = ForecastSignal::new();
        forecast.insert("A", vec![(date(2), 25.0), (date(1), 21.0)]);
        assert_eq!(forecast.products(), vec!["A"]);
        assert_eq!(forecast.quantities("A"), vec![21.0, 25.0]);
    }
}
