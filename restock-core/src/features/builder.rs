//! Feature builder — validate, sort, partition, and scan.
//!
//! Pipeline per run:
//! 1. Validate every observation (empty product, negative/non-finite quantity).
//! 2. Sort by (product, date) ascending.
//! 3. Reject duplicate (product, date) pairs — never silently summed.
//! 4. Per-product sequential scan producing calendar, rolling-mean, and lag
//!    features. Windows never cross product boundaries.
//!
//! Deterministic and idempotent: identical input yields identical output.

use crate::domain::{FeatureRecord, SalesObservation};
use crate::error::{DataIntegrityError, FeatureError, ValidationError};
use crate::features::calendar::CalendarFeatures;
use crate::features::rolling::rolling_mean;

/// Rolling window used for the trailing demand mean.
pub const ROLLING_WINDOW: usize = 7;

/// Build the feature-augmented sequence from raw observations.
///
/// Records arrive in any order; output is sorted by (product, date). The
/// record index reported in validation errors refers to the caller's input
/// order, before sorting.
pub fn build_features(observations: &[SalesObservation]) -> Result<Vec<FeatureRecord>, FeatureError> {
    for (index, obs) in observations.iter().enumerate() {
        validate_observation(index, obs)?;
    }

    let mut sorted: Vec<&SalesObservation> = observations.iter().collect();
    sorted.sort_by(|a, b| a.product.cmp(&b.product).then(a.date.cmp(&b.date)));

    for pair in sorted.windows(2) {
        if pair[0].product == pair[1].product && pair[0].date == pair[1].date {
            return Err(DataIntegrityError::DuplicateObservation {
                product: pair[1].product.clone(),
                date: pair[1].date,
            }
            .into());
        }
    }

    let mut records = Vec::with_capacity(sorted.len());
    for group in partition_by_product(&sorted) {
        let quantities: Vec<f64> = group.iter().map(|o| o.quantity).collect();
        let rolling = rolling_mean(&quantities, ROLLING_WINDOW);

        for (i, obs) in group.iter().enumerate() {
            let cal = CalendarFeatures::from_date(obs.date);
            records.push(FeatureRecord {
                product: obs.product.clone(),
                date: obs.date,
                quantity: obs.quantity,
                day_of_week: cal.day_of_week,
                month: cal.month,
                quarter: cal.quarter,
                year: cal.year,
                day_of_year: cal.day_of_year,
                rolling_mean_7: rolling[i],
                lag_1: if i > 0 { Some(group[i - 1].quantity) } else { None },
            });
        }
    }

    Ok(records)
}

fn validate_observation(index: usize, obs: &SalesObservation) -> Result<(), ValidationError> {
    if obs.product.is_empty() {
        return Err(ValidationError::EmptyProduct { index });
    }
    if !obs.quantity.is_finite() {
        return Err(ValidationError::NonFiniteQuantity {
            index,
            product: obs.product.clone(),
            date: obs.date,
        });
    }
    if obs.quantity < 0.0 {
        return Err(ValidationError::NegativeQuantity {
            index,
            product: obs.product.clone(),
            date: obs.date,
            quantity: obs.quantity,
        });
    }
    Ok(())
}

/// Split a (product, date)-sorted slice into contiguous per-product groups.
pub fn partition_by_product<'a>(sorted: &'a [&'a SalesObservation]) -> Vec<&'a [&'a SalesObservation]> {
    let mut groups = Vec::new();
    let mut start = 0;
    for i in 1..=sorted.len() {
        if i == sorted.len() || sorted[i].product != sorted[start].product {
            groups.push(&sorted[start..i]);
            start = i;
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn obs(product: &str, d: u32, quantity: f64) -> SalesObservation {
        SalesObservation::new(product, date(d), quantity)
    }

    #[test]
    fn features_for_single_product() {
        let observations = vec![obs("A", 1, 10.0), obs("A", 2, 20.0), obs("A", 3, 30.0)];
        let records = build_features(&observations).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].lag_1, None);
        assert_eq!(records[1].lag_1, Some(10.0));
        assert_eq!(records[2].lag_1, Some(20.0));
        assert!((records[0].rolling_mean_7 - 10.0).abs() < 1e-9);
        assert!((records[1].rolling_mean_7 - 15.0).abs() < 1e-9);
        assert!((records[2].rolling_mean_7 - 20.0).abs() < 1e-9);
    }

    #[test]
    fn rolling_and_lag_do_not_cross_products() {
        // Interleaved input order; builder must sort and partition.
        let observations = vec![
            obs("B", 1, 100.0),
            obs("A", 1, 10.0),
            obs("B", 2, 200.0),
            obs("A", 2, 20.0),
        ];
        let records = build_features(&observations).unwrap();

        assert_eq!(records.len(), 4);
        // Sorted: A/1, A/2, B/1, B/2.
        assert_eq!(records[0].product, "A");
        assert_eq!(records[2].product, "B");
        // First record of each product has no lag.
        assert_eq!(records[0].lag_1, None);
        assert_eq!(records[2].lag_1, None);
        // B's rolling mean starts fresh, untouched by A's values.
        assert!((records[2].rolling_mean_7 - 100.0).abs() < 1e-9);
        assert!((records[3].rolling_mean_7 - 150.0).abs() < 1e-9);
    }

    #[test]
    fn duplicate_product_date_is_rejected() {
        let observations = vec![obs("A", 1, 10.0), obs("A", 1, 15.0)];
        let err = build_features(&observations).unwrap_err();
        assert!(matches!(
            err,
            FeatureError::Integrity(DataIntegrityError::DuplicateObservation { .. })
        ));
    }

    #[test]
    fn negative_quantity_identifies_the_record() {
        let observations = vec![obs("A", 1, 10.0), obs("A", 2, -3.0)];
        let err = build_features(&observations).unwrap_err();
        match err {
            FeatureError::Validation(ValidationError::NegativeQuantity { index, .. }) => {
                assert_eq!(index, 1)
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn nan_quantity_is_rejected() {
        let observations = vec![obs("A", 1, f64::NAN)];
        assert!(matches!(
            build_features(&observations).unwrap_err(),
            FeatureError::Validation(ValidationError::NonFiniteQuantity { .. })
        ));
    }

    #[test]
    fn empty_product_is_rejected() {
        let observations = vec![obs("", 1, 10.0)];
        assert!(matches!(
            build_features(&observations).unwrap_err(),
            FeatureError::Validation(ValidationError::EmptyProduct { index: 0 })
        ));
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(build_features(&[]).unwrap().is_empty());
    }

    #[test]
    fn builder_is_idempotent() {
        let observations = vec![obs("A", 2, 20.0), obs("A", 1, 10.0), obs("B", 1, 5.0)];
        let first = build_features(&observations).unwrap();
        let second = build_features(&observations).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn calendar_fields_match_the_date() {
        // 2024-01-03 was a Wednesday, day-of-year 3.
        let records = build_features(&[obs("A", 3, 1.0)]).unwrap();
        assert_eq!(records[0].day_of_week, 2);
        assert_eq!(records[0].month, 1);
        assert_eq!(records[0].quarter, 1);
        assert_eq!(records[0].year, 2024);
        assert_eq!(records[0].day_of_year, 3);
    }
}
