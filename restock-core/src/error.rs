//! Error taxonomy for the core pipeline.
//!
//! Four failure classes with different blast radii:
//! - `ValidationError` — one malformed input record; identifies the record.
//! - `DataIntegrityError` — duplicate keys; fatal to the run.
//! - `InsufficientDataError` — one product cannot be computed; other products
//!   proceed (partial-failure semantics live in the runner).
//! - `InvalidParameterError` — run-global configuration is out of range;
//!   rejected before any per-product work starts.

use chrono::NaiveDate;
use thiserror::Error;

/// A malformed or missing required field on an input record.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("record {index}: product identifier is empty")]
    EmptyProduct { index: usize },

    #[error("record {index} (product '{product}', {date}): quantity {quantity} is negative")]
    NegativeQuantity {
        index: usize,
        product: String,
        date: NaiveDate,
        quantity: f64,
    },

    #[error("record {index} (product '{product}', {date}): quantity is not a finite number")]
    NonFiniteQuantity {
        index: usize,
        product: String,
        date: NaiveDate,
    },
}

/// Duplicate keys where the data model requires uniqueness.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DataIntegrityError {
    #[error("duplicate observation for product '{product}' on {date}")]
    DuplicateObservation { product: String, date: NaiveDate },

    #[error("duplicate policy entry for product '{product}' at report assembly")]
    DuplicatePolicy { product: String },
}

/// A product with no usable demand sequence.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("product '{product}': {reason}")]
pub struct InsufficientDataError {
    pub product: String,
    pub reason: String,
}

impl InsufficientDataError {
    pub fn empty_sequence(product: impl Into<String>) -> Self {
        Self {
            product: product.into(),
            reason: "empty demand sequence".into(),
        }
    }

    pub fn single_observation(product: impl Into<String>) -> Self {
        Self {
            product: product.into(),
            reason: "single observation; variability cannot be estimated".into(),
        }
    }
}

/// Out-of-range run-global policy parameters.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InvalidParameterError {
    #[error("service_level must be strictly between 0 and 1, got {0}")]
    ServiceLevelOutOfRange(f64),

    #[error("lead_time_days must be a positive integer, got {0}")]
    NonPositiveLeadTime(i64),

    #[error("current_stock must be non-negative and finite, got {}{}", .value, product_suffix(.product))]
    InvalidCurrentStock { value: f64, product: Option<String> },
}

fn product_suffix(product: &Option<String>) -> String {
    match product {
        Some(p) => format!(" (override for product '{p}')"),
        None => String::new(),
    }
}

/// Errors from the feature-construction stage.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FeatureError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Integrity(#[from] DataIntegrityError),
}
