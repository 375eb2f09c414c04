//! Report assembly.
//!
//! Collects per-product outcomes into the final report: policies sorted by
//! product identifier, failed products recorded next to them instead of being
//! silently dropped or padded with zeros.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use restock_core::domain::InventoryPolicy;
use restock_core::error::DataIntegrityError;

/// Current schema version for persisted report artifacts.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Integrity(#[from] DataIntegrityError),
}

/// A product whose policy computation failed; other products are unaffected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductFailure {
    pub product: String,
    pub error: String,
}

/// The assembled replenishment report for one run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReplenishmentReport {
    /// Schema version for forward-compatible deserialization.
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    /// Content hash of the RunConfig that produced this report.
    pub run_id: String,
    /// Successful policies, sorted by product identifier.
    pub policies: Vec<InventoryPolicy>,
    /// Products that failed, sorted by product identifier.
    pub failures: Vec<ProductFailure>,
}

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

impl ReplenishmentReport {
    /// Assemble a report from per-product outcomes.
    ///
    /// Sorting is stable on the product identifier; a duplicate product in
    /// either list is a data-integrity failure of the whole run.
    pub fn assemble(
        run_id: String,
        mut policies: Vec<InventoryPolicy>,
        mut failures: Vec<ProductFailure>,
    ) -> Result<Self, ReportError> {
        policies.sort_by(|a, b| a.product.cmp(&b.product));
        failures.sort_by(|a, b| a.product.cmp(&b.product));

        if let Some(dup) = first_duplicate(policies.iter().map(|p| p.product.as_str())) {
            return Err(DataIntegrityError::DuplicatePolicy {
                product: dup.to_string(),
            }
            .into());
        }
        if let Some(dup) = first_duplicate(failures.iter().map(|f| f.product.as_str())) {
            return Err(DataIntegrityError::DuplicatePolicy {
                product: dup.to_string(),
            }
            .into());
        }

        Ok(Self {
            schema_version: SCHEMA_VERSION,
            run_id,
            policies,
            failures,
        })
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn policy_for(&self, product: &str) -> Option<&InventoryPolicy> {
        self.policies
            .binary_search_by(|p| p.product.as_str().cmp(product))
            .ok()
            .map(|i| &self.policies[i])
    }
}

/// First adjacent duplicate in a sorted iterator of keys.
fn first_duplicate<'a>(keys: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let mut prev: Option<&str> = None;
    for key in keys {
        if prev == Some(key) {
            return Some(key);
        }
        prev = Some(key);
    }
    None
}
