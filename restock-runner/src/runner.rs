//! Pipeline runner — wires together signal sources, the engine, and report
//! assembly.
//!
//! Products are independent, so policy computation fans out across a rayon
//! pool; results are merged deterministically by sorting on the product
//! identifier during assembly. A product that fails with insufficient data
//! is recorded as a failure without aborting the others. Invalid run-global
//! parameters abort before any per-product work.

use rayon::prelude::*;
use thiserror::Error;

use restock_core::domain::{InventoryPolicy, SalesObservation};
use restock_core::engine::compute_policy;
use restock_core::error::FeatureError;
use restock_core::features::build_features;

use crate::config::{ConfigError, RunConfig};
use crate::ingest::IngestError;
use crate::report::{ProductFailure, ReplenishmentReport, ReportError};
use crate::signal::{DemandSignalSource, HistoricalSignal};

/// Errors that fail an entire run (per-product failures are not errors here;
/// they land in `ReplenishmentReport::failures`).
#[derive(Debug, Error)]
pub enum RunError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("ingest error: {0}")]
    Ingest(#[from] IngestError),
    #[error("feature error: {0}")]
    Feature(#[from] FeatureError),
    #[error("report error: {0}")]
    Report(#[from] ReportError),
}

/// Pipeline runner over a demand signal source.
pub struct Runner {
    config: RunConfig,
    parallel: bool,
}

impl Runner {
    pub fn new(config: RunConfig) -> Self {
        Self {
            config,
            parallel: true,
        }
    }

    /// Enables or disables parallel execution.
    pub fn with_parallelism(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Compute one policy per product and assemble the report.
    pub fn run<S>(&self, signal: &S) -> Result<ReplenishmentReport, RunError>
    where
        S: DemandSignalSource + Sync,
    {
        // Run-global validation happens exactly once, before any product.
        let z = self.config.validate()?;
        let products = signal.products();

        let outcomes: Vec<_> = if self.parallel {
            products
                .par_iter()
                .map(|product| self.compute_one(signal, product, z))
                .collect()
        } else {
            products
                .iter()
                .map(|product| self.compute_one(signal, product, z))
                .collect()
        };

        let mut policies = Vec::with_capacity(outcomes.len());
        let mut failures = Vec::new();
        for outcome in outcomes {
            match outcome {
                Ok(policy) => policies.push(policy),
                Err(failure) => failures.push(failure),
            }
        }

        Ok(ReplenishmentReport::assemble(
            self.config.run_id(),
            policies,
            failures,
        )?)
    }

    fn compute_one<S: DemandSignalSource>(
        &self,
        signal: &S,
        product: &str,
        z: f64,
    ) -> Result<InventoryPolicy, ProductFailure> {
        let quantities = signal.quantities(product);
        let current_stock = self.config.current_stock_for(product);
        compute_policy(product, &quantities, &self.config.policy, z, current_stock).map_err(
            |err| ProductFailure {
                product: product.to_string(),
                error: err.to_string(),
            },
        )
    }
}

/// One-shot convenience wrapper: run the pipeline over an existing signal
/// source (historical or forecast).
pub fn run_pipeline<S>(config: &RunConfig, signal: &S) -> Result<ReplenishmentReport, RunError>
where
    S: DemandSignalSource + Sync,
{
    Runner::new(config.clone()).run(signal)
}

/// Run the full pipeline from raw observations.
///
/// Routes through the feature builder first, which owns input validation and
/// duplicate (product, date) detection, then feeds the per-product sequences
/// to the engine. This is the path the CLI takes for a cleaned sales export.
pub fn run_pipeline_from_observations(
    config: &RunConfig,
    observations: &[SalesObservation],
) -> Result<ReplenishmentReport, RunError> {
    let records = build_features(observations)?;
    let signal = HistoricalSignal::from_features(&records);
    Runner::new(config.clone()).run(&signal)
}
