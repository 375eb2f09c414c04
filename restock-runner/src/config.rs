//! Serializable run configuration.
//!
//! A `RunConfig` captures everything needed to reproduce a replenishment run:
//! the policy parameters plus per-product current-stock overrides. Loaded
//! from TOML, validated before any per-product work, and content-hashed for
//! report provenance.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use restock_core::engine::PolicyParameters;
use restock_core::error::InvalidParameterError;

/// Unique identifier for a run (content-addressable hash).
pub type RunId = String;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    InvalidParameter(#[from] InvalidParameterError),
}

/// Configuration for a single replenishment run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RunConfig {
    /// Run-global policy parameters (lead time, service level, stock default).
    #[serde(default)]
    pub policy: PolicyParameters,

    /// Per-product current-stock overrides. BTreeMap so serialization and the
    /// run hash are order-independent.
    #[serde(default)]
    pub stock_overrides: BTreeMap<String, f64>,
}

impl RunConfig {
    /// Load from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Validate all parameters, including every override, and resolve the
    /// service-level Z factor. Run-global: any failure aborts the run before
    /// per-product work begins.
    pub fn validate(&self) -> Result<f64, ConfigError> {
        let z = self.policy.validate()?;
        for (product, &stock) in &self.stock_overrides {
            if !stock.is_finite() || stock < 0.0 {
                return Err(InvalidParameterError::InvalidCurrentStock {
                    value: stock,
                    product: Some(product.clone()),
                }
                .into());
            }
        }
        Ok(z)
    }

    /// Stock on hand for one product: override if present, else the default.
    pub fn current_stock_for(&self, product: &str) -> f64 {
        self.stock_overrides
            .get(product)
            .copied()
            .unwrap_or(self.policy.current_stock)
    }

    /// Computes a deterministic hash ID for this configuration.
    ///
    /// Two runs with identical configs share a RunId, which ties exported
    /// reports back to the exact parameters that produced them.
    pub fn run_id(&self) -> RunId {
        let json = serde_json::to_string(self).expect("RunConfig serialization failed");
        let hash = blake3::hash(json.as_bytes());
        hash.to_hex().to_string()
    }
}
