//! Replenishment engine: policy parameters and the per-product computation.

pub mod params;
pub mod replenish;

pub use params::{PolicyParameters, SingleObservationPolicy};
pub use replenish::compute_policy;
