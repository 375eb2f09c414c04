//! Restock Core — domain types, feature construction, and the replenishment engine.
//!
//! This crate contains the deterministic heart of the pipeline:
//! - Domain types (sales observations, feature records, inventory policies)
//! - Feature builder: calendar attributes, trailing rolling mean, lag-1
//! - Demand statistics (sample mean / sample std)
//! - Inverse standard-normal CDF for service-level Z factors
//! - Replenishment engine: safety stock, reorder point, recommended order qty
//!
//! Everything here is a pure function of its inputs: no I/O, no hidden state,
//! no caching between runs.

pub mod domain;
pub mod engine;
pub mod error;
pub mod features;
pub mod stats;
