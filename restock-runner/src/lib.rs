//! Restock Runner — orchestration around `restock-core`.
//!
//! This crate builds on `restock-core` to provide:
//! - CSV ingestion of cleaned sales exports with row-level validation
//! - Demand signal sources (historical observations or external forecasts)
//! - Parallel per-product policy computation with partial-failure isolation
//! - Report assembly with stable product ordering
//! - CSV/JSON export with schema versioning

pub mod config;
pub mod export;
pub mod ingest;
pub mod report;
pub mod runner;
pub mod signal;

pub use config::{ConfigError, RunConfig};
pub use export::{export_features_csv, export_report_csv, export_report_json, import_report_json};
pub use ingest::{read_sales_csv, IngestError};
pub use report::{ProductFailure, ReplenishmentReport, ReportError, SCHEMA_VERSION};
pub use runner::{run_pipeline, run_pipeline_from_observations, RunError};
pub use signal::{DemandSignalSource, ForecastSignal, HistoricalSignal};
