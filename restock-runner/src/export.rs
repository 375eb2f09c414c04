//! Report and feature export — CSV and JSON artifact generation.
//!
//! Two artifact families:
//! - **Report CSV**: the classic `safety_stock_and_reorder_report.csv` column
//!   set, one row per product.
//! - **Report JSON**: full round-trip serialization with schema versioning
//!   and run provenance (run id, failures).
//! - **Feature CSV**: the feature-engineered sales table, missing lag values
//!   exported as empty cells, never zero.
//!
//! JSON import rejects schema versions newer than this build understands.

use anyhow::{bail, Context, Result};

use restock_core::domain::FeatureRecord;

use crate::report::{ReplenishmentReport, SCHEMA_VERSION};

// ─── JSON export ────────────────────────────────────────────────────

/// Serialize a report to pretty JSON.
pub fn export_report_json(report: &ReplenishmentReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("failed to serialize report to JSON")
}

/// Deserialize a report from JSON, rejecting unknown schema versions.
pub fn import_report_json(json: &str) -> Result<ReplenishmentReport> {
    let report: ReplenishmentReport =
        serde_json::from_str(json).context("failed to deserialize report from JSON")?;
    if report.schema_version > SCHEMA_VERSION {
        bail!(
            "unsupported schema version {} (max supported: {})",
            report.schema_version,
            SCHEMA_VERSION
        );
    }
    Ok(report)
}

// ─── CSV export ─────────────────────────────────────────────────────

/// Export the report as CSV.
///
/// Columns: product, avg_daily_demand, std_daily_demand, demand_lead_time,
/// safety_stock, reorder_point, current_stock, recommended_order_qty
pub fn export_report_csv(report: &ReplenishmentReport) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "product",
        "avg_daily_demand",
        "std_daily_demand",
        "demand_lead_time",
        "safety_stock",
        "reorder_point",
        "current_stock",
        "recommended_order_qty",
    ])?;

    for policy in &report.policies {
        wtr.write_record([
            policy.product.clone(),
            policy.avg_daily_demand.to_string(),
            policy.std_daily_demand.to_string(),
            policy.demand_lead_time.to_string(),
            policy.safety_stock.to_string(),
            policy.reorder_point.to_string(),
            policy.current_stock.to_string(),
            policy.recommended_order_qty.to_string(),
        ])?;
    }

    let bytes = wtr.into_inner().context("CSV writer flush failed")?;
    String::from_utf8(bytes).context("CSV output was not UTF-8")
}

/// Export feature records as CSV.
///
/// Columns: date, product, quantity, day_of_week, month, quarter, year,
/// day_of_year, rolling_mean_7, lag_1 (empty when missing)
pub fn export_features_csv(records: &[FeatureRecord]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "date",
        "product",
        "quantity",
        "day_of_week",
        "month",
        "quarter",
        "year",
        "day_of_year",
        "rolling_mean_7",
        "lag_1",
    ])?;

    for record in records {
        wtr.write_record([
            record.date.format("%Y-%m-%d").to_string(),
            record.product.clone(),
            record.quantity.to_string(),
            record.day_of_week.to_string(),
            record.month.to_string(),
            record.quarter.to_string(),
            record.year.to_string(),
            record.day_of_year.to_string(),
            record.rolling_mean_7.to_string(),
            record.lag_1.map(|v| v.to_string()).unwrap_or_default(),
        ])?;
    }

    let bytes = wtr.into_inner().context("CSV writer flush failed")?;
    String::from_utf8(bytes).context("CSV output was not UTF-8")
}
