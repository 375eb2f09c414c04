//! FeatureRecord — a sales observation augmented with derived time-series features.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A sales observation plus calendar attributes and windowed statistics.
///
/// Rolling and lag fields never cross product boundaries; records for one
/// product are strictly ordered by date with no duplicates (the builder
/// enforces both).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureRecord {
    pub product: String,
    pub date: NaiveDate,
    pub quantity: f64,

    // ── Calendar attributes (pure functions of the date) ──
    /// Monday = 0 .. Sunday = 6.
    pub day_of_week: u32,
    /// 1..=12.
    pub month: u32,
    /// 1..=4.
    pub quarter: u32,
    pub year: i32,
    /// 1..=366.
    pub day_of_year: u32,

    // ── Windowed statistics ──
    /// Mean of this observation and up to the 6 preceding ones for the same
    /// product (window 7, min periods 1).
    pub rolling_mean_7: f64,
    /// Previous observation's quantity for the same product; None for the
    /// first observation of each product, never coerced to zero.
    pub lag_1: Option<f64>,
}
