//! InventoryPolicy — the per-product replenishment recommendation (report row).

use serde::{Deserialize, Serialize};

/// Replenishment recommendation for one product, derived deterministically
/// from its demand statistics and the run's policy parameters. Never mutated
/// after creation; one per product per run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventoryPolicy {
    pub product: String,

    // ── Demand statistics ──
    /// Sample mean of the daily demand sequence.
    pub avg_daily_demand: f64,
    /// Sample standard deviation (n−1 denominator); 0 when fewer than 2 points.
    pub std_daily_demand: f64,

    // ── Policy outputs ──
    /// Expected demand over the supplier lead time.
    pub demand_lead_time: f64,
    /// Z * std_daily_demand * sqrt(lead_time_days).
    pub safety_stock: f64,
    /// demand_lead_time + safety_stock.
    pub reorder_point: f64,
    /// Inventory on hand when the policy was computed.
    pub current_stock: f64,
    /// max(0, reorder_point − current_stock).
    pub recommended_order_qty: f64,
}

impl InventoryPolicy {
    /// Returns true when stock on hand is at or below the reorder point.
    pub fn should_reorder(&self) -> bool {
        self.current_stock <= self.reorder_point
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> InventoryPolicy {
        InventoryPolicy {
            product: "Widget A".into(),
            avg_daily_demand: 21.14,
            std_daily_demand: 2.45,
            demand_lead_time: 296.0,
            safety_stock: 15.06,
            reorder_point: 311.06,
            current_stock: 100.0,
            recommended_order_qty: 211.06,
        }
    }

    #[test]
    fn reorder_when_stock_at_or_below_rop() {
        let mut policy = sample();
        assert!(policy.should_reorder());

        policy.current_stock = 500.0;
        assert!(!policy.should_reorder());
    }

    #[test]
    fn policy_serialization_roundtrip() {
        let policy = sample();
        let json = serde_json::to_string(&policy).unwrap();
        let deser: InventoryPolicy = serde_json::from_str(&json).unwrap();
        assert_eq!(policy, deser);
    }
}
