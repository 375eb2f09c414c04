//! Per-product replenishment computation.
//!
//! Given one product's demand sequence (historical or forecast, the engine
//! does not care which) and the run parameters, produce one InventoryPolicy:
//!
//!   safety_stock  = Z * std_daily * sqrt(lead_time_days)
//!   reorder_point = avg_daily * lead_time_days + safety_stock
//!   order_qty     = max(0, reorder_point - current_stock)
//!
//! Pure function; no state survives between invocations.

use crate::domain::InventoryPolicy;
use crate::engine::params::{PolicyParameters, SingleObservationPolicy};
use crate::error::InsufficientDataError;
use crate::stats::{mean, sample_std};

/// Compute the inventory policy for one product.
///
/// `z` is the service-level factor from [`PolicyParameters::validate`];
/// resolving it once per run avoids recomputing the quantile for every
/// product. `current_stock` is already resolved (default or per-product
/// override) by the caller.
pub fn compute_policy(
    product: &str,
    quantities: &[f64],
    params: &PolicyParameters,
    z: f64,
    current_stock: f64,
) -> Result<InventoryPolicy, InsufficientDataError> {
    if quantities.is_empty() {
        return Err(InsufficientDataError::empty_sequence(product));
    }
    if quantities.len() == 1
        && params.single_observation == SingleObservationPolicy::Reject
    {
        return Err(InsufficientDataError::single_observation(product));
    }

    let avg_daily_demand = mean(quantities);
    let std_daily_demand = sample_std(quantities);
    let lead_time = f64::from(params.lead_time_days);

    let demand_lead_time = avg_daily_demand * lead_time;
    let safety_stock = z * std_daily_demand * lead_time.sqrt();
    let reorder_point = demand_lead_time + safety_stock;
    let recommended_order_qty = (reorder_point - current_stock).max(0.0);

    Ok(InventoryPolicy {
        product: product.to_string(),
        avg_daily_demand,
        std_daily_demand,
        demand_lead_time,
        safety_stock,
        reorder_point,
        current_stock,
        recommended_order_qty,
    })
}
