//! Trailing rolling mean over an ordered quantity sequence.
//!
//! Window 7, minimum periods 1: the k-th output (k = 1..) is the mean of the
//! min(k, 7) most recent values ending at position k. Runs an incremental
//! window sum so the scan is O(n) regardless of window size.

/// Rolling mean of `values` with the given window, min periods 1.
///
/// Output has the same length as the input. The caller guarantees the slice
/// is a single product's sequence in date order; windows never cross product
/// boundaries because the builder partitions first.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<f64> {
    assert!(window >= 1, "rolling window must be >= 1");

    let mut result = Vec::with_capacity(values.len());
    let mut sum = 0.0;

    for (i, &v) in values.iter().enumerate() {
        sum += v;
        if i >= window {
            sum -= values[i - window];
        }
        let count = (i + 1).min(window);
        result.push(sum / count as f64);
    }

    result
}
