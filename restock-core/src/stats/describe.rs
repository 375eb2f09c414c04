//! Descriptive statistics: sample mean and sample standard deviation.

/// Arithmetic mean. Returns 0.0 for an empty slice; callers that must treat
/// an empty sequence as an error check before calling.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation with n−1 denominator.
///
/// Returns 0.0 when fewer than 2 values: a single observation has no measured
/// variability yet, matching the engine's zero-safety-stock policy for such
/// products.
pub fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}
