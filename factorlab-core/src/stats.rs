//! Shared numeric helpers: moments, quantiles, winsorization.
//!
//! Pure functions over `f64` slices. Quantiles use linear interpolation
//! between order statistics; stddev uses the sample (n-1) denominator.

/// Arithmetic mean. Zero for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n-1 denominator).
///
/// Returns 0.0 for fewer than two values, which callers treat as the
/// degenerate (undefined) case rather than a meaningful zero.
pub fn sample_stddev(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let m = mean(values);
    let var = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / (n - 1) as f64;
    var.sqrt()
}

/// Quantile `q` in `[0, 1]` with linear interpolation between order
/// statistics. `None` for an empty slice; a single value is every quantile
/// of itself.
pub fn quantile(values: &[f64], q: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// Clip every value into the closed `[quantile(limits), quantile(1-limits)]`
/// band of the slice itself. A short or constant slice produces a
/// degenerate (possibly equal-bounds) band; this never fails.
pub fn winsorize(values: &mut [f64], limits: f64) {
    let (Some(lower), Some(upper)) = (
        quantile(values, limits),
        quantile(values, 1.0 - limits),
    ) else {
        return;
    };
    for v in values.iter_mut() {
        *v = v.max(lower).min(upper);
    }
}
