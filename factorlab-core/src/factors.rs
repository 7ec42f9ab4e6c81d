//! FactorEngine — rolling factor computation with warm-up dropping.
//!
//! For window W, row i gets:
//! - returns: price[i]/price[i-1] - 1
//! - momentum: price[i]/price[i-W] - 1
//! - volatility: 1 / (sample_stddev of the trailing W returns + ε)
//! - volume_factor: volume[i]/volume[i-W] - 1
//!
//! The first W rows feed rolling windows that are not yet full and are
//! dropped; the output is the contiguous suffix of the input starting at
//! index W. Volatility is inverted so that a higher factor value marks the
//! more attractive (lower-volatility) condition.

use crate::domain::{CleanRow, FactorRow};
use crate::error::PipelineError;
use crate::stats::sample_stddev;

/// Additive epsilon preventing division by zero in the volatility factor.
pub const VOL_EPSILON: f64 = 1e-9;

/// Compute all factors, dropping the warm-up prefix.
///
/// Errors with `InsufficientData` when no row survives the warm-up, i.e.
/// when fewer than `window + 1` cleaned rows exist.
pub fn compute_factors(
    rows: &[CleanRow],
    window: usize,
) -> Result<Vec<FactorRow>, PipelineError> {
    assert!(window >= 2, "factor window must be >= 2");

    let n = rows.len();
    if n <= window {
        return Err(PipelineError::InsufficientData {
            stage: "factor warm-up",
            rows: n,
            needed: window + 1,
        });
    }

    // returns[i - 1] holds the one-period return ending at input index i.
    let returns: Vec<f64> = rows
        .windows(2)
        .map(|pair| pair[1].price / pair[0].price - 1.0)
        .collect();

    let mut out = Vec::with_capacity(n - window);
    for i in window..n {
        let row = &rows[i];
        let base = &rows[i - window];
        // Trailing `window` returns ending at input index i.
        let ret_window = &returns[i - window..i];
        out.push(FactorRow {
            date: row.date,
            price: row.price,
            volume: row.volume,
            returns: returns[i - 1],
            momentum: row.price / base.price - 1.0,
            volatility: 1.0 / (sample_stddev(ret_window) + VOL_EPSILON),
            volume_factor: row.volume / base.volume - 1.0,
        });
    }
    Ok(out)
}
