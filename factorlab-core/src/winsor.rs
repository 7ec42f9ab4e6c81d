//! Winsorizer — clips factor outliers to a fixed quantile band.

use crate::domain::{FactorKind, FactorRow};
use crate::stats::winsorize;

/// Clip each factor independently to its `[limits, 1 - limits]` quantile
/// band, computed once over the full series.
///
/// The band is full-sample, not rolling (inherited look-ahead, kept for
/// compatibility). A short or constant series yields a degenerate band;
/// this never fails.
pub fn winsorize_factors(mut rows: Vec<FactorRow>, limits: f64) -> Vec<FactorRow> {
    for kind in FactorKind::ALL {
        let mut values: Vec<f64> = rows.iter().map(|r| r.factor(kind)).collect();
        winsorize(&mut values, limits);
        for (row, value) in rows.iter_mut().zip(&values) {
            *row.factor_mut(kind) = *value;
        }
    }
    rows
}
