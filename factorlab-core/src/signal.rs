//! SignalGenerator — thresholds the composite score into Buy/Hold/Sell.
//!
//! Thresholds are the upper/lower quantiles of the full score series
//! (static, not rolling — inherited look-ahead, kept for compatibility).
//! Inequalities are strict: a score exactly on a threshold holds, as does
//! a row with an undefined score.

use crate::domain::{ScoredRow, Signal, SignaledRow};
use crate::stats::quantile;

/// Threshold every row's score against the series-wide quantile band.
///
/// Rows with undefined scores are skipped when computing the thresholds;
/// if no score is defined at all, every row holds.
pub fn generate_signals(
    rows: Vec<ScoredRow>,
    lower_quantile: f64,
    upper_quantile: f64,
) -> Vec<SignaledRow> {
    let scores: Vec<f64> = rows.iter().filter_map(|r| r.score).collect();
    let lower = quantile(&scores, lower_quantile);
    let upper = quantile(&scores, upper_quantile);

    rows.into_iter()
        .map(|row| {
            let signal = match (row.score, lower, upper) {
                (Some(s), _, Some(u)) if s > u => Signal::Buy,
                (Some(s), Some(l), _) if s < l => Signal::Sell,
                _ => Signal::Hold,
            };
            SignaledRow::from_scored(row, signal)
        })
        .collect()
}
