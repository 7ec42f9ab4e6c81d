//! Terminal performance metrics.

use serde::{Deserialize, Serialize};

/// Performance metrics for one pipeline run.
///
/// Computed once from the final backtested series and not persisted.
/// `sharpe_ratio` is `None` when annualized volatility is exactly zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSummary {
    pub annualized_return: f64,
    pub annualized_volatility: f64,
    pub sharpe_ratio: Option<f64>,
}
