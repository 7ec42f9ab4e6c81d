//! PerformanceEvaluator — annualized metrics from the backtested series.

use crate::domain::{BacktestRow, PerformanceSummary};
use crate::error::{PipelineError, PipelineWarning};
use crate::stats::sample_stddev;

/// Trading-days-per-year convention used for annualization.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Derive the three summary metrics from the final series.
///
/// With N rows and final cumulative value V:
/// - annualized return = V^(252/N) - 1
/// - annualized volatility = sample_stddev(defined strategy returns) × √252
/// - Sharpe = return / volatility, `None` when volatility is exactly zero
///   (recorded as an `UndefinedSharpe` warning, not an error).
pub fn evaluate(
    series: &[BacktestRow],
    warnings: &mut Vec<PipelineWarning>,
) -> Result<PerformanceSummary, PipelineError> {
    let Some(last) = series.last() else {
        return Err(PipelineError::InsufficientData {
            stage: "performance evaluation",
            rows: 0,
            needed: 1,
        });
    };

    let n = series.len() as f64;
    let annualized_return = last.cumulative_return.powf(TRADING_DAYS_PER_YEAR / n) - 1.0;

    let strategy_returns: Vec<f64> = series.iter().filter_map(|r| r.strategy_return).collect();
    let annualized_volatility = sample_stddev(&strategy_returns) * TRADING_DAYS_PER_YEAR.sqrt();

    let sharpe_ratio = if annualized_volatility == 0.0 {
        warnings.push(PipelineWarning::UndefinedSharpe);
        None
    } else {
        Some(annualized_return / annualized_volatility)
    };

    Ok(PerformanceSummary {
        annualized_return,
        annualized_volatility,
        sharpe_ratio,
    })
}
