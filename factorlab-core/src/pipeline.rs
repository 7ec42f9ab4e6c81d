//! Pipeline orchestration — the single operation exposed to collaborators.
//!
//! Stages run strictly in order, each consuming its predecessor's output:
//! clean → factors → winsorize → z-score/score → signal → backtest →
//! performance. The run is a pure function of its input; concurrent runs
//! share no state.

use serde::{Deserialize, Serialize};

use crate::backtest::run_backtest;
use crate::clean::clean_rows;
use crate::domain::{BacktestRow, PerformanceSummary, RawRow};
use crate::error::{PipelineError, PipelineWarning};
use crate::factors::compute_factors;
use crate::normalize::normalize_and_score;
use crate::perf::evaluate;
use crate::signal::generate_signals;
use crate::winsor::winsorize_factors;

/// Tunable parameters for one pipeline run.
///
/// Statistics stay full-sample, but the windows and bands are parameters
/// rather than hard-coded literals so causal variants can be substituted
/// behind the same interface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Rolling window for momentum, volatility, and volume factors.
    pub window: usize,
    /// Winsorization limit: factors are clipped to `[limit, 1 - limit]`
    /// quantiles.
    pub winsor_limits: f64,
    /// Score quantile below which a row signals Sell.
    pub lower_quantile: f64,
    /// Score quantile above which a row signals Buy.
    pub upper_quantile: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            window: 20,
            winsor_limits: 0.01,
            lower_quantile: 0.30,
            upper_quantile: 0.70,
        }
    }
}

impl PipelineConfig {
    fn validate(&self) {
        assert!(self.window >= 2, "factor window must be >= 2");
        assert!(
            self.winsor_limits > 0.0 && self.winsor_limits < 0.5,
            "winsor limit must be in (0, 0.5)"
        );
        assert!(
            0.0 < self.lower_quantile
                && self.lower_quantile < self.upper_quantile
                && self.upper_quantile < 1.0,
            "signal quantiles must satisfy 0 < lower < upper < 1"
        );
    }
}

/// Everything a presenter needs from one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineOutput {
    /// The fully annotated series, one row per surviving observation.
    pub series: Vec<BacktestRow>,
    pub summary: PerformanceSummary,
    /// Non-fatal conditions encountered during the run.
    pub warnings: Vec<PipelineWarning>,
    /// Raw rows the cleaner excluded as unparsable.
    pub rows_dropped: usize,
}

/// Run the full transform pipeline over a raw daily series.
///
/// Errors only when too few rows survive cleaning and factor warm-up;
/// every other failure mode is row-level exclusion or a warning in the
/// output.
pub fn run_pipeline(
    rows: &[RawRow],
    config: &PipelineConfig,
) -> Result<PipelineOutput, PipelineError> {
    config.validate();

    let cleaned = clean_rows(rows);
    let factors = compute_factors(&cleaned.rows, config.window)?;
    let winsorized = winsorize_factors(factors, config.winsor_limits);

    let mut warnings = Vec::new();
    let scored = normalize_and_score(winsorized, &mut warnings);
    let signaled = generate_signals(scored, config.lower_quantile, config.upper_quantile);
    let series = run_backtest(signaled);
    let summary = evaluate(&series, &mut warnings)?;

    Ok(PipelineOutput {
        series,
        summary,
        warnings,
        rows_dropped: cleaned.dropped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        PipelineConfig::default().validate();
    }

    #[test]
    #[should_panic(expected = "signal quantiles")]
    fn inverted_quantiles_are_rejected() {
        PipelineConfig {
            lower_quantile: 0.8,
            upper_quantile: 0.2,
            ..Default::default()
        }
        .validate();
    }

    #[test]
    #[should_panic(expected = "factor window")]
    fn degenerate_window_is_rejected() {
        PipelineConfig {
            window: 1,
            ..Default::default()
        }
        .validate();
    }
}
