//! FactorLab Core — deterministic multi-factor scoring pipeline.
//!
//! Transforms a raw daily price/volume series into discrete trade signals
//! and a backtest performance summary:
//! - **Cleaner** — parses decorated numeric text, drops unusable rows
//! - **FactorEngine** — rolling momentum, inverse volatility, volume factors
//! - **Winsorizer / Normalizer / Scorer** — quantile clipping, full-sample
//!   z-scores, composite score
//! - **SignalGenerator** — quantile thresholds into Sell/Hold/Buy
//! - **Backtester / PerformanceEvaluator** — one-day-lagged strategy
//!   returns, compounding, annualized metrics
//!
//! The core is a pure function from input rows to a `PipelineOutput`; it
//! performs no I/O and holds no state across runs. File ingest and result
//! presentation live in the CLI crate.

pub mod backtest;
pub mod clean;
pub mod domain;
pub mod error;
pub mod factors;
pub mod normalize;
pub mod perf;
pub mod pipeline;
pub mod signal;
pub mod stats;
pub mod winsor;

pub use error::{PipelineError, PipelineWarning};
pub use pipeline::{run_pipeline, PipelineConfig, PipelineOutput};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: output types are Send + Sync, so independent
    /// runs can execute on worker threads without synchronization.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<domain::RawRow>();
        require_sync::<domain::RawRow>();
        require_send::<domain::BacktestRow>();
        require_sync::<domain::BacktestRow>();
        require_send::<domain::PerformanceSummary>();
        require_sync::<domain::PerformanceSummary>();
        require_send::<PipelineOutput>();
        require_sync::<PipelineOutput>();
        require_send::<PipelineError>();
        require_sync::<PipelineError>();
        require_send::<PipelineWarning>();
        require_sync::<PipelineWarning>();
    }
}
