//! Backtester — one-day-lagged strategy returns and their running product.
//!
//! The strategy return on row i applies the *previous* row's signal to
//! today's return; the signal generated on a row is never used on that
//! same row. The first row has no prior signal, so its strategy return is
//! undefined and contributes a multiplicative factor of 1 to the
//! cumulative product. Every row gets a cumulative value; no row is
//! skipped.

use crate::domain::{BacktestRow, Signal, SignaledRow};

/// Simulate the lagged strategy and compound its returns.
pub fn run_backtest(rows: Vec<SignaledRow>) -> Vec<BacktestRow> {
    let mut out = Vec::with_capacity(rows.len());
    let mut prev_signal: Option<Signal> = None;
    let mut cumulative = 1.0;

    for row in rows {
        let strategy_return = prev_signal.map(|s| f64::from(s.as_i8()) * row.returns);
        cumulative *= 1.0 + strategy_return.unwrap_or(0.0);
        prev_signal = Some(row.signal);
        out.push(BacktestRow::from_signaled(row, strategy_return, cumulative));
    }
    out
}
