//! Scored, signaled, and backtested rows.
//!
//! Z-scores and the composite score are `Option<f64>`: a degenerate factor
//! (zero cross-sectional stddev) makes its z-column undefined for every
//! row, and the composite score is undefined wherever any input z is.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::signal::Signal;

/// Row with winsorized z-scores and the composite score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRow {
    pub date: NaiveDate,
    pub price: f64,
    pub volume: f64,
    pub returns: f64,
    pub momentum: f64,
    pub volatility: f64,
    pub volume_factor: f64,
    pub momentum_z: Option<f64>,
    pub volatility_z: Option<f64>,
    pub volume_factor_z: Option<f64>,
    /// Mean of the three z-scores.
    pub score: Option<f64>,
}

/// Scored row plus its discrete trade signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignaledRow {
    pub date: NaiveDate,
    pub price: f64,
    pub volume: f64,
    pub returns: f64,
    pub momentum: f64,
    pub volatility: f64,
    pub volume_factor: f64,
    pub momentum_z: Option<f64>,
    pub volatility_z: Option<f64>,
    pub volume_factor_z: Option<f64>,
    pub score: Option<f64>,
    pub signal: Signal,
}

impl SignaledRow {
    pub fn from_scored(row: ScoredRow, signal: Signal) -> Self {
        Self {
            date: row.date,
            price: row.price,
            volume: row.volume,
            returns: row.returns,
            momentum: row.momentum,
            volatility: row.volatility,
            volume_factor: row.volume_factor,
            momentum_z: row.momentum_z,
            volatility_z: row.volatility_z,
            volume_factor_z: row.volume_factor_z,
            score: row.score,
            signal,
        }
    }
}

/// Fully annotated row as exposed to the presenter.
///
/// `strategy_return` is `None` on the first row only (no prior signal
/// exists to apply); `cumulative_return` is defined for every row, with an
/// undefined strategy return contributing a multiplicative factor of 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestRow {
    pub date: NaiveDate,
    pub price: f64,
    pub volume: f64,
    pub returns: f64,
    pub momentum: f64,
    pub volatility: f64,
    pub volume_factor: f64,
    pub momentum_z: Option<f64>,
    pub volatility_z: Option<f64>,
    pub volume_factor_z: Option<f64>,
    pub score: Option<f64>,
    pub signal: Signal,
    pub strategy_return: Option<f64>,
    pub cumulative_return: f64,
}

impl BacktestRow {
    pub fn from_signaled(
        row: SignaledRow,
        strategy_return: Option<f64>,
        cumulative_return: f64,
    ) -> Self {
        Self {
            date: row.date,
            price: row.price,
            volume: row.volume,
            returns: row.returns,
            momentum: row.momentum,
            volatility: row.volatility,
            volume_factor: row.volume_factor,
            momentum_z: row.momentum_z,
            volatility_z: row.volatility_z,
            volume_factor_z: row.volume_factor_z,
            score: row.score,
            signal: row.signal,
            strategy_return,
            cumulative_return,
        }
    }
}
