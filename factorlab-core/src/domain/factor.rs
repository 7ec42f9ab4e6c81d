//! Factor rows and factor identifiers.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The three cross-sectional factors combined into the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FactorKind {
    Momentum,
    Volatility,
    VolumeFactor,
}

impl FactorKind {
    pub const ALL: [FactorKind; 3] = [
        FactorKind::Momentum,
        FactorKind::Volatility,
        FactorKind::VolumeFactor,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FactorKind::Momentum => "Momentum",
            FactorKind::Volatility => "Volatility",
            FactorKind::VolumeFactor => "VolumeFactor",
        }
    }
}

impl fmt::Display for FactorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Row with all rolling factors defined.
///
/// Only rows strictly past the warm-up window reach this type, so every
/// factor cell is a plain `f64`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorRow {
    pub date: NaiveDate,
    pub price: f64,
    pub volume: f64,
    /// One-period percent change of price.
    pub returns: f64,
    /// Window-period percent change of price.
    pub momentum: f64,
    /// Reciprocal rolling stddev of returns; a high value means a calm market.
    pub volatility: f64,
    /// Window-period percent change of volume.
    pub volume_factor: f64,
}

impl FactorRow {
    pub fn factor(&self, kind: FactorKind) -> f64 {
        match kind {
            FactorKind::Momentum => self.momentum,
            FactorKind::Volatility => self.volatility,
            FactorKind::VolumeFactor => self.volume_factor,
        }
    }

    pub fn factor_mut(&mut self, kind: FactorKind) -> &mut f64 {
        match kind {
            FactorKind::Momentum => &mut self.momentum,
            FactorKind::Volatility => &mut self.volatility,
            FactorKind::VolumeFactor => &mut self.volume_factor,
        }
    }
}
