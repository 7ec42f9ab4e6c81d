//! Discrete trade signal.

use serde::{Deserialize, Serialize};

/// Trade stance derived from the composite score.
///
/// Informational label only — there is no order sizing or execution
/// behind it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Signal {
    Sell,
    #[default]
    Hold,
    Buy,
}

impl Signal {
    /// Numeric encoding used by the backtester: Sell = -1, Hold = 0, Buy = +1.
    pub fn as_i8(self) -> i8 {
        match self {
            Signal::Sell => -1,
            Signal::Hold => 0,
            Signal::Buy => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Signal::Sell => "Sell",
            Signal::Hold => "Hold",
            Signal::Buy => "Buy",
        }
    }
}
