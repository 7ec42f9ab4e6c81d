//! Pipeline error and warning taxonomy.
//!
//! Parse failures never surface — the cleaner excludes the row. Everything
//! else is either a surfaced `PipelineError` (the run cannot continue) or a
//! non-fatal `PipelineWarning` attached to the output. No condition panics
//! for malformed input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::FactorKind;

/// Fatal (run-level) pipeline errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// Too few rows survive to continue. Replaces the index-out-of-range
    /// fault an empty derived series would otherwise cause downstream.
    #[error("insufficient data at {stage}: {rows} row(s) available, at least {needed} required")]
    InsufficientData {
        stage: &'static str,
        rows: usize,
        needed: usize,
    },
}

/// Non-fatal conditions the presenter may want to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum PipelineWarning {
    /// A factor has zero cross-sectional stddev; its z-scores (and every
    /// composite score depending on them) are undefined.
    #[error("{factor} is constant over the series; z-scores are undefined")]
    DegenerateFactor { factor: FactorKind },

    /// Annualized volatility is exactly zero, so the Sharpe ratio is
    /// undefined rather than infinite.
    #[error("annualized volatility is zero; Sharpe ratio is undefined")]
    UndefinedSharpe,
}
