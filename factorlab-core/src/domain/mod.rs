//! Domain types — one row type per pipeline stage.
//!
//! Each stage owns and fully replaces the sequence it produces; the row
//! types form a chain where every stage's type carries all columns of the
//! previous one plus its own. Undefined cells are `Option<f64>`, not NaN,
//! so "no value" is a checkable state rather than a floating-point accident.

mod annotated;
mod factor;
mod row;
mod signal;
mod summary;

pub use annotated::{BacktestRow, ScoredRow, SignaledRow};
pub use factor::{FactorKind, FactorRow};
pub use row::{CleanRow, RawRow};
pub use signal::Signal;
pub use summary::PerformanceSummary;
