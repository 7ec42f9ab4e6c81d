//! Raw and cleaned observation rows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One raw observation as delivered by the ingestor.
///
/// Price and volume arrive as free text and may carry thousands separators
/// or a currency glyph (`₹`, `$`). The cleaner decides whether they are
/// usable; this type makes no promises about their content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
    pub date: NaiveDate,
    pub price: String,
    pub volume: String,
}

/// One observation after cleaning: both fields parsed and finite.
///
/// Dates are assumed strictly ascending; ordering is an ingestor
/// precondition, not re-checked here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanRow {
    pub date: NaiveDate,
    pub price: f64,
    pub volume: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_row_serialization_roundtrip() {
        let row = CleanRow {
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            price: 103.25,
            volume: 50_000.0,
        };
        let json = serde_json::to_string(&row).unwrap();
        let deser: CleanRow = serde_json::from_str(&json).unwrap();
        assert_eq!(row, deser);
    }
}
