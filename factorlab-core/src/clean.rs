//! Cleaner — normalizes raw textual numeric fields, drops unusable rows.
//!
//! Malformed input is never an error here: a field that fails to parse
//! makes the whole row missing, and missing rows are excluded rather than
//! imputed. An entirely empty result is a valid (degenerate) output that
//! the factor stage turns into an explicit insufficient-data error.

use crate::domain::{CleanRow, RawRow};

/// Outcome of the cleaning stage.
#[derive(Debug, Clone)]
pub struct CleanedSeries {
    pub rows: Vec<CleanRow>,
    /// Rows excluded because price or volume failed to parse.
    pub dropped: usize,
}

/// Strip known decorations (thousands separator, rupee and dollar glyphs)
/// and parse as a decimal number. Non-finite results count as unparsable.
fn parse_numeric(raw: &str) -> Option<f64> {
    let stripped = raw.trim().replace([',', '₹', '$'], "");
    let value: f64 = stripped.parse().ok()?;
    value.is_finite().then_some(value)
}

/// Parse both fields of every row, excluding rows with any missing field.
pub fn clean_rows(rows: &[RawRow]) -> CleanedSeries {
    let mut out = Vec::with_capacity(rows.len());
    let mut dropped = 0;
    for row in rows {
        match (parse_numeric(&row.price), parse_numeric(&row.volume)) {
            (Some(price), Some(volume)) => out.push(CleanRow {
                date: row.date,
                price,
                volume,
            }),
            _ => dropped += 1,
        }
    }
    CleanedSeries { rows: out, dropped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn raw(price: &str, volume: &str) -> RawRow {
        RawRow {
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            price: price.to_string(),
            volume: volume.to_string(),
        }
    }

    #[test]
    fn parses_decorated_numbers() {
        assert_eq!(parse_numeric("1,234.5"), Some(1234.5));
        assert_eq!(parse_numeric("$99.25"), Some(99.25));
        assert_eq!(parse_numeric("₹1,00,000"), Some(100000.0));
        assert_eq!(parse_numeric(" 42 "), Some(42.0));
        assert_eq!(parse_numeric("-0.5"), Some(-0.5));
    }

    #[test]
    fn rejects_garbage_and_non_finite() {
        assert_eq!(parse_numeric(""), None);
        assert_eq!(parse_numeric("n/a"), None);
        assert_eq!(parse_numeric("12.3.4"), None);
        assert_eq!(parse_numeric("NaN"), None);
        assert_eq!(parse_numeric("inf"), None);
    }

    #[test]
    fn excludes_rows_with_any_missing_field() {
        let rows = vec![
            raw("100.0", "1,000"),
            raw("bad", "2000"),
            raw("102.0", ""),
            raw("$103.5", "3000"),
        ];
        let cleaned = clean_rows(&rows);
        assert_eq!(cleaned.rows.len(), 2);
        assert_eq!(cleaned.dropped, 2);
        assert_eq!(cleaned.rows[0].price, 100.0);
        assert_eq!(cleaned.rows[0].volume, 1000.0);
        assert_eq!(cleaned.rows[1].price, 103.5);
    }

    #[test]
    fn no_nan_leaks_past_cleaner() {
        let rows = vec![raw("NaN", "1000"), raw("100", "NaN"), raw("1e400", "5")];
        let cleaned = clean_rows(&rows);
        assert!(cleaned.rows.is_empty());
        assert_eq!(cleaned.dropped, 3);
    }

    #[test]
    fn empty_input_is_valid() {
        let cleaned = clean_rows(&[]);
        assert!(cleaned.rows.is_empty());
        assert_eq!(cleaned.dropped, 0);
    }
}
