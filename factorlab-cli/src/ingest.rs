//! CSV ingestion — maps an input file into raw pipeline rows.
//!
//! Only the date is parsed here; price and volume stay as raw text so the
//! core's cleaner owns all numeric normalization. A bad date is a file
//! problem and fails the run, unlike a bad numeric cell which the cleaner
//! silently excludes.

use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use factorlab_core::domain::RawRow;

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%d-%m-%Y"];

fn parse_date(raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date);
        }
    }
    bail!("unrecognized date '{trimmed}' (expected one of {DATE_FORMATS:?})")
}

fn find_column(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
        .with_context(|| format!("input CSV has no '{name}' column"))
}

/// Read Date/Close/Volume rows from a CSV file, in file order.
pub fn read_csv(path: &Path) -> Result<Vec<RawRow>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let headers = reader.headers()?.clone();
    let date_col = find_column(&headers, "Date")?;
    let price_col = find_column(&headers, "Close")?;
    let volume_col = find_column(&headers, "Volume")?;

    let mut rows = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("malformed CSV record on row {}", line + 2))?;
        let date = parse_date(record.get(date_col).unwrap_or(""))
            .with_context(|| format!("bad date on row {}", line + 2))?;
        rows.push(RawRow {
            date,
            price: record.get(price_col).unwrap_or("").to_string(),
            volume: record.get(volume_col).unwrap_or("").to_string(),
        });
    }
    Ok(rows)
}
