//! Presentation — summary printout, signal tables, and CSV export.
//!
//! All formatting lives here; the core returns plain numbers and the
//! presenter decides how the user sees them. Undefined cells render as
//! empty strings in CSV and as "undefined" in the console.

use anyhow::{Context, Result};
use factorlab_core::domain::{BacktestRow, Signal};
use factorlab_core::PipelineOutput;

/// Annotated-series CSV column order, matching the processed-data export.
const CSV_COLUMNS: [&str; 15] = [
    "Date",
    "Close",
    "Volume",
    "Momentum",
    "Returns",
    "Volatility",
    "VolumeFactor",
    "Momentum_z",
    "Volatility_z",
    "VolumeFactor_z",
    "MFT_Score",
    "Signal",
    "Signal_Label",
    "StrategyReturn",
    "CumulativeReturn",
];

fn fmt_opt(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.6}")).unwrap_or_default()
}

// ─── Console output ─────────────────────────────────────────────────

pub fn print_summary(output: &PipelineOutput) {
    let summary = &output.summary;
    println!("Performance Metrics");
    println!(
        "  Annualized Return:     {:.4}%",
        summary.annualized_return * 100.0
    );
    println!(
        "  Annualized Volatility: {:.4}%",
        summary.annualized_volatility * 100.0
    );
    match summary.sharpe_ratio {
        Some(sharpe) => println!("  Sharpe Ratio:          {sharpe:.4}"),
        None => println!("  Sharpe Ratio:          undefined"),
    }
    if output.rows_dropped > 0 {
        println!("  ({} unparsable row(s) excluded)", output.rows_dropped);
    }
    for warning in &output.warnings {
        println!("  warning: {warning}");
    }
}

/// Print the last `n` annotated rows.
pub fn print_tail(series: &[BacktestRow], n: usize) {
    println!("\nSample Data with Signals");
    println!(
        "{:<12} {:>10} {:>10} {:>8} {:>10} {:>10}",
        "Date", "Close", "Score", "Signal", "StratRet", "CumReturn"
    );
    for row in series.iter().skip(series.len().saturating_sub(n)) {
        println!(
            "{:<12} {:>10.2} {:>10} {:>8} {:>10} {:>10.4}",
            row.date.to_string(),
            row.price,
            fmt_opt(row.score),
            row.signal.label(),
            fmt_opt(row.strategy_return),
            row.cumulative_return,
        );
    }
}

/// Print the buy and sell rows as two separate tables.
pub fn print_signal_rows(series: &[BacktestRow]) {
    for (title, signal) in [("Buy Signals", Signal::Buy), ("Sell Signals", Signal::Sell)] {
        println!("\n{title}");
        let rows: Vec<&BacktestRow> = series.iter().filter(|r| r.signal == signal).collect();
        if rows.is_empty() {
            println!("  (none)");
            continue;
        }
        for row in rows {
            println!(
                "  {:<12} {:>10.2} {}",
                row.date.to_string(),
                row.price,
                row.signal.label()
            );
        }
    }
}

// ─── CSV export ─────────────────────────────────────────────────────

/// Export the full annotated series as CSV with the fixed column order.
pub fn export_csv(series: &[BacktestRow]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(CSV_COLUMNS)?;

    for row in series {
        wtr.write_record([
            row.date.to_string(),
            format!("{:.6}", row.price),
            format!("{:.6}", row.volume),
            format!("{:.6}", row.momentum),
            format!("{:.6}", row.returns),
            format!("{:.6}", row.volatility),
            format!("{:.6}", row.volume_factor),
            fmt_opt(row.momentum_z),
            fmt_opt(row.volatility_z),
            fmt_opt(row.volume_factor_z),
            fmt_opt(row.score),
            row.signal.as_i8().to_string(),
            row.signal.label().to_string(),
            fmt_opt(row.strategy_return),
            format!("{:.6}", row.cumulative_return),
        ])?;
    }

    let bytes = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_row() -> BacktestRow {
        BacktestRow {
            date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            price: 101.5,
            volume: 2000.0,
            returns: 0.015,
            momentum: 0.08,
            volatility: 120.0,
            volume_factor: 0.5,
            momentum_z: Some(1.25),
            volatility_z: None,
            volume_factor_z: Some(-0.5),
            score: None,
            signal: Signal::Buy,
            strategy_return: None,
            cumulative_return: 1.1,
        }
    }

    #[test]
    fn export_has_fixed_header_order() {
        let csv = export_csv(&[sample_row()]).unwrap();
        let header = csv.lines().next().unwrap();
        assert_eq!(header, CSV_COLUMNS.join(","));
    }

    #[test]
    fn undefined_cells_export_as_empty() {
        let csv = export_csv(&[sample_row()]).unwrap();
        let line = csv.lines().nth(1).unwrap();
        let cells: Vec<&str> = line.split(',').collect();
        assert_eq!(cells.len(), CSV_COLUMNS.len());
        assert_eq!(cells[0], "2024-02-01");
        assert_eq!(cells[7], "1.250000"); // Momentum_z
        assert_eq!(cells[8], ""); // Volatility_z undefined
        assert_eq!(cells[10], ""); // MFT_Score undefined
        assert_eq!(cells[11], "1"); // Signal
        assert_eq!(cells[12], "Buy");
        assert_eq!(cells[13], ""); // StrategyReturn undefined
    }

    #[test]
    fn empty_series_exports_header_only() {
        let csv = export_csv(&[]).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }
}
