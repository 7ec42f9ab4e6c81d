//! FactorLab CLI — run the multi-factor pipeline over a CSV file.
//!
//! Reads a CSV with Date, Close, Volume columns, runs the scoring
//! pipeline, prints the performance summary and recent signal rows, and
//! optionally writes the fully annotated series back out as CSV.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use factorlab_core::{run_pipeline, PipelineConfig};

mod ingest;
mod present;

#[derive(Parser)]
#[command(
    name = "factorlab",
    about = "Multi-factor trading signal pipeline over a daily price/volume CSV"
)]
struct Cli {
    /// Input CSV with Date, Close, Volume columns.
    input: PathBuf,

    /// Write the annotated series to this CSV file.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Rows of the annotated series to print.
    #[arg(long, default_value_t = 20)]
    tail: usize,

    /// Rolling window for factor computation.
    #[arg(long, default_value_t = 20)]
    window: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.window < 2 {
        bail!("--window must be at least 2");
    }

    let rows = ingest::read_csv(&cli.input)?;
    let config = PipelineConfig {
        window: cli.window,
        ..Default::default()
    };
    let output = run_pipeline(&rows, &config)?;

    present::print_summary(&output);
    present::print_tail(&output.series, cli.tail);
    present::print_signal_rows(&output.series);

    if let Some(path) = &cli.out {
        let csv = present::export_csv(&output.series)?;
        std::fs::write(path, csv)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("\nWrote annotated series to {}", path.display());
    }
    Ok(())
}
