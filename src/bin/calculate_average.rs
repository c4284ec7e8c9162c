use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use brc_tools::summary;

#[derive(Parser)]
#[command(
    name = "calculate-average",
    about = "Per-station min/mean/max over a measurements file",
    version
)]
struct Cli {
    /// Measurements file, one station;temperature record per line
    measurements: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let buf = fs::read(&cli.measurements)
        .with_context(|| format!("failed to read measurements: {}", cli.measurements.display()))?;
    let rows = summary::summarize(&buf)?;

    let stdout = io::stdout().lock();
    let mut out = BufWriter::new(stdout);
    summary::write_summary(&mut out, &rows)?;
    out.flush()?;

    Ok(())
}
