use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

use brc_tools::generate::{self, Outcome};

#[derive(Parser)]
#[command(
    name = "create-measurements",
    about = "Generate a station;temperature measurements file from a name list",
    version
)]
struct Cli {
    /// Text file with one station name per line
    names: PathBuf,

    /// Destination file; left untouched if it already exists
    output: PathBuf,

    /// Number of records to generate
    count: u64,

    /// Seed for the random generator, for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    match generate::create_measurements(&cli.names, &cli.output, cli.count, &mut rng)? {
        Outcome::Written => {}
        Outcome::SkippedExisting => {
            eprintln!("{} already exists", cli.output.display());
        }
    }

    Ok(())
}
