use anyhow::Context;
use clap::Parser;
use log::info;
use std::path::PathBuf;

use phaselog::Result;
use phaselog::cli::{self, Verbosity};

#[derive(Parser)]
#[command(name = "phaselog", version)]
#[command(about = "Print every phase and per-node timing of a benchmark log", long_about = None)]
struct Cli {
    /// Benchmark log to parse
    file: PathBuf,

    /// Print the phase mapping as a JSON object instead of the rank listing
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    verbosity: Verbosity,
}

fn run(cli: Cli) -> Result<()> {
    info!("parsing {}", cli.file.display());
    let timings = phaselog::parse_log_file(&cli.file)?;

    if cli.json {
        let json = serde_json::to_string_pretty(&timings)
            .with_context(|| format!("serialize timings of {}", cli.file.display()))?;
        println!("{}", json);
        return Ok(());
    }

    for (phase, values) in timings.iter() {
        println!("{}", phase);
        for (rank, usecs) in values.iter().enumerate() {
            println!("  rank {}: {} usecs", rank, usecs);
        }
    }

    Ok(())
}

fn main() {
    let cli: Cli = cli::parse_or_usage("file");
    cli::init_logging(cli.verbosity);
    cli::exit_on_error(run(cli));
}
