use anyhow::Context;
use clap::Parser;
use log::info;
use std::path::PathBuf;

use phaselog::Result;
use phaselog::cli::{self, Verbosity};

#[derive(Parser)]
#[command(name = "phase-values", version)]
#[command(about = "Print every timing of one phase, for each benchmark log", long_about = None)]
struct Cli {
    /// Phase whose timings are printed
    phase: String,

    /// Benchmark logs, printed in the order given
    #[arg(required = true)]
    files: Vec<PathBuf>,

    #[command(flatten)]
    verbosity: Verbosity,
}

fn run(cli: Cli) -> Result<()> {
    for file in &cli.files {
        info!("parsing {} for phase {:?}", file.display(), cli.phase);
        let timings = phaselog::parse_log_file(file)?;
        let values = timings
            .phase(&cli.phase)
            .with_context(|| format!("in {}", file.display()))?;
        for usecs in values {
            println!("{}", usecs);
        }
    }
    Ok(())
}

fn main() {
    let cli: Cli = cli::parse_or_usage("phase file1 [file2 [file3 [...] ] ]");
    cli::init_logging(cli.verbosity);
    cli::exit_on_error(run(cli));
}
