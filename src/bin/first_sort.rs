use anyhow::Context;
use clap::Parser;
use log::info;
use std::path::PathBuf;

use phaselog::Result;
use phaselog::cli::{self, Verbosity};

const SORT_PHASE: &str = "sort";

#[derive(Parser)]
#[command(name = "first-sort", version)]
#[command(about = "Print the first \"sort\" timing of each benchmark log", long_about = None)]
struct Cli {
    /// Benchmark logs, printed in the order given
    #[arg(required = true)]
    files: Vec<PathBuf>,

    #[command(flatten)]
    verbosity: Verbosity,
}

fn run(cli: Cli) -> Result<()> {
    for file in &cli.files {
        info!("parsing {}", file.display());
        let timings = phaselog::parse_log_file(file)?;
        let usecs = timings
            .first(SORT_PHASE)
            .with_context(|| format!("in {}", file.display()))?;
        println!("{}", usecs);
    }
    Ok(())
}

fn main() {
    let cli: Cli = cli::parse_or_usage("file1 [file2 [file3 [...] ] ]");
    cli::init_logging(cli.verbosity);
    cli::exit_on_error(run(cli));
}
