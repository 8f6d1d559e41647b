//! Pieces shared by the binaries: verbosity, logging setup, usage handling.

use clap::error::ErrorKind;
use clap::{ArgAction, Args, Parser};
use log::LevelFilter;
use std::process;

#[derive(Args, Debug, Clone, Copy)]
pub struct Verbosity {
    /// Increase log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Verbosity {
    pub fn level_filter(self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Install the stderr logger. Configuration comes from flags only.
pub fn init_logging(verbosity: Verbosity) {
    env_logger::Builder::new()
        .filter_level(verbosity.level_filter())
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();
}

/// Name the program was invoked as, for usage lines.
pub fn program_name() -> String {
    std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}

/// Parse the command line, or print `Usage: <program> <synopsis>` to stdout
/// and exit with status 1 when required arguments are missing.
///
/// `--help`, `--version` and other clap errors keep clap's behavior.
pub fn parse_or_usage<P: Parser>(synopsis: &str) -> P {
    match P::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.kind() == ErrorKind::MissingRequiredArgument => {
            println!("Usage: {} {}", program_name(), synopsis);
            process::exit(1);
        }
        Err(err) => err.exit(),
    }
}

/// Report a failed run on stderr and exit with status 1.
pub fn exit_on_error(result: crate::Result<()>) {
    if let Err(err) = result {
        eprintln!("Error: {:#}", err);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        verbosity: Verbosity,
    }

    #[test]
    fn verbosity_counts_flags() {
        let cli = TestCli::try_parse_from(["t"]).unwrap();
        assert_eq!(cli.verbosity.level_filter(), LevelFilter::Warn);

        let cli = TestCli::try_parse_from(["t", "-vv"]).unwrap();
        assert_eq!(cli.verbosity.level_filter(), LevelFilter::Debug);

        let cli = TestCli::try_parse_from(["t", "-v", "--verbose", "-vv"]).unwrap();
        assert_eq!(cli.verbosity.level_filter(), LevelFilter::Trace);
    }
}
