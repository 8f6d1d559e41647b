use std::num::ParseIntError;
use std::path::PathBuf;

/// Failures while turning a log into [`crate::PhaseTimings`].
#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    #[error("failed to read log file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(
        "{}:{line}: timing record for node {node:?} appears before any phase header",
        path.display()
    )]
    RecordBeforePhase {
        path: PathBuf,
        line: usize,
        node: String,
    },

    #[error("{}:{line}: invalid microseconds value {text:?}: {source}", path.display())]
    InvalidMicros {
        path: PathBuf,
        line: usize,
        text: String,
        source: ParseIntError,
    },

    #[error("invalid line pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Failures when asking a parsed log for a phase it cannot provide.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum LookupError {
    #[error("no phase named {phase:?} in log")]
    MissingPhase { phase: String },

    #[error("phase {phase:?} has no timing records")]
    EmptyPhase { phase: String },
}
