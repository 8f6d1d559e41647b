//! Per-phase benchmark timing logs.
//!
//! A benchmark run prints one `Phase "<name>":` header per phase followed by
//! one line per node with its elapsed time. This crate turns such a log into
//! an ordered phase -> microseconds mapping and ships three small binaries
//! that print parts of it.

pub mod cli;
pub mod errors;
pub mod phases;

pub type Result<T> = anyhow::Result<T>;

pub use errors::{LookupError, ParseError};
pub use phases::{PhaseTimings, parse_log_file, parse_reader};
