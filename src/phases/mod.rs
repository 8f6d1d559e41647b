//! Log parsing for per-phase node timings.

pub mod parse;
pub mod timings;

pub use parse::{parse_log_file, parse_reader};
pub use timings::PhaseTimings;
