use crate::errors::ParseError;
use crate::phases::timings::PhaseTimings;
use log::{debug, trace, warn};
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// `Phase "sort":`
const PHASE_HEADER_RE: &str = r#"^Phase "([^"]*)":$"#;

/// `   node  3: 1204518 microsecs :: 1205 millisecs :: 1 secs`
///
/// Exactly three indentation characters. Captures:
/// 1) node id
/// 2) microseconds
/// 3) milliseconds (unused)
/// 4) seconds (unused)
const TIMING_RECORD_RE: &str =
    r#"^[ \t]{3}node +([^:]*): ([^ ]*) microsecs :: ([^ ]*) millisecs :: ([^ ]*) secs$"#;

/// What a single log line turned out to be.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Header(&'a str),
    Record { node: &'a str, micros: &'a str },
    Other,
}

struct LinePatterns {
    header: Regex,
    record: Regex,
}

impl LinePatterns {
    fn new() -> Result<Self, ParseError> {
        Ok(Self {
            header: Regex::new(PHASE_HEADER_RE)?,
            record: Regex::new(TIMING_RECORD_RE)?,
        })
    }

    fn classify<'a>(&self, line: &'a str) -> Line<'a> {
        if let Some(caps) = self.header.captures(line) {
            return Line::Header(caps.get(1).map_or("", |m| m.as_str()));
        }
        if let Some(caps) = self.record.captures(line) {
            return Line::Record {
                node: caps.get(1).map_or("", |m| m.as_str()),
                micros: caps.get(2).map_or("", |m| m.as_str()),
            };
        }
        Line::Other
    }
}

/// Parse a benchmark log file into its phase timings.
pub fn parse_log_file(path: impl AsRef<Path>) -> Result<PhaseTimings, ParseError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ParseError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_reader(BufReader::new(file), path)
}

/// Parse log lines from `reader`. `origin` is only used in error messages.
///
/// Lines that are neither a phase header nor a timing record are skipped.
/// A timing record before the first header is an error.
pub fn parse_reader<R: BufRead>(reader: R, origin: &Path) -> Result<PhaseTimings, ParseError> {
    let patterns = LinePatterns::new()?;

    let mut out = PhaseTimings::new();
    let mut current: Option<String> = None;

    for (lineno, line) in reader.lines().enumerate() {
        let lno = lineno + 1;
        let line = line.map_err(|source| ParseError::Read {
            path: origin.to_path_buf(),
            source,
        })?;

        match patterns.classify(&line) {
            Line::Header(name) => {
                if let Some(dropped) = out.reset_phase(name).filter(|n| *n > 0) {
                    warn!(
                        "{}:{}: phase {:?} restarted, discarding {} earlier records",
                        origin.display(),
                        lno,
                        name,
                        dropped
                    );
                }
                debug!("{}:{}: phase {:?}", origin.display(), lno, name);
                current = Some(name.to_owned());
            }
            Line::Record { node, micros } => {
                let Some(phase) = current.as_deref() else {
                    return Err(ParseError::RecordBeforePhase {
                        path: origin.to_path_buf(),
                        line: lno,
                        node: node.to_owned(),
                    });
                };
                let value: i64 = micros.parse().map_err(|source| ParseError::InvalidMicros {
                    path: origin.to_path_buf(),
                    line: lno,
                    text: micros.to_owned(),
                    source,
                })?;
                trace!("{}: node {} -> {} usecs", phase, node, value);
                out.push(phase, value);
            }
            Line::Other => {}
        }
    }

    Ok(out)
}
