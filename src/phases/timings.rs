use crate::errors::LookupError;
use indexmap::IndexMap;
use serde::Serialize;

/// Phase name -> microseconds per node line, both in the order they were seen.
///
/// Equality compares contents only; use [`PhaseTimings::names`] when the
/// phase order matters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PhaseTimings(IndexMap<String, Vec<i64>>);

impl PhaseTimings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) a phase with an empty sequence.
    ///
    /// A phase that already exists keeps its position. Returns how many
    /// records the previous sequence held, if there was one.
    pub fn reset_phase(&mut self, name: &str) -> Option<usize> {
        match self.0.get_mut(name) {
            Some(values) => {
                let dropped = values.len();
                values.clear();
                Some(dropped)
            }
            None => {
                self.0.insert(name.to_owned(), Vec::new());
                None
            }
        }
    }

    /// Append a record to `phase`, creating the phase if needed.
    pub fn push(&mut self, phase: &str, micros: i64) {
        match self.0.get_mut(phase) {
            Some(values) => values.push(micros),
            None => {
                self.0.insert(phase.to_owned(), vec![micros]);
            }
        }
    }

    pub fn phase(&self, name: &str) -> Result<&[i64], LookupError> {
        self.0
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| LookupError::MissingPhase {
                phase: name.to_owned(),
            })
    }

    /// First record of `name`.
    pub fn first(&self, name: &str) -> Result<i64, LookupError> {
        self.phase(name)?
            .first()
            .copied()
            .ok_or_else(|| LookupError::EmptyPhase {
                phase: name.to_owned(),
            })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[i64])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Vec<i64>)> for PhaseTimings {
    fn from_iter<I: IntoIterator<Item = (String, Vec<i64>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
