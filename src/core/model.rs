// LogTally - core/model.rs
//
// Core data model types. Pure data definitions with no I/O.
//
// These types are the shared vocabulary across all layers.

use indexmap::IndexMap;
use serde::Serialize;

// =============================================================================
// Log Record (output of line parsing)
// =============================================================================

/// A single parsed log line.
///
/// All four fields are opaque text. The level is kept exactly as written;
/// case normalisation, if any, belongs to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// First token, not validated as a calendar date.
    pub date: String,

    /// Second token, not validated as a time of day.
    pub time: String,

    /// Severity level token (e.g. "INFO", "ERROR").
    pub level: String,

    /// Remainder of the line after the third whitespace run, verbatim.
    pub message: String,
}

// =============================================================================
// Log Collection
// =============================================================================

/// Ordered sequence of records in file order.
///
/// Only ever produced whole: a failed load yields no collection at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogCollection {
    records: Vec<LogRecord>,
}

impl LogCollection {
    pub fn new(records: Vec<LogRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LogRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }
}

impl FromIterator<LogRecord> for LogCollection {
    fn from_iter<I: IntoIterator<Item = LogRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a LogCollection {
    type Item = &'a LogRecord;
    type IntoIter = std::slice::Iter<'a, LogRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// =============================================================================
// Level Counts
// =============================================================================

/// Occurrences per severity level, iterated in first-seen order.
///
/// Serialises as a JSON object whose keys keep that order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LevelCounts {
    counts: IndexMap<String, usize>,
}

impl LevelCounts {
    /// Bump the count for `level`, appending it if this is its first sighting.
    pub(crate) fn record(&mut self, level: &str) {
        match self.counts.get_mut(level) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(level.to_string(), 1);
            }
        }
    }

    pub fn get(&self, level: &str) -> Option<usize> {
        self.counts.get(level).copied()
    }

    /// Number of distinct levels.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts. Equals the length of the counted collection.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// `(level, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.counts.iter().map(|(level, count)| (level.as_str(), *count))
    }

    /// Distinct levels in first-seen order.
    pub fn levels(&self) -> impl Iterator<Item = &str> + '_ {
        self.counts.keys().map(String::as_str)
    }
}
