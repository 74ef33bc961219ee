// LogTally - core/filter.rs
//
// Severity-level filtering over a loaded collection.
// Core layer: pure logic, no I/O.

use crate::core::model::{LogCollection, LogRecord};

/// Returns true if the record's level is exactly `level`.
///
/// Case-sensitive. Callers normalise user input before filtering.
pub fn matches_level(record: &LogRecord, level: &str) -> bool {
    record.level == level
}

/// Keep only records whose level exactly equals `level`.
///
/// Order is preserved. No match yields an empty collection, not an error.
pub fn filter_by_level(logs: &LogCollection, level: &str) -> LogCollection {
    let filtered: LogCollection = logs
        .iter()
        .filter(|record| matches_level(record, level))
        .cloned()
        .collect();

    tracing::debug!(
        level,
        before = logs.len(),
        after = filtered.len(),
        "Level filter applied"
    );
    filtered
}
