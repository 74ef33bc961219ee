// LogTally - core/parser.rs
//
// Line parsing and fail-fast stream loading.
// Core layer: accepts BufRead implementors, never touches the filesystem.

use crate::core::model::{LogCollection, LogRecord};
use crate::util::constants;
use crate::util::error::{FormatError, LoadError};
use std::io::BufRead;

/// Split off the next field at the first whitespace run.
///
/// Returns the field and the remainder with that whitespace run removed.
/// `None` when there is no whitespace left or the field would be empty.
fn split_field(rest: &str) -> Option<(&str, &str)> {
    let end = rest.find(char::is_whitespace)?;
    if end == 0 {
        return None;
    }
    let (field, tail) = rest.split_at(end);
    Some((field, tail.trim_start()))
}

/// Parse one log line into a [`LogRecord`].
///
/// The line is split on its first three whitespace runs. Whatever follows the
/// third run is the message, kept verbatim including inner spacing. The line
/// must yield exactly four non-empty parts; anything else (too few tokens,
/// leading whitespace, a blank line) is a [`FormatError`] carrying the line.
pub fn parse_line(line: &str) -> Result<LogRecord, FormatError> {
    let malformed = || FormatError {
        line: line.to_string(),
    };

    let (date, rest) = split_field(line).ok_or_else(malformed)?;
    let (time, rest) = split_field(rest).ok_or_else(malformed)?;
    let (level, message) = split_field(rest).ok_or_else(malformed)?;
    if message.is_empty() {
        return Err(malformed());
    }

    Ok(LogRecord {
        date: date.to_string(),
        time: time.to_string(),
        level: level.to_string(),
        message: message.to_string(),
    })
}

/// Load every line of `reader` into a [`LogCollection`].
///
/// Trailing whitespace and line terminators are stripped before parsing.
/// Blank lines are not skipped and fail like any other malformed line.
///
/// Loading stops at the first bad line: no further lines are read and no
/// partial collection is returned. Read failures (including invalid UTF-8)
/// surface as [`LoadError::Io`]. The reader is consumed and dropped before
/// this function returns on every path.
pub fn load_logs<R: BufRead>(reader: R) -> Result<LogCollection, LoadError> {
    let mut records = Vec::new();

    for (line_idx, line_result) in reader.lines().enumerate() {
        let line_number = (line_idx as u64) + 1;

        let raw = line_result.map_err(|source| LoadError::Io {
            line_number,
            source,
        })?;
        let line = raw.trim_end();

        match parse_line(line) {
            Ok(record) => records.push(record),
            Err(source) => {
                tracing::debug!(
                    line_number,
                    preview = %preview(line),
                    expected_fields = constants::LOG_LINE_FIELDS,
                    "Aborting load on malformed line"
                );
                return Err(LoadError::Format {
                    line_number,
                    source,
                });
            }
        }
    }

    tracing::debug!(records = records.len(), "Log stream loaded");
    Ok(LogCollection::new(records))
}

/// Truncate a line for debug output on a char boundary.
fn preview(line: &str) -> &str {
    match line.char_indices().nth(constants::DEBUG_MAX_LINE_PREVIEW) {
        Some((idx, _)) => &line[..idx],
        None => line,
    }
}
