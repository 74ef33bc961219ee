// LogTally - app/pipeline.rs
//
// Orchestrates one run: open -> load -> optional filter -> count.
// The input file is opened and released inside `run`; nothing outlives it.

use crate::core::filter::filter_by_level;
use crate::core::model::LevelCounts;
use crate::core::parser::load_logs;
use crate::core::summary::count_by_level;
use crate::platform::fs::open_log_file;
use crate::util::error::Result;
use std::path::Path;
use std::time::Instant;

/// Options for a pipeline run.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Exact level to keep. Passed to the core unchanged.
    pub level: Option<String>,
    /// Reject input files without a `.log` extension.
    pub require_log_extension: bool,
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct Report {
    /// Per-level counts in first-seen order.
    pub counts: LevelCounts,
    /// Records loaded from the file.
    pub records_loaded: usize,
    /// Records that survived the level filter.
    pub records_counted: usize,
}

/// Normalise a user-supplied level filter.
///
/// Levels are matched case-sensitively by the core, so the boundary
/// upper-cases whatever the user typed.
pub fn normalise_level(raw: &str) -> String {
    raw.to_uppercase()
}

/// Run the whole pipeline over the file at `path`.
pub fn run(path: &Path, options: &RunOptions) -> Result<Report> {
    let started = Instant::now();

    let reader = open_log_file(path, options.require_log_extension)?;
    let logs = load_logs(reader)?;
    let records_loaded = logs.len();

    let filtered;
    let counted = match options.level.as_deref() {
        Some(level) => {
            filtered = filter_by_level(&logs, level);
            &filtered
        }
        None => &logs,
    };
    let records_counted = counted.len();
    let counts = count_by_level(counted);

    tracing::info!(
        path = %path.display(),
        level = options.level.as_deref().unwrap_or("*"),
        records_loaded,
        records_counted,
        levels = counts.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Pipeline completed"
    );

    Ok(Report {
        counts,
        records_loaded,
        records_counted,
    })
}
