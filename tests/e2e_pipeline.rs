// LogTally - tests/e2e_pipeline.rs
//
// End-to-end tests for the load -> filter -> count -> render pipeline.
//
// These tests read real fixture files from disk through the same entry
// points the CLI uses. No mocks.

use logtally::app::pipeline::{normalise_level, run, RunOptions};
use logtally::core::export::{export, render_table, OutputFormat, TableStyle};
use logtally::core::filter::filter_by_level;
use logtally::core::parser::load_logs;
use logtally::core::summary::count_by_level;
use logtally::platform::fs::open_log_file;
use logtally::util::error::{InputError, LoadError, LogTallyError};
use std::path::PathBuf;

// =============================================================================
// Helpers
// =============================================================================

/// Absolute path to the on-disk fixture files.
fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn options(level: Option<&str>) -> RunOptions {
    RunOptions {
        level: level.map(normalise_level),
        require_log_extension: true,
    }
}

fn pairs(report_counts: &logtally::core::model::LevelCounts) -> Vec<(String, usize)> {
    report_counts
        .iter()
        .map(|(level, count)| (level.to_string(), count))
        .collect()
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn e2e_sample_unfiltered_counts_in_first_seen_order() {
    let report = run(&fixture("sample.log"), &options(None)).unwrap();
    assert_eq!(
        pairs(&report.counts),
        vec![("INFO".to_string(), 2), ("ERROR".to_string(), 2)]
    );
}

#[test]
fn e2e_sample_filtered_by_lowercase_argument() {
    let report = run(&fixture("sample.log"), &options(Some("error"))).unwrap();
    assert_eq!(pairs(&report.counts), vec![("ERROR".to_string(), 2)]);
    assert_eq!(report.records_loaded, 4);
}

#[test]
fn e2e_service_log_messages_kept_verbatim() {
    let reader = open_log_file(&fixture("service.log"), true).unwrap();
    let logs = load_logs(reader).unwrap();
    assert_eq!(logs.len(), 7);

    let warning = &logs.records()[2];
    assert_eq!(warning.level, "WARNING");
    assert_eq!(warning.message, "Retrying in  5s (attempt 1/3)");

    let counts = count_by_level(&logs);
    let levels: Vec<_> = counts.levels().collect();
    assert_eq!(levels, vec!["DEBUG", "ERROR", "WARNING", "INFO"]);
    assert_eq!(counts.get("DEBUG"), Some(3));
    assert_eq!(counts.total(), logs.len());
}

#[test]
fn e2e_filter_with_no_match_yields_empty_counts() {
    let reader = open_log_file(&fixture("service.log"), true).unwrap();
    let logs = load_logs(reader).unwrap();
    let counts = count_by_level(&filter_by_level(&logs, "CRITICAL"));
    assert!(counts.is_empty());
}

#[test]
fn e2e_empty_file_gives_empty_counts() {
    let report = run(&fixture("empty.log"), &options(None)).unwrap();
    assert!(report.counts.is_empty());
    assert_eq!(report.records_loaded, 0);
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn e2e_malformed_line_fails_whole_load() {
    let err = run(&fixture("malformed.log"), &options(None)).unwrap_err();
    match err {
        LogTallyError::Load(LoadError::Format {
            line_number,
            source,
        }) => {
            assert_eq!(line_number, 3);
            assert_eq!(source.line, "2024-01-15 10:00:00");
        }
        other => panic!("expected format error, got {other:?}"),
    }
}

#[test]
fn e2e_blank_line_is_not_skipped() {
    let err = run(&fixture("blank_line.log"), &options(None)).unwrap_err();
    assert!(
        matches!(
            err,
            LogTallyError::Load(LoadError::Format { line_number: 2, .. })
        ),
        "expected blank line 2 to fail, got {err:?}"
    );
}

#[test]
fn e2e_missing_file_reports_not_found() {
    let err = run(&fixture("does_not_exist.log"), &options(None)).unwrap_err();
    assert!(matches!(
        err,
        LogTallyError::Input(InputError::NotFound { .. })
    ));
}

#[test]
fn e2e_directory_reports_not_a_file() {
    let err = run(&fixture(""), &options(None)).unwrap_err();
    assert!(matches!(
        err,
        LogTallyError::Input(InputError::NotAFile { .. })
    ));
}

#[test]
fn e2e_non_log_extension_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample.txt");
    std::fs::copy(fixture("sample.log"), &path).unwrap();

    let err = run(&path, &options(None)).unwrap_err();
    assert!(matches!(
        err,
        LogTallyError::Input(InputError::WrongExtension { .. })
    ));

    let relaxed = RunOptions {
        require_log_extension: false,
        ..options(None)
    };
    assert_eq!(run(&path, &relaxed).unwrap().counts.total(), 4);
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn e2e_table_output_for_sample() {
    let report = run(&fixture("sample.log"), &options(None)).unwrap();
    let table = render_table(&report.counts, &TableStyle::default());
    let lines: Vec<_> = table.lines().collect();
    assert_eq!(lines[0], "Level            | Count");
    assert_eq!(lines[2], "INFO             | 2");
    assert_eq!(lines[3], "ERROR            | 2");
}

#[test]
fn e2e_json_output_for_filtered_sample() {
    let report = run(&fixture("sample.log"), &options(Some("info"))).unwrap();
    let mut buf = Vec::new();
    export(
        &report.counts,
        OutputFormat::Json,
        &TableStyle::default(),
        &mut buf,
    )
    .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    assert_eq!(value, serde_json::json!({ "INFO": 2 }));
}
