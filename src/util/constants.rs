// LogTally - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "LogTally";

/// Application identifier used for config directories.
pub const APP_ID: &str = "LogTally";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Input
// =============================================================================

/// File extension required on input files (without the leading dot).
pub const LOG_FILE_EXTENSION: &str = "log";

/// Number of whitespace-delimited fields in a well-formed log line.
pub const LOG_LINE_FIELDS: usize = 4;

// =============================================================================
// Report layout
// =============================================================================

/// Default width of the level column in the table report.
pub const DEFAULT_LEVEL_WIDTH: usize = 16;

/// Narrowest level column accepted from config.
pub const MIN_LEVEL_WIDTH: usize = 4;

/// Widest level column accepted from config.
pub const MAX_LEVEL_WIDTH: usize = 64;

/// Default header label for the level column.
pub const DEFAULT_LEVEL_HEADER: &str = "Level";

/// Default header label for the count column.
pub const DEFAULT_COUNT_HEADER: &str = "Count";

/// Longest header label accepted from config.
pub const MAX_HEADER_LENGTH: usize = 64;

// =============================================================================
// Logging
// =============================================================================

/// Default log level when neither RUST_LOG, --debug nor config set one.
///
/// Kept at "warn" because stdout carries the report and stderr should stay
/// quiet on a clean run.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Log levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Maximum characters of a rejected line echoed into debug logs.
pub const DEBUG_MAX_LINE_PREVIEW: usize = 200;

// =============================================================================
// File names
// =============================================================================

/// Config file name within the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";
