// LogTally - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation. Every error keeps its causal chain
// so the boundary can log the full story before exiting.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all LogTally operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum LogTallyError {
    /// The input path failed a pre-load check or could not be opened.
    Input(InputError),

    /// Loading the log stream failed.
    Load(LoadError),

    /// Configuration loading or validation failed.
    Config(ConfigError),

    /// Writing the report failed.
    Export(ExportError),
}

impl fmt::Display for LogTallyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input(e) => write!(f, "{e}"),
            Self::Load(e) => write!(f, "{e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Export(e) => write!(f, "Output error: {e}"),
        }
    }
}

impl std::error::Error for LogTallyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Input(e) => Some(e),
            Self::Load(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Export(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Format errors
// ---------------------------------------------------------------------------

/// A single line does not decompose into date, time, level and message.
///
/// Carries the offending line verbatim (after terminator stripping).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
    pub line: String,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Malformed log line: {:?}", self.line)
    }
}

impl std::error::Error for FormatError {}

// ---------------------------------------------------------------------------
// Load errors
// ---------------------------------------------------------------------------

/// Errors that abort a `load_logs` call.
#[derive(Debug)]
pub enum LoadError {
    /// A line failed structural parsing. Loading stopped at this line.
    Format {
        line_number: u64,
        source: FormatError,
    },

    /// The underlying stream failed mid-read (includes invalid UTF-8).
    Io { line_number: u64, source: io::Error },
}

impl LoadError {
    /// The format error, if this load failed on a malformed line.
    pub fn format_error(&self) -> Option<&FormatError> {
        match self {
            Self::Format { source, .. } => Some(source),
            Self::Io { .. } => None,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format {
                line_number,
                source,
            } => write!(f, "Line {line_number}: {source}"),
            Self::Io {
                line_number,
                source,
            } => write!(f, "Read error at line {line_number}: {source}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Format { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<LoadError> for LogTallyError {
    fn from(e: LoadError) -> Self {
        Self::Load(e)
    }
}

// ---------------------------------------------------------------------------
// Input errors
// ---------------------------------------------------------------------------

/// Errors raised while validating and opening the input path.
#[derive(Debug)]
pub enum InputError {
    /// The path does not exist.
    NotFound { path: PathBuf },

    /// The path exists but is not a regular file.
    NotAFile { path: PathBuf },

    /// The file does not carry the required `.log` extension.
    WrongExtension { path: PathBuf },

    /// The file could not be opened.
    Open { path: PathBuf, source: io::Error },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => {
                write!(f, "Log file not found: '{}'", path.display())
            }
            Self::NotAFile { path } => {
                write!(f, "Path is not a file: '{}'", path.display())
            }
            Self::WrongExtension { path } => write!(
                f,
                "Log file must have a .log extension: '{}'",
                path.display()
            ),
            Self::Open { path, source } => {
                write!(f, "Cannot open '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Open { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<InputError> for LogTallyError {
    fn from(e: InputError) -> Self {
        Self::Input(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to writing the report.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the report.
    Io { source: io::Error },

    /// CSV serialisation error.
    Csv { source: csv::Error },

    /// JSON serialisation error.
    Json { source: serde_json::Error },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { source } => write!(f, "write failed: {source}"),
            Self::Csv { source } => write!(f, "CSV export failed: {source}"),
            Self::Json { source } => write!(f, "JSON export failed: {source}"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source } => Some(source),
            Self::Csv { source } => Some(source),
            Self::Json { source } => Some(source),
        }
    }
}

impl From<ExportError> for LogTallyError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for LogTallyError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for LogTally results.
pub type Result<T> = std::result::Result<T, LogTallyError>;
