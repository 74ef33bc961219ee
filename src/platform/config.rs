// LogTally - platform/config.rs
//
// Config directory resolution and config.toml loading with startup
// validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::core::export::{OutputFormat, TableStyle};
use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Default location of config.toml for this platform.
///
/// `None` if the platform config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    let path = ProjectDirs::from("", "", constants::APP_ID)
        .map(|dirs| dirs.config_dir().join(constants::CONFIG_FILE_NAME));
    match &path {
        Some(p) => tracing::debug!(config = %p.display(), "Config path resolved"),
        None => tracing::warn!("Could not determine platform config directory"),
    }
    path
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility -- a newer
/// config file can be used with an older binary without crashing.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[logging]` section.
    pub logging: LoggingSection,
    /// `[output]` section.
    pub output: OutputSection,
    /// `[input]` section.
    pub input: InputSection,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// `[output]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct OutputSection {
    /// "table", "json" or "csv".
    pub format: Option<String>,
    /// Level column width for the table.
    pub level_width: Option<usize>,
    /// Table header label for the level column.
    pub level_header: Option<String>,
    /// Table header label for the count column.
    pub count_header: Option<String>,
}

/// `[input]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct InputSection {
    /// Reject input files without a `.log` extension.
    pub require_log_extension: Option<bool>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce warnings and fall back to defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
    /// Report format when the CLI does not override it.
    pub format: OutputFormat,
    /// Table layout.
    pub table: TableStyle,
    /// Whether input files must end in `.log`.
    pub require_log_extension: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: None,
            format: OutputFormat::default(),
            table: TableStyle::default(),
            require_log_extension: true,
        }
    }
}

/// Read and parse `path`. `Ok(None)` when the file does not exist.
fn read_raw(path: &Path) -> Result<Option<RawConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let raw = toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(raw))
}

/// Load and validate config from `path`.
///
/// With `explicit` unset (the platform default location) a missing file
/// gives defaults silently, and an unreadable or unparseable file gives
/// defaults plus a warning. With `explicit` set (the user named the file)
/// those conditions are hard errors.
///
/// Out-of-range values never fail the load; they are returned as warnings.
pub fn load_config(
    path: &Path,
    explicit: bool,
) -> Result<(AppConfig, Vec<ConfigError>), ConfigError> {
    let mut warnings: Vec<ConfigError> = Vec::new();

    let raw = match read_raw(path) {
        Ok(Some(raw)) => raw,
        Ok(None) if explicit => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "config file does not exist",
                ),
            });
        }
        Ok(None) => {
            tracing::debug!(path = %path.display(), "No config.toml found; using defaults");
            return Ok((AppConfig::default(), warnings));
        }
        Err(e) if explicit => return Err(e),
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring config file; using defaults");
            warnings.push(e);
            return Ok((AppConfig::default(), warnings));
        }
    };

    tracing::info!(path = %path.display(), "Loaded config.toml");
    let config = validate(raw, &mut warnings);

    if !warnings.is_empty() {
        tracing::warn!(
            count = warnings.len(),
            "Config validation produced warnings"
        );
    }

    Ok((config, warnings))
}

/// Validate each field against named constants, accumulating all problems.
fn validate(raw: RawConfig, warnings: &mut Vec<ConfigError>) -> AppConfig {
    let mut config = AppConfig::default();

    // -- Logging: level --
    if let Some(level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(ConfigError::ValueOutOfRange {
                field: "logging.level".to_string(),
                value: level,
                expected: constants::VALID_LOG_LEVELS.join(", "),
            });
        }
    }

    // -- Output: format --
    if let Some(format) = raw.output.format {
        match format.parse::<OutputFormat>() {
            Ok(f) => config.format = f,
            Err(_) => warnings.push(ConfigError::ValueOutOfRange {
                field: "output.format".to_string(),
                value: format,
                expected: "table, json, csv".to_string(),
            }),
        }
    }

    // -- Output: level_width --
    if let Some(width) = raw.output.level_width {
        if (constants::MIN_LEVEL_WIDTH..=constants::MAX_LEVEL_WIDTH).contains(&width) {
            config.table.level_width = width;
        } else {
            warnings.push(ConfigError::ValueOutOfRange {
                field: "output.level_width".to_string(),
                value: width.to_string(),
                expected: format!(
                    "{}-{}",
                    constants::MIN_LEVEL_WIDTH,
                    constants::MAX_LEVEL_WIDTH
                ),
            });
        }
    }

    // -- Output: header labels --
    if let Some(header) = raw.output.level_header {
        match validate_header("output.level_header", header) {
            Ok(h) => config.table.level_header = h,
            Err(e) => warnings.push(e),
        }
    }
    if let Some(header) = raw.output.count_header {
        match validate_header("output.count_header", header) {
            Ok(h) => config.table.count_header = h,
            Err(e) => warnings.push(e),
        }
    }

    // -- Input: require_log_extension --
    if let Some(required) = raw.input.require_log_extension {
        config.require_log_extension = required;
    }

    config
}

fn validate_header(field: &str, header: String) -> Result<String, ConfigError> {
    let len = header.chars().count();
    if len == 0 || len > constants::MAX_HEADER_LENGTH || header.contains('\n') {
        return Err(ConfigError::ValueOutOfRange {
            field: field.to_string(),
            value: header,
            expected: format!(
                "single-line text of 1-{} characters",
                constants::MAX_HEADER_LENGTH
            ),
        });
    }
    Ok(header)
}
