// LogTally - util/logging.rs
//
// Structured logging with runtime-selectable debug mode.
//
// Activation:
//   - Environment variable: RUST_LOG=debug (or trace)
//   - CLI flag: --debug (sets level to debug)
//   - Config file: [logging] level = "debug"
//
// Output: always stderr. stdout is reserved for the report.

use tracing_subscriber::EnvFilter;

/// Pick the filter directive for the subscriber.
///
/// Priority: RUST_LOG env var > CLI --debug flag > config level > default.
fn filter_directive(
    env_level: Option<String>,
    debug_flag: bool,
    config_level: Option<&str>,
) -> String {
    if let Some(level) = env_level {
        level
    } else if debug_flag {
        "debug".to_string()
    } else if let Some(level) = config_level {
        level.to_string()
    } else {
        super::constants::DEFAULT_LOG_LEVEL.to_string()
    }
}

/// Initialise the logging subsystem.
///
/// `debug_flag` is true when the user passed --debug on the CLI.
/// `config_level` is the validated level from config.toml (if present).
pub fn init(debug_flag: bool, config_level: Option<&str>) {
    let directive = filter_directive(
        std::env::var("RUST_LOG").ok().filter(|v| !v.is_empty()),
        debug_flag,
        config_level,
    );

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directive))
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .init();

    tracing::debug!(
        app = super::constants::APP_NAME,
        version = super::constants::APP_VERSION,
        "Logging initialised"
    );
}
