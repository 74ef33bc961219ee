// LogTally - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading and logging initialisation (debug mode support)
// 3. Running the pipeline and writing the report to stdout
// 4. Mapping failures to a message on stderr and exit status 1

use clap::Parser;
use logtally::app::pipeline::{self, RunOptions};
use logtally::core::export::{self, OutputFormat};
use logtally::platform::config::{self, AppConfig};
use logtally::util;
use std::path::PathBuf;

/// LogTally - count structured log entries per severity level.
///
/// Each line must look like `<date> <time> <LEVEL> <message>`. The whole
/// file is rejected at the first line that does not.
#[derive(Parser, Debug)]
#[command(name = "LogTally", version, about)]
struct Cli {
    /// Log file to analyse.
    path: PathBuf,

    /// Only count entries with this level (case-insensitive).
    level: Option<String>,

    /// Report format: table, json or csv (overrides config).
    #[arg(short = 'f', long = "format")]
    format: Option<OutputFormat>,

    /// Config file to use instead of the platform default.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

/// Load config before tracing exists; warnings are replayed after init.
fn load_app_config(cli: &Cli) -> util::error::Result<(AppConfig, Vec<String>)> {
    let (path, explicit) = match &cli.config {
        Some(path) => (Some(path.clone()), true),
        None => (config::default_config_path(), false),
    };
    let Some(path) = path else {
        return Ok((AppConfig::default(), Vec::new()));
    };

    let (app_config, warnings) = config::load_config(&path, explicit)?;
    Ok((
        app_config,
        warnings.iter().map(ToString::to_string).collect(),
    ))
}

fn run(cli: Cli) -> util::error::Result<()> {
    let (app_config, warnings) = load_app_config(&cli)?;

    util::logging::init(cli.debug, app_config.log_level.as_deref());
    for warning in &warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        path = %cli.path.display(),
        "LogTally starting"
    );

    let options = RunOptions {
        level: cli.level.as_deref().map(pipeline::normalise_level),
        require_log_extension: app_config.require_log_extension,
    };
    let report = pipeline::run(&cli.path, &options)?;

    let format = cli.format.unwrap_or(app_config.format);
    let stdout = std::io::stdout();
    export::export(&report.counts, format, &app_config.table, stdout.lock())?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!(error = %e, "LogTally failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
