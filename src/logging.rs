//! Logging
//!
//! Structured logging built on `tracing`. Level, format and destination come
//! from the `[logging]` configuration section; `ANCESTRY_LOG*` environment
//! variables and CLI flags override it.

use crate::error::AncestryError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Resolve the log file path with precedence: CLI, ANCESTRY_LOG_FILE env,
/// config file, platform state directory.
pub fn resolve_log_file_path(
    cli_file: Option<PathBuf>,
    config_file: Option<PathBuf>,
) -> Result<PathBuf, AncestryError> {
    if let Some(p) = cli_file.filter(|p| !p.as_os_str().is_empty()) {
        return Ok(p);
    }
    if let Ok(env_path) = std::env::var("ANCESTRY_LOG_FILE") {
        if !env_path.is_empty() {
            return Ok(PathBuf::from(env_path));
        }
    }
    if let Some(p) = config_file.filter(|p| !p.as_os_str().is_empty()) {
        return Ok(p);
    }
    default_log_file_path()
}

fn default_log_file_path() -> Result<PathBuf, AncestryError> {
    let project_dirs =
        directories::ProjectDirs::from("", "ancestry", "ancestry").ok_or_else(|| {
            AncestryError::ConfigError(
                "Could not determine platform state directory for log file".to_string(),
            )
        })?;
    let state_dir = project_dirs
        .state_dir()
        .unwrap_or_else(|| project_dirs.data_local_dir());
    Ok(state_dir.join("ancestry.log"))
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Whether logging is enabled (default: true)
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stdout, stderr, file, file+stderr, both
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file path when output includes file; None means the state directory
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Colored output (text format on terminals only)
    #[serde(default = "default_true")]
    pub color: bool,

    /// Per-module log levels
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stderr".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            file: None,
            color: default_true(),
            modules: HashMap::new(),
        }
    }
}

/// Initialize the global subscriber.
///
/// Priority order (highest to lowest): environment variables
/// (`ANCESTRY_LOG`, `ANCESTRY_LOG_FORMAT`, `ANCESTRY_LOG_OUTPUT`), the given
/// configuration (CLI flags are merged into it by the caller), defaults.
pub fn init_logging(config: &LoggingConfig) -> Result<(), AncestryError> {
    if !config.enabled {
        Registry::default()
            .with(EnvFilter::new("off"))
            .with(fmt::layer().with_writer(std::io::sink))
            .try_init()
            .map_err(|e| AncestryError::ConfigError(format!("Logging already set: {}", e)))?;
        return Ok(());
    }

    let filter = build_env_filter(config)?;
    let format = determine_format(config)?;
    let output = determine_output(config)?;
    let ansi = config.color && !output.file && format == LogFormat::Text;
    let writer = output.make_writer(config)?;

    let layer = fmt::layer()
        .with_target(true)
        .with_timer(ChronoUtc::rfc_3339())
        .with_ansi(ansi)
        .with_writer(writer);

    let result = match format {
        LogFormat::Json => Registry::default().with(filter).with(layer.json()).try_init(),
        LogFormat::Text => Registry::default().with(filter).with(layer).try_init(),
    };
    result.map_err(|e| AncestryError::ConfigError(format!("Logging already set: {}", e)))
}

/// Build environment filter from ANCESTRY_LOG or the configuration
fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, AncestryError> {
    if let Ok(filter) = EnvFilter::try_from_env("ANCESTRY_LOG") {
        return Ok(filter);
    }

    if config.level == "off" {
        return Ok(EnvFilter::new("off"));
    }

    let mut filter = EnvFilter::new(&config.level);

    for (module, module_level) in &config.modules {
        filter = filter.add_directive(parse_directive(module, module_level)?);
    }

    // ANCESTRY_LOG_MODULES=ancestry::tree=debug,ancestry::sort=trace
    if let Ok(modules) = std::env::var("ANCESTRY_LOG_MODULES") {
        for spec in modules.split(',') {
            if let Some((module, level)) = spec.split_once('=') {
                filter = filter.add_directive(parse_directive(module.trim(), level.trim())?);
            }
        }
    }

    Ok(filter)
}

fn parse_directive(
    module: &str,
    level: &str,
) -> Result<tracing_subscriber::filter::Directive, AncestryError> {
    format!("{}={}", module, level)
        .parse()
        .map_err(|e| AncestryError::ConfigError(format!("Invalid log directive: {}", e)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Json,
    Text,
}

fn determine_format(config: &LoggingConfig) -> Result<LogFormat, AncestryError> {
    let format = std::env::var("ANCESTRY_LOG_FORMAT").unwrap_or_else(|_| config.format.clone());
    match format.as_str() {
        "json" => Ok(LogFormat::Json),
        "text" => Ok(LogFormat::Text),
        other => Err(AncestryError::ConfigError(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            other
        ))),
    }
}

/// Output destinations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OutputDestinations {
    stdout: bool,
    stderr: bool,
    file: bool,
}

impl OutputDestinations {
    fn make_writer(&self, config: &LoggingConfig) -> Result<BoxMakeWriter, AncestryError> {
        let writer = match (self.file, self.stdout, self.stderr) {
            (true, _, true) => BoxMakeWriter::new(open_log_file(config)?.and(std::io::stderr)),
            (true, _, false) => BoxMakeWriter::new(open_log_file(config)?),
            (false, true, true) => BoxMakeWriter::new(std::io::stdout.and(std::io::stderr)),
            (false, true, false) => BoxMakeWriter::new(std::io::stdout),
            (false, false, _) => BoxMakeWriter::new(std::io::stderr),
        };
        Ok(writer)
    }
}

fn open_log_file(config: &LoggingConfig) -> Result<std::sync::Mutex<std::fs::File>, AncestryError> {
    let log_file = resolve_log_file_path(None, config.file.clone())?;
    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            AncestryError::ConfigError(format!("Failed to create log directory: {}", e))
        })?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .map_err(|e| {
            AncestryError::ConfigError(format!("Failed to open log file {:?}: {}", log_file, e))
        })?;
    Ok(std::sync::Mutex::new(file))
}

fn determine_output(config: &LoggingConfig) -> Result<OutputDestinations, AncestryError> {
    match std::env::var("ANCESTRY_LOG_OUTPUT") {
        Ok(output) => parse_output_destinations(&output),
        Err(_) => parse_output_destinations(&config.output),
    }
}

fn parse_output_destinations(output: &str) -> Result<OutputDestinations, AncestryError> {
    let (stdout, stderr, file) = match output {
        "stdout" => (true, false, false),
        "stderr" => (false, true, false),
        "file" => (false, false, true),
        "file+stderr" => (false, true, true),
        "both" => (true, true, false),
        _ => {
            return Err(AncestryError::ConfigError(format!(
                "Invalid log output: {} (must be 'stdout', 'stderr', 'file', 'file+stderr', or 'both')",
                output
            )))
        }
    };
    Ok(OutputDestinations {
        stdout,
        stderr,
        file,
    })
}
