//! Logger setup for hosts embedding the combobox.
//!
//! The widget logs under [`combo_logging::TARGET`]. A host can install a
//! logger that keeps only that target, to trace the widget in isolation from
//! its own output, or one that records everything with the target shown.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use combo_logging::combo_info;
use log::{LevelFilter, SetLoggerError};
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("cannot create log file {path:?}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("a global logger is already installed")]
    AlreadyInstalled(#[from] SetLoggerError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    File(PathBuf),
    Terminal,
    Both(PathBuf),
}

/// Which records reach the logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogScope {
    /// Only the widget's own records.
    #[default]
    Widget,
    /// Everything, with each record's target printed.
    Everything,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub destination: LogDestination,
    pub level: LevelFilter,
    pub scope: LogScope,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            destination: LogDestination::Terminal,
            level: LevelFilter::Info,
            scope: LogScope::Widget,
        }
    }
}

/// Installs the global logger described by `settings`.
pub fn initialize(settings: &LogSettings) -> Result<(), LoggingError> {
    let config = build_config(settings.scope);
    let level = settings.level;

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    match &settings.destination {
        LogDestination::File(path) => loggers.push(file_logger(path, level, config)?),
        LogDestination::Terminal => loggers.push(term_logger(level, config)),
        LogDestination::Both(path) => {
            loggers.push(term_logger(level, config.clone()));
            loggers.push(file_logger(path, level, config)?);
        }
    }

    CombinedLogger::init(loggers)?;
    combo_info!("combobox logging at {} ({:?})", level, settings.scope);
    Ok(())
}

fn build_config(scope: LogScope) -> Config {
    let mut builder = ConfigBuilder::new();
    builder.set_time_format_rfc3339();
    match scope {
        LogScope::Widget => {
            builder
                .add_filter_allow_str(combo_logging::TARGET)
                .set_target_level(LevelFilter::Off);
        }
        LogScope::Everything => {
            builder.set_target_level(LevelFilter::Trace);
        }
    }
    builder.build()
}

fn term_logger(level: LevelFilter, config: Config) -> Box<dyn SharedLogger> {
    TermLogger::new(level, config, TerminalMode::Mixed, ColorChoice::Auto)
}

fn file_logger(
    path: &Path,
    level: LevelFilter,
    config: Config,
) -> Result<Box<dyn SharedLogger>, LoggingError> {
    let file = File::create(path).map_err(|source| LoggingError::File {
        path: path.to_path_buf(),
        source,
    })?;
    let logger: Box<dyn SharedLogger> = WriteLogger::new(level, config, file);
    Ok(logger)
}
