use std::sync::Arc;

use log::LevelFilter;
use serde::Deserialize;

use crate::backend::LogBackend;
use crate::error::Result;
use crate::severity::Severity;
use crate::sink::{LogSink, Sink};

/// Settings for [`init`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Verbosity count (1 for info, 2 or more for debug).
    pub verbose: u8,
    /// Only report errors.
    pub quiet: bool,
    /// Explicit minimum severity, overriding `verbose` and `quiet`.
    pub level: Option<Severity>,
    /// Name segment appended to the root sink's name.
    pub name: Option<String>,
}

impl LoggerConfig {
    pub fn level_filter(&self) -> LevelFilter {
        if let Some(level) = self.level {
            return level.into();
        }

        if self.quiet {
            LevelFilter::Error
        } else {
            match self.verbose {
                0 => LevelFilter::Warn,
                1 => LevelFilter::Info,
                _ => LevelFilter::Debug,
            }
        }
    }
}

/// Installs `env_logger` as the `log` backend and returns a root sink over it.
pub fn init(config: &LoggerConfig) -> Result<Sink> {
    let level = config.level_filter();

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .try_init()?;

    log::debug!("Logger initialized with level: {:?}", level);

    let root = Sink::new(Arc::new(LogBackend));
    Ok(match &config.name {
        Some(name) => root.with_name(name),
        None => root,
    })
}
