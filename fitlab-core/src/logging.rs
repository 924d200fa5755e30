//! Logging setup shared by the terminal UI and the CLI.
//!
//! All diagnostics go through `tracing`. The CLI writes to stderr; the
//! terminal UI owns the screen, so it writes to a file or not at all.
//!
//! `RUST_LOG` overrides every configured level.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::LogSettings;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("open log file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
    #[error("logging already initialized: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    /// Discard everything.
    Off,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    /// `EnvFilter` directive.
    pub filter: String,
    pub target: LogTarget,
    pub with_ansi: bool,
    pub with_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: scoped_filter(Level::INFO),
            target: LogTarget::Stderr,
            with_ansi: true,
            with_target: false,
        }
    }
}

impl LogConfig {
    /// - 0 (no `-v`): info
    /// - 1 (`-v`): debug
    /// - 2+ (`-vv`): trace
    #[must_use]
    pub fn from_verbosity(verbosity: u8) -> Self {
        Self {
            filter: scoped_filter(verbosity_level(verbosity)),
            ..Default::default()
        }
    }

    /// Config-file settings, raised by any `-v` flags.
    #[must_use]
    pub fn from_settings(settings: &LogSettings, verbosity: u8) -> Self {
        let filter = if verbosity == 0 {
            settings.level.clone()
        } else {
            scoped_filter(verbosity_level(verbosity))
        };
        let target = match &settings.file {
            Some(path) => LogTarget::File(path.clone()),
            None => LogTarget::Stderr,
        };
        Self {
            filter,
            target,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_target(mut self, target: LogTarget) -> Self {
        self.target = target;
        self
    }

    #[must_use]
    pub fn with_ansi(mut self, enable: bool) -> Self {
        self.with_ansi = enable;
        self
    }

    /// The filter actually used: `RUST_LOG` if set and valid, else the configured one.
    pub fn env_filter(&self) -> Result<EnvFilter, LoggingError> {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => Ok(filter),
            Err(_) => Ok(EnvFilter::try_new(&self.filter)?),
        }
    }
}

fn verbosity_level(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Our crates at `level`, everything else at warn.
fn scoped_filter(level: Level) -> String {
    let level = level.as_str().to_lowercase();
    format!("warn,fitlab_core={level},fitlab_tui={level},fitlab_cli={level}")
}

/// Install the global subscriber. Call once at start-up.
pub fn init_logging(config: &LogConfig) -> Result<(), LoggingError> {
    match &config.target {
        LogTarget::Off => Ok(()),
        LogTarget::Stderr => init_with_writer(config, io::stderr),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).map_err(|source| LoggingError::Io {
                        path: parent.display().to_string(),
                        source,
                    })?;
                }
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| LoggingError::Io {
                    path: path.display().to_string(),
                    source,
                })?;
            // Colour codes are noise in a file.
            let config = config.clone().with_ansi(false);
            init_with_writer(&config, Mutex::new(file))
        }
    }
}

fn init_with_writer<W>(config: &LogConfig, writer: W) -> Result<(), LoggingError>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .compact()
        .with_writer(writer)
        .with_ansi(config.with_ansi)
        .with_target(config.with_target);

    tracing_subscriber::registry()
        .with(config.env_filter()?)
        .with(layer)
        .try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        assert!(LogConfig::from_verbosity(0).filter.contains("fitlab_core=info"));
        assert!(LogConfig::from_verbosity(1).filter.contains("fitlab_core=debug"));
        assert!(LogConfig::from_verbosity(5).filter.contains("fitlab_core=trace"));
    }

    #[test]
    fn settings_supply_filter_and_file() {
        let settings = LogSettings {
            level: "fitlab_core=debug".into(),
            file: Some(PathBuf::from("/tmp/fitlab.log")),
        };
        let config = LogConfig::from_settings(&settings, 0);
        assert_eq!(config.filter, "fitlab_core=debug");
        assert_eq!(config.target, LogTarget::File(PathBuf::from("/tmp/fitlab.log")));

        let config = LogConfig::from_settings(&settings, 2);
        assert!(config.filter.contains("=trace"));
    }

    #[test]
    fn invalid_directive_is_rejected() {
        let config = LogConfig {
            filter: "fitlab_core=loud".into(),
            ..Default::default()
        };
        if std::env::var_os("RUST_LOG").is_none() {
            assert!(matches!(config.env_filter(), Err(LoggingError::Filter(_))));
        }
    }
}
