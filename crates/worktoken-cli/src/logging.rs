//! Tracing subscriber setup for the CLI.
//!
//! Logs always go to stderr so stdout carries only tokens and content.
//! `RUST_LOG` overrides the level chosen from `-v` flags.

use clap::ValueEnum;
use thiserror::Error;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Errors that can occur during logging initialization.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Failed to set global subscriber
    #[error("failed to set global tracing subscriber: {0}")]
    SetGlobalSubscriber(#[from] tracing::subscriber::SetGlobalDefaultError),

    /// Failed to parse env filter directive
    #[error("failed to parse env filter: {0}")]
    EnvFilter(#[from] tracing_subscriber::filter::ParseError),
}

/// Output format for log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Multi-line human-readable output
    Pretty,
    /// Single-line output without timestamps
    #[default]
    Compact,
    /// One JSON object per line
    Json,
}

/// Configuration for logging initialization.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Level used when `RUST_LOG` is not set
    pub default_level: Level,
    pub format: LogFormat,
    /// Explicit filter directive; takes precedence over `RUST_LOG`
    pub env_filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_level: Level::WARN,
            format: LogFormat::Compact,
            env_filter: None,
        }
    }
}

impl LoggingConfig {
    /// Builds a config from the `-v` count: 0 warn, 1 debug, 2+ trace.
    #[must_use]
    pub fn from_verbosity(verbose: u8, format: LogFormat) -> Self {
        let default_level = match verbose {
            0 => Level::WARN,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self {
            default_level,
            format,
            env_filter: None,
        }
    }

    /// Set a custom env filter directive
    #[must_use]
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    fn filter(&self) -> Result<EnvFilter, LoggingError> {
        if let Some(ref filter) = self.env_filter {
            return Ok(EnvFilter::try_new(filter)?);
        }
        Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.default_level.to_string())))
    }
}

/// Installs the global subscriber. Call once, before any command runs.
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    let filter = config.filter()?;

    match config.format {
        LogFormat::Pretty => {
            let subscriber = tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().pretty().with_writer(std::io::stderr));
            tracing::subscriber::set_global_default(subscriber)?;
        }
        LogFormat::Compact => {
            let subscriber = tracing_subscriber::registry().with(filter).with(
                fmt::layer()
                    .compact()
                    .without_time()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            );
            tracing::subscriber::set_global_default(subscriber)?;
        }
        LogFormat::Json => {
            let subscriber = tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_writer(std::io::stderr));
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.default_level, Level::WARN);
        assert_eq!(config.format, LogFormat::Compact);
        assert!(config.env_filter.is_none());
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(LoggingConfig::from_verbosity(0, LogFormat::Json).default_level, Level::WARN);
        assert_eq!(LoggingConfig::from_verbosity(1, LogFormat::Json).default_level, Level::DEBUG);
        assert_eq!(LoggingConfig::from_verbosity(5, LogFormat::Json).default_level, Level::TRACE);
    }

    #[test]
    fn test_explicit_filter() {
        let config = LoggingConfig::default().with_env_filter("worktoken=trace");
        assert_eq!(config.env_filter.as_deref(), Some("worktoken=trace"));
        assert!(config.filter().is_ok());
    }

    #[test]
    fn test_invalid_filter_rejected() {
        let config = LoggingConfig::default().with_env_filter("worktoken=notalevel");
        assert!(matches!(config.filter(), Err(LoggingError::EnvFilter(_))));
    }
}
