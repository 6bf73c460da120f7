use super::config::{LogConfig, LogFormat};
use std::io;
use thiserror::Error;
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, Layer};

/// Logging sink errors
#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Logging sink already initialized: {0}")]
    AlreadyInitialized(#[from] TryInitError),
}

/// Handle to the process-wide logging sink
///
/// The sink writes to stdout and lives until the process exits.
#[derive(Debug)]
pub struct LoggerImpl {
    level: Level,
    format: LogFormat,
}

impl LoggerImpl {
    /// Install the global logging sink
    ///
    /// # Errors
    /// Returns an error if a global subscriber is already installed. The sink
    /// can only be initialized once per process.
    pub fn init(config: &LogConfig) -> Result<Self, LoggingError> {
        let level = parse_log_level(&config.level);

        // only the configured level applies; RUST_LOG is not consulted
        let env_filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::from_level(level).into())
            .parse_lossy("");

        match config.format {
            LogFormat::Json => {
                let stdout_layer = tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(io::stdout)
                    .with_current_span(true)
                    .with_target(true)
                    .with_filter(env_filter);

                tracing_subscriber::registry()
                    .with(stdout_layer)
                    .try_init()?;
            }
            LogFormat::Pretty => {
                let stdout_layer = tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_writer(io::stdout)
                    .with_target(true)
                    .with_filter(env_filter);

                tracing_subscriber::registry()
                    .with(stdout_layer)
                    .try_init()?;
            }
        }

        tracing::debug!(
            level = %level,
            format = ?config.format,
            "logger initialized"
        );

        Ok(Self {
            level,
            format: config.format,
        })
    }

    /// Minimum level the sink records
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Output format of the sink
    pub const fn format(&self) -> LogFormat {
        self.format
    }
}

/// Parse a log level name, falling back to `info` for anything unrecognised
pub fn parse_log_level(level: &str) -> Level {
    match level.trim().to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" | "warning" => Level::WARN,
        "error" | "fatal" => Level::ERROR,
        _ => Level::INFO,
    }
}
