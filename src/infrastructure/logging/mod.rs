//! Logging infrastructure
//!
//! Structured logging to stdout using tracing and tracing-subscriber.

pub mod config;
pub mod logger;

pub use config::{LogConfig, LogFormat};
pub use logger::{parse_log_level, LoggerImpl, LoggingError};
