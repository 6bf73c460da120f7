//! Startup sequence
//!
//! Straight-line, run once per process before anything else:
//! 1. layer defaults, overrides file and environment
//! 2. install the logging sink at the configured level
//! 3. validate the database URL
//! 4. type the document into [`Settings`]
//!
//! The caller owns the returned settings and passes them to whatever needs
//! them. A failed startup must end the process.

use thiserror::Error;
use tracing::{error, info};

use crate::domain::models::Settings;
use crate::domain::ports::EnvSource;
use crate::infrastructure::config::{ConfigError, ConfigLoader};
use crate::infrastructure::logging::{LogConfig, LogFormat, LoggerImpl, LoggingError};

/// Errors that abort startup
#[derive(Error, Debug)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Logging(#[from] LoggingError),
}

/// Everything a successful startup produces
#[derive(Debug)]
pub struct Startup {
    /// Resolved, immutable settings
    pub settings: Settings,
    /// Handle to the installed logging sink
    pub logger: LoggerImpl,
}

/// Run the startup sequence against `env`
pub fn run<E: EnvSource + ?Sized>(
    loader: &ConfigLoader,
    env: &E,
    format: LogFormat,
) -> Result<Startup, StartupError> {
    let figment = loader.figment(env);

    let log_config = LogConfig::new(ConfigLoader::log_level(&figment), format);
    let logger = LoggerImpl::init(&log_config)?;

    if let Err(err) = ConfigLoader::validate(&figment) {
        error!(error = %err, "invalid configuration, refusing to start");
        return Err(err.into());
    }

    let settings = ConfigLoader::extract(&figment)?;

    info!(
        bridge = %settings.storj.api,
        collection = %settings.db.collection,
        ssl = settings.db.options.server.ssl,
        replica_set = settings.db.options.repl_set.rs_name.as_deref().unwrap_or("-"),
        addon_id = %settings.heroku.id,
        log_level = %logger.level(),
        "configuration loaded"
    );

    Ok(Startup { settings, logger })
}
