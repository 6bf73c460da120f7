//! Storj add-on startup configuration
//!
//! Resolves the add-on's settings from environment variables, falling back to
//! built-in defaults and the bundled Heroku add-on manifest, installs the
//! logging sink and refuses to start with a malformed database URL.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): the settings record, the manifest and the
//!   environment port
//! - **Application Layer** (`application`): the startup sequence
//! - **Infrastructure Layer** (`infrastructure`): figment layering, validation
//!   and the tracing sink
//! - **CLI Layer** (`cli`): the `storj-addon` binary
//!
//! # Example
//!
//! ```no_run
//! use storj_addon::application::startup;
//! use storj_addon::domain::ports::ProcessEnv;
//! use storj_addon::infrastructure::config::{load_manifest, ConfigLoader};
//! use storj_addon::infrastructure::logging::LogFormat;
//!
//! fn main() -> anyhow::Result<()> {
//!     let loader = ConfigLoader::new(load_manifest(None)?);
//!     let startup = startup::run(&loader, &ProcessEnv, LogFormat::Json)?;
//!     println!("connecting to {}", startup.settings.db.collection);
//!     Ok(())
//! }
//! ```

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use application::{Startup, StartupError};
pub use domain::models::{
    AddonManifest, DatabaseConfig, HerokuConfig, LogSettings, RetryConfig, ServerOptions,
    Settings, StorjConfig,
};
pub use domain::ports::{EnvSource, ProcessEnv};
pub use infrastructure::config::{ConfigError, ConfigLoader};
