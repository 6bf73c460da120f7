pub mod manifest;
pub mod settings;

pub use manifest::{AddonManifest, ManifestApi};
pub use settings::{
    DatabaseConfig, DatabaseOptions, HerokuConfig, LogSettings, MongosOptions, ReplSetOptions,
    RetryConfig, ServerOptions, Settings, StorjConfig,
};
