//! Configuration management infrastructure
//!
//! Hierarchical settings using figment:
//! - Defaults, with Heroku credentials from the add-on manifest
//! - Optional YAML overrides file
//! - Environment variable bindings
//! - Database URL validation

pub mod env;
pub mod loader;
pub mod manifest;

pub use env::{BindingKind, EnvBinding, EnvValue, ENV_BINDINGS};
pub use loader::{ConfigError, ConfigLoader};
pub use manifest::load_manifest;
