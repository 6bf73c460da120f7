use figment::providers::{Format, Serialized, Yaml};
use figment::value::Value;
use figment::Figment;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::env::merge_env;
use crate::domain::models::settings::DEFAULT_LOG_LEVEL;
use crate::domain::models::{AddonManifest, Settings};
use crate::domain::ports::EnvSource;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The database URL is missing or not a string; fatal at startup
    #[error("MONGO_URL must be a string (found {found})")]
    DatabaseUrlNotString {
        /// Kind of value found instead
        found: &'static str,
    },

    /// The manifest file could not be read
    #[error("Failed to read addon manifest {path}: {source}")]
    ManifestRead {
        /// Manifest path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not valid JSON or lacks a required field
    #[error("Invalid addon manifest: {0}")]
    ManifestParse(#[from] serde_json::Error),

    /// A configuration layer failed to load or the document failed to type
    #[error("Failed to extract settings: {0}")]
    Extract(#[from] Box<figment::Error>),
}

impl ConfigError {
    /// Whether this is the fatal database URL check
    pub const fn is_fatal_database_url(&self) -> bool {
        matches!(self, Self::DatabaseUrlNotString { .. })
    }
}

/// Settings loader with hierarchical merging
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    manifest: AddonManifest,
    overrides_file: Option<PathBuf>,
}

impl ConfigLoader {
    /// Loader whose Heroku defaults come from `manifest`
    pub const fn new(manifest: AddonManifest) -> Self {
        Self {
            manifest,
            overrides_file: None,
        }
    }

    /// Layer a YAML overrides file under the environment
    ///
    /// A file that does not exist is skipped.
    #[must_use]
    pub fn with_overrides_file(mut self, path: impl AsRef<Path>) -> Self {
        self.overrides_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// The manifest supplying the Heroku defaults
    pub const fn manifest(&self) -> &AddonManifest {
        &self.manifest
    }

    /// Build the layered, untyped settings document
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (manifest for Heroku credentials)
    /// 2. Overrides file, when configured
    /// 3. Environment variables
    pub fn figment<E: EnvSource + ?Sized>(&self, env: &E) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Settings::defaults(
            &self.manifest,
        )));

        if let Some(ref path) = self.overrides_file {
            figment = figment.merge(Yaml::file(path));
        }

        merge_env(figment, env)
    }

    /// Log level named by the document, `info` when missing or not a string
    ///
    /// Read before validation so the logging sink can be installed first.
    pub fn log_level(figment: &Figment) -> String {
        figment
            .find_value("log.level")
            .ok()
            .and_then(|value| value.into_string())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
    }

    /// Validate the document before it is typed
    ///
    /// The database URL must be a string. Every other field falls back to
    /// its default silently. A layer that fails to load (such as a malformed
    /// overrides file) is reported as [`ConfigError::Extract`].
    pub fn validate(figment: &Figment) -> Result<(), ConfigError> {
        match figment.find_value("db.url") {
            Ok(Value::String(..)) => Ok(()),
            Ok(other) => Err(ConfigError::DatabaseUrlNotString {
                found: value_kind(&other),
            }),
            Err(e) if e.missing() => Err(ConfigError::DatabaseUrlNotString { found: "nothing" }),
            Err(e) => Err(ConfigError::Extract(Box::new(e))),
        }
    }

    /// Type a validated document into [`Settings`]
    pub fn extract(figment: &Figment) -> Result<Settings, ConfigError> {
        figment.extract().map_err(|e| ConfigError::Extract(Box::new(e)))
    }

    /// Build, validate and extract in one step
    ///
    /// Does not touch the logging sink; see `application::startup` for the
    /// full startup sequence.
    pub fn load<E: EnvSource + ?Sized>(&self, env: &E) -> Result<Settings, ConfigError> {
        let figment = self.figment(env);
        Self::validate(&figment)?;
        Self::extract(&figment)
    }
}

const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::String(..) => "a string",
        Value::Char(..) => "a character",
        Value::Bool(..) => "a boolean",
        Value::Num(..) => "a number",
        Value::Empty(..) => "an empty value",
        Value::Dict(..) => "a table",
        Value::Array(..) => "an array",
    }
}
