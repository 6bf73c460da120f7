//! Common test utilities for integration tests
//!
//! Provides shared fixtures and helpers used across multiple integration
//! test files.

#![allow(dead_code)]

use std::io::Write;
use storj_addon::domain::models::AddonManifest;
use storj_addon::infrastructure::config::{ConfigLoader, ENV_BINDINGS};
use tempfile::NamedTempFile;

/// Manifest with recognisable values for every consumed field
pub fn test_manifest() -> AddonManifest {
    AddonManifest::from_json(
        r#"{
            "id": "storj-fixture",
            "api": {
                "sso_salt": "fixture-salt",
                "password": "fixture-password",
                "regions": ["us"]
            }
        }"#,
    )
    .expect("fixture manifest should parse")
}

/// Loader over the fixture manifest
pub fn test_loader() -> ConfigLoader {
    ConfigLoader::new(test_manifest())
}

/// Write a YAML overrides file that lives as long as the returned handle
pub fn overrides_file(yaml: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create overrides file");
    write!(file, "{yaml}").expect("Failed to write overrides file");
    file.flush().expect("Failed to flush overrides file");
    file
}

/// Every recognised variable, unset
///
/// Pass to `temp_env::with_vars` together with the variables under test so
/// the runner's own environment does not leak in.
pub fn all_vars_unset() -> Vec<(&'static str, Option<&'static str>)> {
    ENV_BINDINGS.iter().map(|binding| (binding.var, None)).collect()
}

/// `all_vars_unset` with `vars` applied on top
pub fn with_env(
    vars: &[(&'static str, &'static str)],
) -> Vec<(&'static str, Option<&'static str>)> {
    let mut env = all_vars_unset();
    for (key, value) in vars {
        env.retain(|(k, _)| k != key);
        env.push((*key, Some(*value)));
    }
    env
}
