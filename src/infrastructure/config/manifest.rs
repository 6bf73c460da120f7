use std::fs;
use std::path::Path;

use super::loader::ConfigError;
use crate::domain::models::AddonManifest;

/// Load the add-on manifest from `path`, or the bundled copy when `None`
pub fn load_manifest(path: Option<&Path>) -> Result<AddonManifest, ConfigError> {
    let Some(path) = path else {
        return Ok(AddonManifest::bundled()?);
    };

    let text = fs::read_to_string(path).map_err(|source| ConfigError::ManifestRead {
        path: path.to_path_buf(),
        source,
    })?;
    let manifest = AddonManifest::from_json(&text)?;

    tracing::debug!(path = %path.display(), id = %manifest.id, "loaded addon manifest");
    Ok(manifest)
}
