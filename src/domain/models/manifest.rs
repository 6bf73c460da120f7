//! Heroku add-on manifest
//!
//! Only the three fields the settings fall back to are modelled; everything
//! else in the document is ignored.

use serde::Deserialize;

/// Manifest compiled into the binary
pub const BUNDLED_MANIFEST: &str = include_str!("../../../addon-manifest.json");

/// The add-on manifest as registered with Heroku
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddonManifest {
    /// Add-on slug
    pub id: String,

    /// Provider API section
    pub api: ManifestApi,
}

/// The `api` section of the manifest
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct ManifestApi {
    /// Single sign-on salt
    pub sso_salt: String,

    /// Provisioning API password
    pub password: String,
}

impl std::fmt::Debug for ManifestApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManifestApi").finish_non_exhaustive()
    }
}

impl AddonManifest {
    /// Parse a manifest document
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Parse the manifest compiled into the binary
    pub fn bundled() -> Result<Self, serde_json::Error> {
        Self::from_json(BUNDLED_MANIFEST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_manifest_parses() {
        let manifest = AddonManifest::bundled().expect("bundled manifest should parse");
        assert_eq!(manifest.id, "storj");
        assert!(!manifest.api.sso_salt.is_empty());
        assert!(!manifest.api.password.is_empty());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let json = r#"{
            "id": "addon",
            "name": "Add-on",
            "api": {
                "sso_salt": "s",
                "password": "p",
                "regions": ["us", "eu"],
                "production": {"base_url": "https://example.com"}
            }
        }"#;

        let manifest = AddonManifest::from_json(json).unwrap();
        assert_eq!(manifest.id, "addon");
        assert_eq!(manifest.api.sso_salt, "s");
        assert_eq!(manifest.api.password, "p");
    }

    #[test]
    fn test_missing_required_field() {
        let result = AddonManifest::from_json(r#"{"id": "addon", "api": {"sso_salt": "s"}}"#);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("password"));
    }

    #[test]
    fn test_debug_hides_api_secrets() {
        let manifest = AddonManifest::from_json(
            r#"{"id": "addon", "api": {"sso_salt": "s3cr3t-salt", "password": "s3cr3t-pw"}}"#,
        )
        .unwrap();

        let debug = format!("{manifest:?}");
        assert!(!debug.contains("s3cr3t"));
        assert!(debug.contains("addon"));
    }
}
