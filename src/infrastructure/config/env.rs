//! Environment variable bindings
//!
//! Each recognised variable maps onto one dotted settings key. Text
//! variables only apply when non-empty; flag variables apply whenever they
//! are present and are `true` only for the exact string `"true"`.

use figment::providers::Serialized;
use figment::Figment;
use serde::Serialize;

use crate::domain::ports::EnvSource;

/// How a variable's raw text becomes a settings value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    /// Used verbatim when non-empty
    Text,
    /// `true` iff the value is exactly `"true"`
    Flag,
}

/// A single environment variable and the settings key it feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvBinding {
    /// Variable name
    pub var: &'static str,
    /// Dotted settings key
    pub key: &'static str,
    /// Coercion applied to the raw value
    pub kind: BindingKind,
}

/// A coerced variable value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EnvValue {
    /// Text value
    Text(String),
    /// Boolean flag
    Flag(bool),
}

const fn text(var: &'static str, key: &'static str) -> EnvBinding {
    EnvBinding {
        var,
        key,
        kind: BindingKind::Text,
    }
}

const fn flag(var: &'static str, key: &'static str) -> EnvBinding {
    EnvBinding {
        var,
        key,
        kind: BindingKind::Flag,
    }
}

/// Every variable the loader reads, in settings order
pub const ENV_BINDINGS: &[EnvBinding] = &[
    text("BRIDGE_ENDPOINT", "storj.api"),
    text("MONGO_URL", "db.url"),
    text("MONGO_COLLECTION", "db.collection"),
    flag("MONGO_SSL", "db.options.server.ssl"),
    flag(
        "MONGO_SSL_ALLOW_INVALID_CERTIFICATES",
        "db.options.server.sslAllowInvalidCertificates",
    ),
    flag(
        "MONGO_SSL_ALLOW_INVALID_HOSTNAMES",
        "db.options.server.sslAllowInvalidHostnames",
    ),
    text("MONGO_RS_NAME", "db.options.replSet.rs_name"),
    text("HEROKU_SSO", "heroku.sso_salt"),
    text("LEGACY_SSO", "heroku.legacy_salt"),
    text("HEROKU_ID", "heroku.id"),
    text("HEROKU_PASSWORD", "heroku.password"),
    text("LOG_LEVEL", "log.level"),
];

impl EnvBinding {
    /// Value this binding contributes, or `None` to leave the key alone
    pub fn resolve<E: EnvSource + ?Sized>(&self, env: &E) -> Option<EnvValue> {
        let raw = env.var(self.var)?;
        match self.kind {
            BindingKind::Text => (!raw.is_empty()).then_some(EnvValue::Text(raw)),
            BindingKind::Flag => Some(EnvValue::Flag(raw == "true")),
        }
    }
}

/// Every binding that applies in `env`, as `(key, value)` pairs
pub fn resolve_all<E: EnvSource + ?Sized>(env: &E) -> Vec<(&'static str, EnvValue)> {
    ENV_BINDINGS
        .iter()
        .filter_map(|binding| binding.resolve(env).map(|value| (binding.key, value)))
        .collect()
}

/// Layer the bindings that apply in `env` on top of `figment`
pub fn merge_env<E: EnvSource + ?Sized>(figment: Figment, env: &E) -> Figment {
    resolve_all(env)
        .into_iter()
        .fold(figment, |figment, (key, value)| {
            figment.merge(Serialized::default(key, value))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_every_variable_is_bound_once() {
        let mut vars: Vec<_> = ENV_BINDINGS.iter().map(|b| b.var).collect();
        vars.sort_unstable();
        vars.dedup();
        assert_eq!(vars.len(), ENV_BINDINGS.len());
        assert_eq!(ENV_BINDINGS.len(), 12);
    }

    #[test]
    fn test_text_binding() {
        let binding = text("MONGO_COLLECTION", "db.collection");
        let env: HashMap<&str, &str> = HashMap::from([("MONGO_COLLECTION", "users")]);

        assert_eq!(
            binding.resolve(&env),
            Some(EnvValue::Text("users".to_string()))
        );
    }

    #[test]
    fn test_empty_text_is_ignored() {
        let binding = text("MONGO_COLLECTION", "db.collection");
        let env: HashMap<&str, &str> = HashMap::from([("MONGO_COLLECTION", "")]);

        assert_eq!(binding.resolve(&env), None);
    }

    #[test]
    fn test_flag_binding_is_strict() {
        let binding = flag("MONGO_SSL", "db.options.server.ssl");

        for (raw, expected) in [
            ("true", true),
            ("TRUE", false),
            ("True", false),
            ("1", false),
            ("yes", false),
            (" true", false),
            ("", false),
            ("false", false),
        ] {
            let env: HashMap<&str, &str> = HashMap::from([("MONGO_SSL", raw)]);
            assert_eq!(
                binding.resolve(&env),
                Some(EnvValue::Flag(expected)),
                "MONGO_SSL={raw:?}"
            );
        }
    }

    #[test]
    fn test_unset_variable_contributes_nothing() {
        let env: HashMap<&str, &str> = HashMap::new();
        assert!(resolve_all(&env).is_empty());
    }

    #[test]
    fn test_resolve_all_keys() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("MONGO_URL", "mongodb://db"),
            ("MONGO_RS_NAME", "rs0"),
            ("MONGO_SSL", "true"),
            ("UNRELATED", "value"),
        ]);

        let resolved = resolve_all(&env);
        assert_eq!(
            resolved,
            vec![
                ("db.url", EnvValue::Text("mongodb://db".to_string())),
                ("db.options.server.ssl", EnvValue::Flag(true)),
                ("db.options.replSet.rs_name", EnvValue::Text("rs0".to_string())),
            ]
        );
    }

    #[test]
    fn test_text_values_stay_strings() {
        let env: HashMap<&str, &str> = HashMap::from([("MONGO_URL", "27017")]);
        let figment = merge_env(Figment::new(), &env);

        let value = figment.find_value("db.url").unwrap();
        assert_eq!(value.as_str(), Some("27017"));
    }
}
