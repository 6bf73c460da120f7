use std::collections::HashMap;

/// Port for reading configuration variables following hexagonal architecture
///
/// The settings loader only ever asks for a variable by name. Production code
/// reads the process environment through [`ProcessEnv`]; tests and embedders
/// can hand the loader a plain `HashMap` instead.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use storj_addon::domain::ports::EnvSource;
///
/// let mut env = HashMap::new();
/// env.insert("MONGO_URL".to_string(), "mongodb://db:27017".to_string());
///
/// assert_eq!(env.var("MONGO_URL").as_deref(), Some("mongodb://db:27017"));
/// assert_eq!(env.var("LOG_LEVEL"), None);
/// ```
pub trait EnvSource {
    /// Value of the variable `key`, or `None` when it is not set
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment
///
/// Variables whose value is not valid unicode read as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl EnvSource for HashMap<&str, &str> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).map(|value| (*value).to_string())
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}
