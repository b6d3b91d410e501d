//! Environment access for configuration loading.
//!
//! [`Config::load_from`](crate::Config::load_from) reads variables through the
//! [`EnvSource`] trait instead of `std::env` directly, so tests and embedders
//! can supply synthetic environments without touching real process state.

use std::collections::HashMap;

/// Key-value source for configuration lookups.
///
/// Implementations treat empty values as unset: `FOO=` clears a variable
/// rather than supplying an empty string.
pub trait EnvSource {
    /// Look up a variable by name.
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        match std::env::var(key) {
            Ok(value) if value.is_empty() => None,
            Ok(value) => Some(value),
            Err(_) => None,
        }
    }
}

/// In-memory environment for tests and embedding.
///
/// # Example
///
/// ```
/// use chainsmith_tools::env::{EnvSource, MapEnv};
///
/// let env = MapEnv::new().set("VERIFICATION_API_KEY", "key123");
/// assert_eq!(env.var("VERIFICATION_API_KEY").as_deref(), Some("key123"));
/// assert_eq!(env.var("NODE_PROVIDER_URL"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a variable, replacing any previous value.
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl EnvSource for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        match self.vars.get(key) {
            Some(value) if value.is_empty() => None,
            Some(value) => Some(value.clone()),
            None => None,
        }
    }
}
