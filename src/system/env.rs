// src/system/env.rs

use std::collections::HashMap;

/// An immutable view of environment variables.
///
/// Resolution reads `PATH` and `PATHEXT` through one of these snapshots
/// instead of the process-global environment, so the same lookup is
/// reproducible and tests can stage arbitrary layouts without touching
/// global state.
#[derive(Debug, Clone, Default)]
pub struct EnvView {
    vars: HashMap<String, String>,
}

impl EnvView {
    /// Captures the current process environment.
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Returns the value of `key`, if set.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for EnvView
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
