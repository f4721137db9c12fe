//! Environment variable abstraction for testability.
//!
//! Production code uses [`Env::real()`], which reads the process
//! environment. Tests use [`Env::mock()`] backed by a map, so config tests
//! never have to mutate the real environment with `unsafe` set_var calls.

use std::collections::HashMap;

/// Environment variable reader.
#[derive(Clone, Debug, Default)]
pub struct Env {
    mocked: Option<HashMap<String, String>>,
}

impl Env {
    /// An `Env` backed by the real process environment.
    pub fn real() -> Self {
        Self { mocked: None }
    }

    /// An `Env` backed by an explicit set of key-value pairs.
    #[cfg(test)]
    pub fn mock(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        let map = vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self { mocked: Some(map) }
    }

    /// Look up a variable, returning `None` when unset.
    pub fn var(&self, name: &str) -> Option<String> {
        match &self.mocked {
            Some(map) => map.get(name).cloned(),
            None => std::env::var(name).ok(),
        }
    }

    /// Returns `true` if the variable is present.
    pub fn is_set(&self, name: &str) -> bool {
        self.var(name).is_some()
    }
}
