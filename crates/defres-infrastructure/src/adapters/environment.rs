//! Environment variable sources

use defres_domain::error::{Error, Result};
use defres_domain::ports::EnvironmentSource;
use std::collections::HashMap;

/// Reads the process environment
///
/// A variable holding non-UTF-8 data is reported as a type error.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl EnvironmentSource for ProcessEnvironment {
    fn var(&self, name: &str) -> Result<Option<String>> {
        let Some(raw) = std::env::var_os(name) else {
            return Ok(None);
        };
        raw.into_string().map(Some).map_err(|raw| {
            Error::type_error(format!(
                "environment variable {} is not valid unicode: {}",
                name,
                raw.to_string_lossy()
            ))
        })
    }
}

/// Fixed set of variables, for tests and sandboxed resolution
#[derive(Debug, Clone, Default)]
pub struct MapEnvironment {
    vars: HashMap<String, String>,
}

impl MapEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl EnvironmentSource for MapEnvironment {
    fn var(&self, name: &str) -> Result<Option<String>> {
        Ok(self.vars.get(name).cloned())
    }
}
