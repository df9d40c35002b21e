//! In-memory container

use defres_domain::error::{Error, Result};
use defres_domain::ports::Container;
use defres_domain::value::Value;
use indexmap::IndexMap;

/// Container over a fixed set of already-resolved entries
#[derive(Debug, Clone, Default)]
pub struct InMemoryContainer {
    entries: IndexMap<String, Value>,
}

impl InMemoryContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, replacing any previous one with the same name
    pub fn with_entry<S: Into<String>, V: Into<Value>>(mut self, name: S, value: V) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert<S: Into<String>, V: Into<Value>>(&mut self, name: S, value: V) {
        self.entries.insert(name.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Container for InMemoryContainer {
    fn get(&self, name: &str) -> Result<Value> {
        self.entries
            .get(name)
            .cloned()
            .ok_or_else(|| Error::not_found(name))
    }

    fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }
}
