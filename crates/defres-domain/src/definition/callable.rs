//! Factory and decorator definitions

use super::Entry;
use crate::error::Result;
use crate::ports::Container;
use crate::value::{Parameters, Value};
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// Callable producing a value from the container and resolved parameters
pub type FactoryFn = dyn Fn(&dyn Container, &Parameters) -> Result<Value> + Send + Sync;

/// Callable wrapping the previous definition's value
pub type DecoratorFn = dyn Fn(Value, &dyn Container) -> Result<Value> + Send + Sync;

#[derive(Clone)]
pub struct FactoryDefinition {
    pub factory: Arc<FactoryFn>,
    /// Static parameters, resolved before the call
    pub parameters: IndexMap<String, Entry>,
}

impl FactoryDefinition {
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn(&dyn Container, &Parameters) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            factory: Arc::new(factory),
            parameters: IndexMap::new(),
        }
    }

    pub fn with_parameter<K: Into<String>, E: Into<Entry>>(mut self, key: K, entry: E) -> Self {
        self.parameters.insert(key.into(), entry.into());
        self
    }
}

impl fmt::Debug for FactoryDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactoryDefinition")
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

#[derive(Clone)]
pub struct DecoratorDefinition {
    pub decorator: Arc<DecoratorFn>,
}

impl DecoratorDefinition {
    pub fn new<F>(decorator: F) -> Self
    where
        F: Fn(Value, &dyn Container) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            decorator: Arc::new(decorator),
        }
    }
}

impl fmt::Debug for DecoratorDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecoratorDefinition").finish_non_exhaustive()
    }
}
