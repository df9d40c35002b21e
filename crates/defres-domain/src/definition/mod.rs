//! Definition model
//!
//! A [`Definition`] is an immutable, declarative description of how to
//! produce a value. Its [`DefinitionKind`] is a closed tagged union; every
//! kind is handled by exactly one resolver strategy.
//!
//! Definitions may override earlier ones through a `previous` link. The link
//! is owned by whoever built the override chain; the chain must terminate.

mod callable;
mod object;

pub use callable::{DecoratorDefinition, DecoratorFn, FactoryDefinition, FactoryFn};
pub use object::{
    ClassConstructor, MethodInjection, ObjectDefinition, ParameterSpec, PropertyInjection,
};

use crate::error::Result;
use crate::ports::Container;
use crate::value::{Parameters, Value};
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// Declarative description of how to obtain a value
#[derive(Clone, Debug)]
pub struct Definition {
    name: String,
    previous: Option<Arc<Definition>>,
    kind: DefinitionKind,
}

/// Kind-specific payload of a definition
#[derive(Clone, Debug)]
pub enum DefinitionKind {
    /// Literal value returned as is
    Value(Value),
    /// List or map whose entries may be definitions
    Array(ArrayDefinition),
    /// Object graph built from a constructor plus injections
    Object(ObjectDefinition),
    /// Callable invoked with the container and parameters
    Factory(FactoryDefinition),
    /// Another container entry
    Alias(AliasDefinition),
    /// Callable wrapping the previous definition's value
    Decorator(DecoratorDefinition),
    /// Process environment variable
    EnvironmentVariable(EnvironmentVariableDefinition),
    /// String with `{name}` references to container entries
    String(StringDefinition),
    /// Dotted path into a container entry
    DotNotation(DotNotationDefinition),
    /// Already constructed object
    Instance(Value),
    /// Entry created by an external service registry
    Interop(InteropDefinition),
}

/// Structural tag of a definition kind
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DefinitionTag {
    Value,
    Array,
    Object,
    Factory,
    Alias,
    Decorator,
    EnvironmentVariable,
    String,
    DotNotation,
    Instance,
    Interop,
}

impl DefinitionTag {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Value => "value",
            Self::Array => "array",
            Self::Object => "object",
            Self::Factory => "factory",
            Self::Alias => "alias",
            Self::Decorator => "decorator",
            Self::EnvironmentVariable => "environment variable",
            Self::String => "string",
            Self::DotNotation => "dot notation",
            Self::Instance => "instance",
            Self::Interop => "interop",
        }
    }
}

impl fmt::Display for DefinitionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl DefinitionKind {
    pub fn tag(&self) -> DefinitionTag {
        match self {
            Self::Value(_) => DefinitionTag::Value,
            Self::Array(_) => DefinitionTag::Array,
            Self::Object(_) => DefinitionTag::Object,
            Self::Factory(_) => DefinitionTag::Factory,
            Self::Alias(_) => DefinitionTag::Alias,
            Self::Decorator(_) => DefinitionTag::Decorator,
            Self::EnvironmentVariable(_) => DefinitionTag::EnvironmentVariable,
            Self::String(_) => DefinitionTag::String,
            Self::DotNotation(_) => DefinitionTag::DotNotation,
            Self::Instance(_) => DefinitionTag::Instance,
            Self::Interop(_) => DefinitionTag::Interop,
        }
    }
}

/// A slot that holds either a literal or a nested definition
#[derive(Clone, Debug)]
pub enum Entry {
    /// Passed through unchanged
    Literal(Value),
    /// Resolved through the dispatcher
    Definition(Definition),
}

impl Entry {
    pub fn is_definition(&self) -> bool {
        matches!(self, Self::Definition(_))
    }
}

impl From<Value> for Entry {
    fn from(value: Value) -> Self {
        Self::Literal(value)
    }
}

impl From<Definition> for Entry {
    fn from(definition: Definition) -> Self {
        Self::Definition(definition)
    }
}

impl From<&str> for Entry {
    fn from(s: &str) -> Self {
        Self::Literal(Value::from(s))
    }
}

impl From<i64> for Entry {
    fn from(i: i64) -> Self {
        Self::Literal(Value::Int(i))
    }
}

impl From<bool> for Entry {
    fn from(b: bool) -> Self {
        Self::Literal(Value::Bool(b))
    }
}

/// Ordered or keyed collection of entries
#[derive(Clone, Debug)]
pub enum ArrayDefinition {
    List(Vec<Entry>),
    Map(IndexMap<String, Entry>),
}

#[derive(Clone, Debug)]
pub struct AliasDefinition {
    /// Name of the container entry to return
    pub target: String,
}

#[derive(Clone, Debug)]
pub struct EnvironmentVariableDefinition {
    /// Variable name
    pub variable: String,
    /// Used when the variable is unset
    pub default: Option<Box<Entry>>,
}

#[derive(Clone, Debug)]
pub struct StringDefinition {
    /// Template with `{entry}` tokens
    pub expression: String,
}

#[derive(Clone, Debug)]
pub struct DotNotationDefinition {
    /// Dotted path, the first segment naming a container entry
    pub path: String,
}

#[derive(Clone, Debug)]
pub struct InteropDefinition {
    /// Identifier of the provider in the external registry
    pub registry_key: String,
}

impl Definition {
    pub fn new<S: Into<String>>(name: S, kind: DefinitionKind) -> Self {
        Self {
            name: name.into(),
            previous: None,
            kind,
        }
    }

    /// Attach the definition this one overrides
    pub fn with_previous(mut self, previous: Definition) -> Self {
        self.previous = Some(Arc::new(previous));
        self
    }

    /// Logical name the definition resolves for
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &DefinitionKind {
        &self.kind
    }

    pub fn tag(&self) -> DefinitionTag {
        self.kind.tag()
    }

    /// Definition overridden by this one
    pub fn previous(&self) -> Option<&Definition> {
        self.previous.as_deref()
    }

    pub fn previous_shared(&self) -> Option<Arc<Definition>> {
        self.previous.clone()
    }
}

// Authoring helpers
impl Definition {
    pub fn value<S: Into<String>, V: Into<Value>>(name: S, value: V) -> Self {
        Self::new(name, DefinitionKind::Value(value.into()))
    }

    pub fn instance<S: Into<String>>(name: S, object: Value) -> Self {
        Self::new(name, DefinitionKind::Instance(object))
    }

    pub fn alias<S: Into<String>, T: Into<String>>(name: S, target: T) -> Self {
        Self::new(
            name,
            DefinitionKind::Alias(AliasDefinition {
                target: target.into(),
            }),
        )
    }

    pub fn list<S, I>(name: S, entries: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = Entry>,
    {
        Self::new(
            name,
            DefinitionKind::Array(ArrayDefinition::List(entries.into_iter().collect())),
        )
    }

    pub fn map<S, K, I>(name: S, entries: I) -> Self
    where
        S: Into<String>,
        K: Into<String>,
        I: IntoIterator<Item = (K, Entry)>,
    {
        Self::new(
            name,
            DefinitionKind::Array(ArrayDefinition::Map(
                entries
                    .into_iter()
                    .map(|(key, entry)| (key.into(), entry))
                    .collect(),
            )),
        )
    }

    pub fn object<S: Into<String>>(name: S, object: ObjectDefinition) -> Self {
        Self::new(name, DefinitionKind::Object(object))
    }

    /// Factory without static parameters
    pub fn factory<S, F>(name: S, factory: F) -> Self
    where
        S: Into<String>,
        F: Fn(&dyn Container, &Parameters) -> Result<Value> + Send + Sync + 'static,
    {
        Self::new(
            name,
            DefinitionKind::Factory(FactoryDefinition::new(factory)),
        )
    }

    pub fn decorator<S, F>(name: S, decorator: F) -> Self
    where
        S: Into<String>,
        F: Fn(Value, &dyn Container) -> Result<Value> + Send + Sync + 'static,
    {
        Self::new(
            name,
            DefinitionKind::Decorator(DecoratorDefinition::new(decorator)),
        )
    }

    pub fn env<S: Into<String>, V: Into<String>>(name: S, variable: V) -> Self {
        Self::new(
            name,
            DefinitionKind::EnvironmentVariable(EnvironmentVariableDefinition {
                variable: variable.into(),
                default: None,
            }),
        )
    }

    pub fn env_with_default<S, V, D>(name: S, variable: V, default: D) -> Self
    where
        S: Into<String>,
        V: Into<String>,
        D: Into<Entry>,
    {
        Self::new(
            name,
            DefinitionKind::EnvironmentVariable(EnvironmentVariableDefinition {
                variable: variable.into(),
                default: Some(Box::new(default.into())),
            }),
        )
    }

    pub fn string<S: Into<String>, E: Into<String>>(name: S, expression: E) -> Self {
        Self::new(
            name,
            DefinitionKind::String(StringDefinition {
                expression: expression.into(),
            }),
        )
    }

    pub fn dot_path<S: Into<String>, P: Into<String>>(name: S, path: P) -> Self {
        Self::new(
            name,
            DefinitionKind::DotNotation(DotNotationDefinition { path: path.into() }),
        )
    }

    pub fn interop<S: Into<String>, K: Into<String>>(name: S, registry_key: K) -> Self {
        Self::new(
            name,
            DefinitionKind::Interop(InteropDefinition {
                registry_key: registry_key.into(),
            }),
        )
    }
}
