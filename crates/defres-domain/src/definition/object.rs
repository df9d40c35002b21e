//! Object definitions
//!
//! An object definition names a class, the constructor able to build it and
//! the ordered constructor parameters produced by whatever inspected the
//! class. Properties and method calls are injected after construction, in
//! declaration order.

use super::Entry;
use crate::error::{Error, Result};
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

/// Builds instances of one class and injects into them
pub trait ClassConstructor: Send + Sync {
    /// Create an instance from resolved constructor arguments
    fn construct(&self, arguments: Vec<Value>) -> Result<Value>;

    /// Set a property on a freshly constructed instance
    fn set_property(&self, instance: &Value, property: &str, value: Value) -> Result<()> {
        let _ = (instance, value);
        Err(Error::configuration(format!(
            "property injection of '{property}' is not supported by this class"
        )))
    }

    /// Call an injection method on a freshly constructed instance
    fn call_method(&self, instance: &Value, method: &str, arguments: Vec<Value>) -> Result<()> {
        let _ = (instance, arguments);
        Err(Error::configuration(format!(
            "method injection through '{method}' is not supported by this class"
        )))
    }
}

impl<F> ClassConstructor for F
where
    F: Fn(Vec<Value>) -> Result<Value> + Send + Sync,
{
    fn construct(&self, arguments: Vec<Value>) -> Result<Value> {
        self(arguments)
    }
}

#[derive(Clone)]
pub struct ObjectDefinition {
    pub class_name: String,
    /// `None` when the class cannot be instantiated
    pub constructor: Option<Arc<dyn ClassConstructor>>,
    pub parameters: Vec<ParameterSpec>,
    pub properties: Vec<PropertyInjection>,
    pub methods: Vec<MethodInjection>,
    /// Construct behind a deferred handle
    pub lazy: bool,
}

impl ObjectDefinition {
    pub fn new<S, C>(class_name: S, constructor: C) -> Self
    where
        S: Into<String>,
        C: ClassConstructor + 'static,
    {
        Self {
            class_name: class_name.into(),
            constructor: Some(Arc::new(constructor)),
            parameters: Vec::new(),
            properties: Vec::new(),
            methods: Vec::new(),
            lazy: false,
        }
    }

    /// Definition of an abstract class or interface with no constructor
    pub fn abstract_class<S: Into<String>>(class_name: S) -> Self {
        Self {
            class_name: class_name.into(),
            constructor: None,
            parameters: Vec::new(),
            properties: Vec::new(),
            methods: Vec::new(),
            lazy: false,
        }
    }

    pub fn with_parameter(mut self, parameter: ParameterSpec) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_property<S: Into<String>, E: Into<Entry>>(mut self, name: S, value: E) -> Self {
        self.properties.push(PropertyInjection {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn with_method(mut self, method: MethodInjection) -> Self {
        self.methods.push(method);
        self
    }

    pub fn lazy(mut self) -> Self {
        self.lazy = true;
        self
    }

    pub fn is_instantiable(&self) -> bool {
        self.constructor.is_some()
    }
}

impl fmt::Debug for ObjectDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectDefinition")
            .field("class_name", &self.class_name)
            .field("instantiable", &self.is_instantiable())
            .field("parameters", &self.parameters)
            .field("properties", &self.properties)
            .field("methods", &self.methods)
            .field("lazy", &self.lazy)
            .finish()
    }
}

/// One constructor or method parameter
///
/// Resolved from, in order: the explicit value, a call-time parameter of the
/// same name, the container entry named by the type hint, the default value,
/// `Null` when optional.
#[derive(Clone, Debug)]
pub struct ParameterSpec {
    pub name: String,
    pub value: Option<Entry>,
    pub type_hint: Option<String>,
    pub default: Option<Value>,
    pub optional: bool,
}

impl ParameterSpec {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            value: None,
            type_hint: None,
            default: None,
            optional: false,
        }
    }

    pub fn with_value<E: Into<Entry>>(mut self, value: E) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_type_hint<S: Into<String>>(mut self, type_hint: S) -> Self {
        self.type_hint = Some(type_hint.into());
        self
    }

    pub fn with_default<V: Into<Value>>(mut self, default: V) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

#[derive(Clone, Debug)]
pub struct PropertyInjection {
    pub name: String,
    pub value: Entry,
}

#[derive(Clone, Debug)]
pub struct MethodInjection {
    pub method: String,
    pub parameters: Vec<ParameterSpec>,
}

impl MethodInjection {
    pub fn new<S: Into<String>>(method: S) -> Self {
        Self {
            method: method.into(),
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, parameter: ParameterSpec) -> Self {
        self.parameters.push(parameter);
        self
    }
}
