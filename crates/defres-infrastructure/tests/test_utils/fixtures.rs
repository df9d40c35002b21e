//! Containers and recording objects shared by the integration tests

use defres_domain::definition::{ClassConstructor, Definition};
use defres_domain::error::{Error, Result};
use defres_domain::ports::Container;
use defres_domain::value::{Parameters, Value};
use defres_infrastructure::adapters::InMemoryContainer;
use defres_infrastructure::di::{ResolverDispatcher, ResolverDispatcherBuilder};
use indexmap::IndexMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, OnceLock};

/// No call-time parameters
pub fn no_params() -> Parameters {
    Parameters::new()
}

/// Dispatcher over a map-backed container
pub fn dispatcher_over(container: InMemoryContainer) -> ResolverDispatcher {
    ResolverDispatcher::new(Arc::new(container))
}

/// Container whose entries are definitions resolved on first `get`
///
/// Resolved entries are cached, so every `get` of a name returns the same
/// value, the way a real container shares its singletons.
pub struct DefinitionContainer {
    definitions: IndexMap<String, Definition>,
    cache: Mutex<IndexMap<String, Value>>,
    dispatcher: OnceLock<ResolverDispatcher>,
}

impl DefinitionContainer {
    pub fn build<I>(definitions: I) -> (Arc<Self>, ResolverDispatcher)
    where
        I: IntoIterator<Item = Definition>,
    {
        Self::build_with(definitions, |builder| builder)
    }

    pub fn build_with<I, F>(definitions: I, configure: F) -> (Arc<Self>, ResolverDispatcher)
    where
        I: IntoIterator<Item = Definition>,
        F: FnOnce(ResolverDispatcherBuilder) -> ResolverDispatcherBuilder,
    {
        let container = Arc::new(Self {
            definitions: definitions
                .into_iter()
                .map(|definition| (definition.name().to_string(), definition))
                .collect(),
            cache: Mutex::new(IndexMap::new()),
            dispatcher: OnceLock::new(),
        });
        let dispatcher =
            configure(ResolverDispatcher::builder(Arc::clone(&container) as Arc<dyn Container>))
                .build();
        let _ = container.dispatcher.set(dispatcher.clone());
        (container, dispatcher)
    }

    pub fn definition(&self, name: &str) -> &Definition {
        &self.definitions[name]
    }

    /// Number of entries resolved so far
    pub fn resolved_count(&self) -> usize {
        self.cache.lock().unwrap().len()
    }
}

impl Container for DefinitionContainer {
    fn get(&self, name: &str) -> Result<Value> {
        if let Some(value) = self.cache.lock().unwrap().get(name) {
            return Ok(value.clone());
        }
        let definition = self
            .definitions
            .get(name)
            .ok_or_else(|| Error::not_found(name))?;
        let dispatcher = self
            .dispatcher
            .get()
            .ok_or_else(|| Error::internal("dispatcher not wired"))?;

        let value = dispatcher.resolve(definition, &Parameters::new())?;
        let mut cache = self.cache.lock().unwrap();
        Ok(cache.entry(name.to_string()).or_insert(value).clone())
    }

    fn has(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }
}

/// Object built by [`RecordingConstructor`]
#[derive(Debug, Default)]
pub struct Service {
    pub class_name: String,
    pub arguments: Vec<Value>,
    pub properties: Mutex<IndexMap<String, Value>>,
    pub calls: Mutex<Vec<(String, Vec<Value>)>>,
}

impl Service {
    pub fn property(&self, name: &str) -> Option<Value> {
        self.properties.lock().unwrap().get(name).cloned()
    }
}

/// Constructor counting invocations and recording every injection
///
/// Injecting a property named `fail` or calling a method named `fail` errors.
#[derive(Clone, Default)]
pub struct RecordingConstructor {
    class_name: String,
    constructed: Arc<AtomicUsize>,
}

impl RecordingConstructor {
    pub fn new(class_name: &str) -> Self {
        Self {
            class_name: class_name.to_string(),
            constructed: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn constructed(&self) -> usize {
        self.constructed.load(Ordering::SeqCst)
    }
}

fn service(instance: &Value) -> Result<Arc<Service>> {
    instance
        .downcast::<Service>()
        .ok_or_else(|| Error::type_error("not a Service"))
}

impl ClassConstructor for RecordingConstructor {
    fn construct(&self, arguments: Vec<Value>) -> Result<Value> {
        self.constructed.fetch_add(1, Ordering::SeqCst);
        Ok(Value::object(Service {
            class_name: self.class_name.clone(),
            arguments,
            ..Service::default()
        }))
    }

    fn set_property(&self, instance: &Value, property: &str, value: Value) -> Result<()> {
        if property == "fail" {
            return Err(Error::generic("property injection failed"));
        }
        service(instance)?
            .properties
            .lock()
            .unwrap()
            .insert(property.to_string(), value);
        Ok(())
    }

    fn call_method(&self, instance: &Value, method: &str, arguments: Vec<Value>) -> Result<()> {
        if method == "fail" {
            return Err(Error::generic("method injection failed"));
        }
        service(instance)?
            .calls
            .lock()
            .unwrap()
            .push((method.to_string(), arguments));
        Ok(())
    }
}
