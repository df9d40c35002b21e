//! Resolver dispatcher
//!
//! Routes each definition to the strategy for its kind. All strategies are
//! built once, eagerly, by [`ResolverDispatcherBuilder::build`] and shared by
//! every clone of the dispatcher, so dispatch needs no locking.
//!
//! The kind to strategy mapping is an exhaustive `match`: adding a
//! definition kind without a strategy does not compile. The only kind that
//! can be left without a strategy at runtime is interop, when no service
//! registry was supplied.

use crate::adapters::ProcessEnvironment;
use crate::config::ResolverConfig;
use crate::di::deferred::LazyDeferredFactory;
use crate::di::resolvers::{
    AliasResolver, ArrayResolver, DecoratorResolver, DefinitionResolver, DotNotationResolver,
    EnvironmentVariableResolver, FactoryResolver, InstanceResolver, InteropResolver, KindResolver,
    ObjectResolver, Resolution, StringResolver, ValueResolver,
};
use defres_domain::definition::{Definition, DefinitionKind, DefinitionTag};
use defres_domain::error::{Error, Result};
use defres_domain::ports::{Container, DeferredFactory, EnvironmentSource, ServiceRegistry};
use defres_domain::value::{Parameters, Value};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

/// Dispatches definitions to the strategy matching their kind
///
/// Cheap to clone; clones share the same strategies and collaborators.
#[derive(Clone)]
pub struct ResolverDispatcher {
    inner: Arc<DispatcherInner>,
}

struct DispatcherInner {
    container: Arc<dyn Container>,
    value: ValueResolver,
    instance: InstanceResolver,
    array: ArrayResolver,
    alias: AliasResolver,
    object: ObjectResolver,
    factory: FactoryResolver,
    decorator: DecoratorResolver,
    environment: EnvironmentVariableResolver,
    string: StringResolver,
    dot_notation: DotNotationResolver,
    interop: Option<InteropResolver>,
}

impl ResolverDispatcher {
    /// Dispatcher with default collaborators
    pub fn new(container: Arc<dyn Container>) -> Self {
        Self::builder(container).build()
    }

    pub fn builder(container: Arc<dyn Container>) -> ResolverDispatcherBuilder {
        ResolverDispatcherBuilder::new(container)
    }

    /// Container shared with every strategy
    pub fn container(&self) -> &Arc<dyn Container> {
        &self.inner.container
    }

    /// Resolve a definition to a value
    pub fn resolve(&self, definition: &Definition, parameters: &Parameters) -> Result<Value> {
        debug!(
            name = definition.name(),
            kind = %definition.tag(),
            "Resolving definition"
        );

        let resolution = Resolution::new(definition, parameters, self);
        let inner = &self.inner;
        let result = match definition.kind() {
            DefinitionKind::Value(value) => inner.value.resolve(&resolution, value),
            DefinitionKind::Instance(instance) => inner.instance.resolve(&resolution, instance),
            DefinitionKind::Array(array) => inner.array.resolve(&resolution, array),
            DefinitionKind::Alias(alias) => inner.alias.resolve(&resolution, alias),
            DefinitionKind::Object(object) => inner.object.resolve(&resolution, object),
            DefinitionKind::Factory(factory) => inner.factory.resolve(&resolution, factory),
            DefinitionKind::Decorator(decorator) => {
                inner.decorator.resolve(&resolution, decorator)
            }
            DefinitionKind::EnvironmentVariable(env) => {
                inner.environment.resolve(&resolution, env)
            }
            DefinitionKind::String(string) => inner.string.resolve(&resolution, string),
            DefinitionKind::DotNotation(dot) => inner.dot_notation.resolve(&resolution, dot),
            DefinitionKind::Interop(interop) => match &inner.interop {
                Some(resolver) => resolver.resolve(&resolution, interop),
                None => Err(no_resolver(definition.tag())),
            },
        };

        if let Err(err) = &result {
            debug!(
                name = definition.name(),
                kind = %definition.tag(),
                error = %err,
                "Definition resolution failed"
            );
        }
        result
    }

    /// Check if a definition can be resolved
    pub fn is_resolvable(&self, definition: &Definition, parameters: &Parameters) -> bool {
        let resolution = Resolution::new(definition, parameters, self);
        let inner = &self.inner;
        match definition.kind() {
            DefinitionKind::Value(value) => inner.value.is_resolvable(&resolution, value),
            DefinitionKind::Instance(instance) => {
                inner.instance.is_resolvable(&resolution, instance)
            }
            DefinitionKind::Array(array) => inner.array.is_resolvable(&resolution, array),
            DefinitionKind::Alias(alias) => inner.alias.is_resolvable(&resolution, alias),
            DefinitionKind::Object(object) => inner.object.is_resolvable(&resolution, object),
            DefinitionKind::Factory(factory) => inner.factory.is_resolvable(&resolution, factory),
            DefinitionKind::Decorator(decorator) => {
                inner.decorator.is_resolvable(&resolution, decorator)
            }
            DefinitionKind::EnvironmentVariable(env) => {
                inner.environment.is_resolvable(&resolution, env)
            }
            DefinitionKind::String(string) => inner.string.is_resolvable(&resolution, string),
            DefinitionKind::DotNotation(dot) => {
                inner.dot_notation.is_resolvable(&resolution, dot)
            }
            DefinitionKind::Interop(interop) => inner
                .interop
                .as_ref()
                .is_some_and(|resolver| resolver.is_resolvable(&resolution, interop)),
        }
    }

    pub(crate) fn object_resolver(&self) -> &ObjectResolver {
        &self.inner.object
    }
}

impl DefinitionResolver for ResolverDispatcher {
    fn resolve(&self, definition: &Definition, parameters: &Parameters) -> Result<Value> {
        ResolverDispatcher::resolve(self, definition, parameters)
    }

    fn is_resolvable(&self, definition: &Definition, parameters: &Parameters) -> bool {
        ResolverDispatcher::is_resolvable(self, definition, parameters)
    }
}

impl fmt::Debug for ResolverDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolverDispatcher")
            .field("interop", &self.inner.interop.is_some())
            .finish_non_exhaustive()
    }
}

fn no_resolver(tag: DefinitionTag) -> Error {
    Error::configuration(format!(
        "No definition resolver was configured for definition kind {}",
        tag
    ))
}

/// Builder wiring the dispatcher's collaborators
pub struct ResolverDispatcherBuilder {
    container: Arc<dyn Container>,
    deferred_factory: Option<Arc<dyn DeferredFactory>>,
    registry: Option<Arc<dyn ServiceRegistry>>,
    environment: Option<Arc<dyn EnvironmentSource>>,
    config: ResolverConfig,
}

impl ResolverDispatcherBuilder {
    pub fn new(container: Arc<dyn Container>) -> Self {
        Self {
            container,
            deferred_factory: None,
            registry: None,
            environment: None,
            config: ResolverConfig::default(),
        }
    }

    /// Facility used for lazy object definitions
    pub fn with_deferred_factory(mut self, deferred_factory: Arc<dyn DeferredFactory>) -> Self {
        self.deferred_factory = Some(deferred_factory);
        self
    }

    /// Registry enabling interop definitions
    pub fn with_registry(mut self, registry: Arc<dyn ServiceRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Environment read by environment variable definitions
    pub fn with_environment(mut self, environment: Arc<dyn EnvironmentSource>) -> Self {
        self.environment = Some(environment);
        self
    }

    pub fn with_config(mut self, config: &ResolverConfig) -> Self {
        self.config = config.clone();
        self
    }

    pub fn build(self) -> ResolverDispatcher {
        let container = self.container;
        let deferred_factory: Arc<dyn DeferredFactory> = match self.deferred_factory {
            Some(deferred_factory) => deferred_factory,
            None => Arc::new(LazyDeferredFactory),
        };
        let environment: Arc<dyn EnvironmentSource> = match self.environment {
            Some(environment) => environment,
            None => Arc::new(ProcessEnvironment),
        };
        let interop = self
            .registry
            .map(|registry| InteropResolver::new(Arc::clone(&container), registry));

        info!(
            deferred_objects = self.config.deferred_objects,
            interop = interop.is_some(),
            "Resolver dispatcher built"
        );

        ResolverDispatcher {
            inner: Arc::new(DispatcherInner {
                value: ValueResolver,
                instance: InstanceResolver,
                array: ArrayResolver,
                alias: AliasResolver::new(Arc::clone(&container)),
                object: ObjectResolver::new(
                    Arc::clone(&container),
                    deferred_factory,
                    self.config.deferred_objects,
                ),
                factory: FactoryResolver::new(Arc::clone(&container)),
                decorator: DecoratorResolver::new(Arc::clone(&container)),
                environment: EnvironmentVariableResolver::new(environment),
                string: StringResolver::new(Arc::clone(&container)),
                dot_notation: DotNotationResolver::new(Arc::clone(&container)),
                interop,
                container,
            }),
        }
    }
}
