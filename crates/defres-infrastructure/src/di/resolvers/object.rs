//! Object strategy
//!
//! Builds an object from its constructor parameters, then injects properties
//! and calls injection methods in declaration order. Any failure aborts the
//! whole creation: a constructor is never called with partially resolved
//! arguments and a half-injected instance is never returned.
//!
//! Lazy definitions are wrapped in a deferred handle; argument resolution,
//! construction and injection all happen on first access of that handle,
//! which is what breaks reference cycles through the object.

use super::{KindResolver, Resolution};
use crate::error_ext::ErrorContext;
use defres_domain::definition::{ObjectDefinition, ParameterSpec};
use defres_domain::error::{Error, Result};
use defres_domain::ports::{Container, DeferredFactory};
use defres_domain::value::{DeferredInit, Parameters, Value};
use std::sync::Arc;
use tracing::trace;

const CONSTRUCTOR: &str = "__construct";

pub struct ObjectResolver {
    container: Arc<dyn Container>,
    deferred_factory: Arc<dyn DeferredFactory>,
    deferred_objects: bool,
}

impl ObjectResolver {
    pub fn new(
        container: Arc<dyn Container>,
        deferred_factory: Arc<dyn DeferredFactory>,
        deferred_objects: bool,
    ) -> Self {
        Self {
            container,
            deferred_factory,
            deferred_objects,
        }
    }

    /// Resolve arguments, construct, then inject
    pub(crate) fn create_instance(
        &self,
        resolution: &Resolution<'_>,
        object: &ObjectDefinition,
    ) -> Result<Value> {
        let constructor = object
            .constructor
            .as_ref()
            .ok_or_else(|| not_instantiable(resolution.name(), &object.class_name))?;

        let arguments = self.resolve_parameters(
            resolution,
            object,
            CONSTRUCTOR,
            &object.parameters,
            Some(resolution.parameters()),
        )?;

        trace!(
            name = resolution.name(),
            class = %object.class_name,
            arguments = arguments.len(),
            "Constructing object"
        );
        let instance = constructor
            .construct(arguments)
            .construction_context(resolution.name(), resolution.tag())?;

        for property in &object.properties {
            let value = resolution.resolve_entry(&property.value)?;
            constructor
                .set_property(&instance, &property.name, value)
                .construction_context(resolution.name(), resolution.tag())?;
        }

        for method in &object.methods {
            let arguments = self.resolve_parameters(
                resolution,
                object,
                &method.method,
                &method.parameters,
                None,
            )?;
            constructor
                .call_method(&instance, &method.method, arguments)
                .construction_context(resolution.name(), resolution.tag())?;
        }

        Ok(instance)
    }

    fn resolve_parameters(
        &self,
        resolution: &Resolution<'_>,
        object: &ObjectDefinition,
        function: &str,
        specs: &[ParameterSpec],
        call_parameters: Option<&Parameters>,
    ) -> Result<Vec<Value>> {
        specs
            .iter()
            .map(|spec| self.resolve_parameter(resolution, object, function, spec, call_parameters))
            .collect()
    }

    fn resolve_parameter(
        &self,
        resolution: &Resolution<'_>,
        object: &ObjectDefinition,
        function: &str,
        spec: &ParameterSpec,
        call_parameters: Option<&Parameters>,
    ) -> Result<Value> {
        if let Some(entry) = &spec.value {
            return resolution.resolve_entry(entry);
        }
        if let Some(value) = call_parameters.and_then(|parameters| parameters.get(&spec.name)) {
            return Ok(value.clone());
        }
        if let Some(type_hint) = &spec.type_hint {
            if self.container.has(type_hint) {
                return self.container.get(type_hint);
            }
        }
        if let Some(default) = &spec.default {
            return Ok(default.clone());
        }
        if spec.optional {
            return Ok(Value::Null);
        }

        Err(Error::configuration(format!(
            "Entry \"{}\" cannot be resolved: Parameter ${} of {}::{}() has no value defined \
             or guessable",
            resolution.name(),
            spec.name,
            object.class_name,
            function
        )))
    }
}

impl KindResolver<ObjectDefinition> for ObjectResolver {
    fn resolve(&self, resolution: &Resolution<'_>, object: &ObjectDefinition) -> Result<Value> {
        if !object.is_instantiable() {
            return Err(not_instantiable(resolution.name(), &object.class_name));
        }

        if object.lazy && self.deferred_objects {
            trace!(
                name = resolution.name(),
                class = %object.class_name,
                "Deferring object construction"
            );
            let dispatcher = resolution.dispatcher().clone();
            let definition = resolution.definition().clone();
            let parameters = resolution.parameters().clone();
            let class_name = object.class_name.clone();
            let object = object.clone();
            let init: DeferredInit = Arc::new(move || {
                let resolution = Resolution::new(&definition, &parameters, &dispatcher);
                dispatcher
                    .object_resolver()
                    .create_instance(&resolution, &object)
            });
            return Ok(self.deferred_factory.defer(&class_name, init));
        }

        self.create_instance(resolution, object)
    }

    fn is_resolvable(&self, _resolution: &Resolution<'_>, object: &ObjectDefinition) -> bool {
        object.is_instantiable()
    }
}

fn not_instantiable(name: &str, class_name: &str) -> Error {
    Error::configuration(format!(
        "Entry \"{}\" cannot be resolved: the class {} is not instantiable",
        name, class_name
    ))
}
