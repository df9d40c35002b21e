//! Factory strategy

use super::{KindResolver, Resolution};
use crate::error_ext::ErrorContext;
use defres_domain::definition::FactoryDefinition;
use defres_domain::error::Result;
use defres_domain::ports::Container;
use defres_domain::value::{Parameters, Value};
use std::sync::Arc;

/// Invokes a factory callable once with the container and its parameters
///
/// Static parameters are resolved first; call-time parameters are merged on
/// top and win on key collisions.
pub struct FactoryResolver {
    container: Arc<dyn Container>,
}

impl FactoryResolver {
    pub fn new(container: Arc<dyn Container>) -> Self {
        Self { container }
    }
}

impl KindResolver<FactoryDefinition> for FactoryResolver {
    fn resolve(&self, resolution: &Resolution<'_>, factory: &FactoryDefinition) -> Result<Value> {
        let mut parameters =
            Parameters::with_capacity(factory.parameters.len() + resolution.parameters().len());
        for (key, entry) in &factory.parameters {
            parameters.insert(key.clone(), resolution.resolve_entry(entry)?);
        }
        for (key, value) in resolution.parameters() {
            parameters.insert(key.clone(), value.clone());
        }

        (factory.factory)(self.container.as_ref(), &parameters)
            .construction_context(resolution.name(), resolution.tag())
    }
}
