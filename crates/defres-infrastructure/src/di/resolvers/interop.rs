//! Interop strategy

use super::{KindResolver, Resolution};
use defres_domain::definition::InteropDefinition;
use defres_domain::error::Result;
use defres_domain::ports::{Container, PreviousAccessor, ServiceRegistry};
use defres_domain::value::{Parameters, Value};
use std::sync::Arc;
use tracing::trace;

/// Delegates creation to the external service registry
///
/// When the definition overrides another, the registry receives an accessor
/// that resolves the previous definition on demand; it is never called here.
pub struct InteropResolver {
    container: Arc<dyn Container>,
    registry: Arc<dyn ServiceRegistry>,
}

impl InteropResolver {
    pub fn new(container: Arc<dyn Container>, registry: Arc<dyn ServiceRegistry>) -> Self {
        Self {
            container,
            registry,
        }
    }
}

impl KindResolver<InteropDefinition> for InteropResolver {
    fn resolve(&self, resolution: &Resolution<'_>, interop: &InteropDefinition) -> Result<Value> {
        let previous = resolution.definition().previous_shared().map(|previous| {
            let dispatcher = resolution.dispatcher().clone();
            let accessor: PreviousAccessor =
                Arc::new(move || dispatcher.resolve(&previous, &Parameters::new()));
            accessor
        });

        trace!(
            name = resolution.name(),
            registry_key = %interop.registry_key,
            has_previous = previous.is_some(),
            "Creating service through registry"
        );

        self.registry.create_service(
            &interop.registry_key,
            resolution.name(),
            self.container.as_ref(),
            previous,
        )
    }
}
