//! Decorator strategy

use super::{KindResolver, Resolution};
use crate::error_ext::ErrorContext;
use defres_domain::definition::DecoratorDefinition;
use defres_domain::error::{Error, Result};
use defres_domain::ports::Container;
use defres_domain::value::Value;
use std::sync::Arc;

/// Wraps the value of the previous definition
///
/// The previous definition is resolved through the dispatcher, so it may be
/// of any kind, including another decorator.
pub struct DecoratorResolver {
    container: Arc<dyn Container>,
}

impl DecoratorResolver {
    pub fn new(container: Arc<dyn Container>) -> Self {
        Self { container }
    }
}

impl KindResolver<DecoratorDefinition> for DecoratorResolver {
    fn resolve(
        &self,
        resolution: &Resolution<'_>,
        decorator: &DecoratorDefinition,
    ) -> Result<Value> {
        let previous = resolution.definition().previous().ok_or_else(|| {
            Error::configuration(format!(
                "Entry \"{}\" decorates nothing: no previous definition found",
                resolution.name()
            ))
        })?;

        let decorated = resolution
            .dispatcher()
            .resolve(previous, resolution.parameters())?;

        (decorator.decorator)(decorated, self.container.as_ref())
            .construction_context(resolution.name(), resolution.tag())
    }

    fn is_resolvable(&self, resolution: &Resolution<'_>, _decorator: &DecoratorDefinition) -> bool {
        resolution.definition().previous().is_some()
    }
}
