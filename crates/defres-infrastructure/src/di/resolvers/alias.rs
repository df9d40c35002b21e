//! Alias strategy

use super::{KindResolver, Resolution};
use defres_domain::definition::AliasDefinition;
use defres_domain::error::Result;
use defres_domain::ports::Container;
use defres_domain::value::Value;
use std::sync::Arc;
use tracing::trace;

/// Returns the container entry an alias points to
pub struct AliasResolver {
    container: Arc<dyn Container>,
}

impl AliasResolver {
    pub fn new(container: Arc<dyn Container>) -> Self {
        Self { container }
    }
}

impl KindResolver<AliasDefinition> for AliasResolver {
    fn resolve(&self, resolution: &Resolution<'_>, alias: &AliasDefinition) -> Result<Value> {
        trace!(name = resolution.name(), target = %alias.target, "Following alias");
        self.container.get(&alias.target)
    }

    fn is_resolvable(&self, _resolution: &Resolution<'_>, alias: &AliasDefinition) -> bool {
        self.container.has(&alias.target)
    }
}
