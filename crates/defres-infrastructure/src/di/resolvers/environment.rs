//! Environment variable strategy

use super::{KindResolver, Resolution};
use defres_domain::definition::EnvironmentVariableDefinition;
use defres_domain::error::{Error, Result};
use defres_domain::ports::EnvironmentSource;
use defres_domain::value::Value;
use std::sync::Arc;
use tracing::trace;

/// Reads an environment variable, falling back to the default entry
pub struct EnvironmentVariableResolver {
    environment: Arc<dyn EnvironmentSource>,
}

impl EnvironmentVariableResolver {
    pub fn new(environment: Arc<dyn EnvironmentSource>) -> Self {
        Self { environment }
    }
}

impl KindResolver<EnvironmentVariableDefinition> for EnvironmentVariableResolver {
    fn resolve(
        &self,
        resolution: &Resolution<'_>,
        env: &EnvironmentVariableDefinition,
    ) -> Result<Value> {
        if let Some(value) = self.environment.var(&env.variable)? {
            return Ok(Value::String(value));
        }

        match &env.default {
            Some(default) => {
                trace!(variable = %env.variable, "Environment variable unset, using default");
                resolution.resolve_entry(default)
            }
            None => Err(Error::not_found(env.variable.clone())),
        }
    }

    fn is_resolvable(
        &self,
        _resolution: &Resolution<'_>,
        env: &EnvironmentVariableDefinition,
    ) -> bool {
        match self.environment.var(&env.variable) {
            Ok(Some(_)) => true,
            Ok(None) => env.default.is_some(),
            Err(_) => false,
        }
    }
}
