//! Value and instance strategies

use super::{KindResolver, Resolution};
use defres_domain::error::Result;
use defres_domain::value::Value;

/// Returns the literal held by a value definition
#[derive(Debug, Default)]
pub struct ValueResolver;

impl KindResolver<Value> for ValueResolver {
    fn resolve(&self, _resolution: &Resolution<'_>, value: &Value) -> Result<Value> {
        Ok(value.clone())
    }
}

/// Returns the object held by an instance definition, same handle every time
#[derive(Debug, Default)]
pub struct InstanceResolver;

impl KindResolver<Value> for InstanceResolver {
    fn resolve(&self, _resolution: &Resolution<'_>, instance: &Value) -> Result<Value> {
        Ok(instance.clone())
    }
}
