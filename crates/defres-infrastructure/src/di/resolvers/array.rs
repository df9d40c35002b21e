//! Array strategy

use super::{KindResolver, Resolution};
use defres_domain::definition::ArrayDefinition;
use defres_domain::error::Result;
use defres_domain::value::Value;
use indexmap::IndexMap;

/// Resolves every nested definition of a list or map, keeping order and keys
#[derive(Debug, Default)]
pub struct ArrayResolver;

impl KindResolver<ArrayDefinition> for ArrayResolver {
    fn resolve(&self, resolution: &Resolution<'_>, array: &ArrayDefinition) -> Result<Value> {
        match array {
            ArrayDefinition::List(entries) => entries
                .iter()
                .map(|entry| resolution.resolve_entry(entry))
                .collect::<Result<Vec<_>>>()
                .map(Value::List),
            ArrayDefinition::Map(entries) => entries
                .iter()
                .map(|(key, entry)| Ok((key.clone(), resolution.resolve_entry(entry)?)))
                .collect::<Result<IndexMap<_, _>>>()
                .map(Value::Map),
        }
    }
}
