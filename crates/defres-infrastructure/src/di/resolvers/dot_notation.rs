//! Dot-notation path strategy

use super::{KindResolver, Resolution};
use defres_domain::constants::PATH_SEPARATOR;
use defres_domain::definition::DotNotationDefinition;
use defres_domain::error::{Error, Result};
use defres_domain::ports::Container;
use defres_domain::value::Value;
use std::sync::Arc;

/// Looks up the first segment in the container and descends through the rest
///
/// Later segments index into maps by key and into lists by position.
pub struct DotNotationResolver {
    container: Arc<dyn Container>,
}

impl DotNotationResolver {
    pub fn new(container: Arc<dyn Container>) -> Self {
        Self { container }
    }
}

impl KindResolver<DotNotationDefinition> for DotNotationResolver {
    fn resolve(&self, resolution: &Resolution<'_>, dot: &DotNotationDefinition) -> Result<Value> {
        let path = dot.path.as_str();
        if path.split(PATH_SEPARATOR).any(str::is_empty) {
            return Err(Error::configuration(format!(
                "Entry \"{}\": invalid dot-notation path '{}'",
                resolution.name(),
                path
            )));
        }

        let mut segments = path.split(PATH_SEPARATOR);
        let root = segments.next().unwrap_or(path);
        let mut current = self.container.get(root)?;

        for segment in segments {
            let node = current.force()?;
            let child = match &node {
                Value::Map(entries) => entries.get(segment).cloned(),
                Value::List(items) => segment
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| items.get(index).cloned()),
                _ => None,
            };
            current = child.ok_or_else(|| Error::missing_segment(path, segment))?;
        }

        Ok(current)
    }
}
