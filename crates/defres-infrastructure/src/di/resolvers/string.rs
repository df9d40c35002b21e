//! Interpolated string strategy

use super::{KindResolver, Resolution};
use defres_domain::constants::STRING_REFERENCE_PATTERN;
use defres_domain::definition::StringDefinition;
use defres_domain::error::{Error, Result};
use defres_domain::ports::Container;
use defres_domain::value::Value;
use regex::Regex;
use std::sync::{Arc, LazyLock};

static REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(STRING_REFERENCE_PATTERN).expect("Invalid regex"));

/// Substitutes `{entry}` tokens with the string form of container entries
pub struct StringResolver {
    container: Arc<dyn Container>,
}

impl StringResolver {
    pub fn new(container: Arc<dyn Container>) -> Self {
        Self { container }
    }
}

impl KindResolver<StringDefinition> for StringResolver {
    fn resolve(&self, resolution: &Resolution<'_>, string: &StringDefinition) -> Result<Value> {
        let expression = string.expression.as_str();
        let mut result = String::with_capacity(expression.len());
        let mut last = 0;

        for captures in REFERENCE.captures_iter(expression) {
            let (Some(token), Some(reference)) = (captures.get(0), captures.get(1)) else {
                continue;
            };
            result.push_str(&expression[last..token.start()]);

            let value = self.container.get(reference.as_str())?;
            let text = value.to_interpolated_string().map_err(|err| {
                if err.is_type_error() {
                    Error::type_error(format!(
                        "Entry \"{}\": cannot substitute '{}' in string expression: {}",
                        resolution.name(),
                        reference.as_str(),
                        err
                    ))
                } else {
                    err
                }
            })?;
            result.push_str(&text);
            last = token.end();
        }
        result.push_str(&expression[last..]);

        Ok(Value::String(result))
    }
}
