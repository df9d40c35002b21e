//! Error extension utilities
//!
//! Context extension methods turning foreign errors, and failures raised by
//! user callables, into domain errors.

use defres_domain::definition::DefinitionTag;
use defres_domain::error::{Error, Result};
use std::fmt;

/// Extension trait for adding context to errors
///
/// # Example
///
/// ```ignore
/// use defres_infrastructure::error_ext::ErrorContext;
///
/// let figment_config = figment.extract().config_context("Failed to extract configuration")?;
///
/// // Wrap a constructor failure with the definition being resolved
/// let instance = constructor
///     .construct(arguments)
///     .construction_context(definition.name(), definition.tag())?;
/// ```
pub trait ErrorContext<T> {
    /// Add context for I/O operations
    fn io_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Add context for configuration operations
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Wrap a callable failure with the definition name and kind
    fn construction_context(self, name: &str, tag: DefinitionTag) -> Result<T>;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn io_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|err| Error::Io {
            message: format!("{}: {}", context, err),
            source: Some(Box::new(err)),
        })
    }

    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|err| Error::Configuration {
            message: format!("{}: {}", context, err),
            source: Some(Box::new(err)),
        })
    }

    fn construction_context(self, name: &str, tag: DefinitionTag) -> Result<T> {
        self.map_err(|err| Error::construction_with_source(name, tag, err))
    }
}
