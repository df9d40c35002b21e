//! Environment variable port

use crate::error::Result;

/// Source of environment variables
pub trait EnvironmentSource: Send + Sync {
    /// Value of the variable, `None` when unset
    ///
    /// A variable that is set but cannot be read as a string is an error,
    /// never `None`.
    fn var(&self, name: &str) -> Result<Option<String>>;
}
