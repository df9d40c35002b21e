//! Container port

use crate::error::Result;
use crate::value::Value;

/// Read-only name to value lookup
///
/// The resolution engine never writes to the container. Implementations used
/// from several threads must support concurrent reads.
pub trait Container: Send + Sync {
    /// Value registered under `name`, or [`crate::error::Error::NotFound`]
    fn get(&self, name: &str) -> Result<Value>;

    /// Whether an entry exists under `name`
    fn has(&self, name: &str) -> bool;
}
