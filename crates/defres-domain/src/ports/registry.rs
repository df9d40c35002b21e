//! External service-provider registry port

use std::sync::Arc;

use crate::error::Result;
use crate::ports::container::Container;
use crate::value::Value;

/// Zero-argument accessor resolving the definition an interop entry overrides
///
/// The registry decides whether and when to call it.
pub type PreviousAccessor = Arc<dyn Fn() -> Result<Value> + Send + Sync>;

/// Registry of service providers able to create entries by name
///
/// This is the seam third-party service providers plug into.
pub trait ServiceRegistry: Send + Sync {
    /// Create entry `name` using the provider registered under `registry_key`
    ///
    /// # Arguments
    /// * `registry_key` - Provider identifier
    /// * `name` - Entry being created
    /// * `container` - Container the provider may query for dependencies
    /// * `previous` - Accessor for the overridden definition, if any
    fn create_service(
        &self,
        registry_key: &str,
        name: &str,
        container: &dyn Container,
        previous: Option<PreviousAccessor>,
    ) -> Result<Value>;
}
