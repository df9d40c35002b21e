//! Definition resolution
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`dispatcher`] | Routes definitions to the strategy for their kind |
//! | [`resolvers`] | One strategy per definition kind |
//! | [`deferred`] | Deferred construction for lazy objects |
//! | [`registry`] | Service provider registry for interop entries |

pub mod deferred;
pub mod dispatcher;
pub mod registry;
pub mod resolvers;

pub use deferred::LazyDeferredFactory;
pub use dispatcher::{ResolverDispatcher, ResolverDispatcherBuilder};
pub use registry::{
    ProviderRegistry, SERVICE_PROVIDERS, ServiceFactoryFn, ServiceProviderEntry,
    list_service_providers,
};
pub use resolvers::{DefinitionResolver, KindResolver, Resolution};
