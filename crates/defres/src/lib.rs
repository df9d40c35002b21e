//! # defres
//!
//! Definition resolution engine for dependency injection containers.
//!
//! A container stores *definitions*: declarative descriptions of how to
//! obtain an entry. This crate turns a definition into a value by routing it
//! to the strategy for its kind.
//!
//! ## Example
//!
//! ```ignore
//! use defres::prelude::*;
//! use std::sync::Arc;
//!
//! let container = Arc::new(InMemoryContainer::new().with_entry("db.host", "localhost"));
//! let dispatcher = ResolverDispatcher::new(container);
//!
//! let dsn = Definition::string("dsn", "mysql://{db.host}/app");
//! let value = dispatcher.resolve(&dsn, &Parameters::new())?;
//! assert_eq!(value.as_str(), Some("mysql://localhost/app"));
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Definitions, values, errors and the ports the engine consumes
//! - `infrastructure` - Dispatcher, strategies, config, logging and adapters

/// Domain layer - definitions, values and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use defres_domain::*;
}

/// Infrastructure layer - resolution, config and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use defres_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

pub use infrastructure::{ResolverDispatcher, ResolverDispatcherBuilder};

/// Everything needed to declare and resolve definitions
pub mod prelude {
    pub use defres_domain::definition::{
        ArrayDefinition, ClassConstructor, Definition, DefinitionKind, DefinitionTag, Entry,
        MethodInjection, ObjectDefinition, ParameterSpec, PropertyInjection,
    };
    pub use defres_domain::error::{Error, Result};
    pub use defres_domain::ports::{
        Container, DeferredFactory, EnvironmentSource, PreviousAccessor, ServiceRegistry,
    };
    pub use defres_domain::value::{DeferredValue, ObjectRef, Parameters, Value};
    pub use defres_infrastructure::adapters::{
        InMemoryContainer, MapEnvironment, ProcessEnvironment,
    };
    pub use defres_infrastructure::config::{AppConfig, ConfigLoader, ResolverConfig};
    pub use defres_infrastructure::di::{
        DefinitionResolver, LazyDeferredFactory, ProviderRegistry, ResolverDispatcher,
        ResolverDispatcherBuilder,
    };
}
