//! Domain Port Interfaces
//!
//! Boundary contracts between the resolution engine and its collaborators.
//! The engine only consumes these; implementations live in the
//! infrastructure layer or are supplied by the embedding application.
//!
//! ## Organization
//!
//! - **container** - Name to value lookup used for dependencies
//! - **deferred** - Deferred construction of objects
//! - **registry** - External service-provider registry for interop entries
//! - **environment** - Environment variable source

/// Name to value lookup
pub mod container;
/// Deferred construction facility
pub mod deferred;
/// Environment variable source
pub mod environment;
/// External service-provider registry
pub mod registry;

pub use container::Container;
pub use deferred::DeferredFactory;
pub use environment::EnvironmentSource;
pub use registry::{PreviousAccessor, ServiceRegistry};
