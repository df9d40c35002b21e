// Clippy allows for complex patterns in infrastructure code
#![allow(clippy::collapsible_if)]

//! # Infrastructure Layer
//!
//! Resolution machinery and the cross-cutting concerns around it.
//!
//! ## Module Categories
//!
//! ### Resolution
//! | Module | Description |
//! |--------|-------------|
//! | [`di`] | Resolver dispatcher, per-kind strategies, deferred construction, provider registry |
//! | [`adapters`] | In-process container and environment sources |
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Layered figment configuration (defaults, TOML, environment) |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |

pub mod adapters;
pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use di::{ResolverDispatcher, ResolverDispatcherBuilder};
pub use error_ext::ErrorContext;
