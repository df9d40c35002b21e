//! Configuration
//!
//! Typed configuration and its layered loader (defaults, TOML file,
//! environment variables).

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, LoggingConfig, ResolverConfig};
