//! Port adapters
//!
//! Simple in-process implementations of the domain ports:
//! a map-backed container and environment sources.

pub mod container;
pub mod environment;

pub use container::InMemoryContainer;
pub use environment::{MapEnvironment, ProcessEnvironment};
