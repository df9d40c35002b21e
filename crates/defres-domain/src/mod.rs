//! # Domain Layer
//!
//! Core types of the definition-resolution engine, free of any resolution
//! machinery:
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`definition`] | Declarative definitions and their kinds |
//! | [`value`] | Runtime values, object handles and deferred handles |
//! | [`ports`] | Contracts for containers, deferred construction, services and the environment |
//! | [`error`] | Error taxonomy shared by every layer |
//! | [`constants`] | Shared constants |

pub mod constants;
pub mod definition;
pub mod error;
pub mod ports;
pub mod value;

pub use definition::{Definition, DefinitionKind, DefinitionTag, Entry};
pub use error::{Error, Result};
pub use value::{ObjectRef, Parameters, Value};
