//! Deferred construction port

use crate::value::{DeferredInit, Value};

/// Wraps an object construction behind a handle
///
/// The returned value performs `init` on first access and memoises the
/// result. Construction failures surface at access time, not here.
pub trait DeferredFactory: Send + Sync {
    /// Defer construction of an instance of `class_name`
    fn defer(&self, class_name: &str, init: DeferredInit) -> Value;
}
