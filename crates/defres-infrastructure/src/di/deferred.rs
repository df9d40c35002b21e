//! Deferred construction facility

use defres_domain::ports::DeferredFactory;
use defres_domain::value::{DeferredInit, DeferredValue, Value};
use tracing::trace;

/// Wraps constructions in a memoising [`DeferredValue`] handle
///
/// Nothing runs until the handle is first accessed.
#[derive(Debug, Clone, Copy, Default)]
pub struct LazyDeferredFactory;

impl DeferredFactory for LazyDeferredFactory {
    fn defer(&self, class_name: &str, init: DeferredInit) -> Value {
        trace!(class = class_name, "Creating deferred handle");
        Value::Deferred(DeferredValue::new(class_name, init))
    }
}
