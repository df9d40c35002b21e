//! Deferred construction handle

use super::Value;
use crate::error::{Error, Result};
use once_cell::sync::OnceCell;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, ThreadId};

/// Initialiser run by a [`DeferredValue`] on first access
pub type DeferredInit = Arc<dyn Fn() -> Result<Value> + Send + Sync>;

/// Lazily constructed, memoised value
///
/// Construction happens on the first call to [`DeferredValue::get`], possibly
/// on a different call path than the one that created the handle. A failed
/// construction is reported to that caller and leaves the handle empty, so a
/// later access runs the initialiser again.
///
/// Accessing a handle from inside its own initialiser (a construction cycle
/// with no other deferred handle to break it) fails with a configuration
/// error. Other threads block until the running construction finishes.
#[derive(Clone)]
pub struct DeferredValue {
    inner: Arc<DeferredInner>,
}

struct DeferredInner {
    class_name: String,
    cell: OnceCell<Value>,
    init: DeferredInit,
    /// Thread currently running `init`
    initializing: Mutex<Option<ThreadId>>,
}

/// Clears the initialising thread on every exit path
struct InitGuard<'a>(&'a Mutex<Option<ThreadId>>);

impl Drop for InitGuard<'_> {
    fn drop(&mut self) {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl DeferredValue {
    pub fn new<S: Into<String>>(class_name: S, init: DeferredInit) -> Self {
        Self {
            inner: Arc::new(DeferredInner {
                class_name: class_name.into(),
                cell: OnceCell::new(),
                init,
                initializing: Mutex::new(None),
            }),
        }
    }

    /// Name of the class this handle stands in for
    pub fn class_name(&self) -> &str {
        &self.inner.class_name
    }

    /// Whether the underlying value has been constructed
    pub fn is_initialized(&self) -> bool {
        self.inner.cell.get().is_some()
    }

    /// Construct on first access, then return the memoised value
    pub fn get(&self) -> Result<&Value> {
        if let Some(value) = self.inner.cell.get() {
            return Ok(value);
        }

        let current = thread::current().id();
        let initializing = *self
            .inner
            .initializing
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if initializing == Some(current) {
            return Err(Error::configuration(format!(
                "circular dependency while constructing {}",
                self.inner.class_name
            )));
        }

        self.inner.cell.get_or_try_init(|| {
            *self
                .inner
                .initializing
                .lock()
                .unwrap_or_else(PoisonError::into_inner) = Some(current);
            let _guard = InitGuard(&self.inner.initializing);
            (self.inner.init)()
        })
    }

    /// Whether both handles share the same underlying cell
    pub fn ptr_eq(&self, other: &DeferredValue) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for DeferredValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredValue")
            .field("class_name", &self.inner.class_name)
            .field("initialized", &self.is_initialized())
            .finish()
    }
}
