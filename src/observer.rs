//! Diagnostic observers for resolution events.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;

use crate::error::DiError;
use crate::key::ServiceId;

/// Observer trait for container resolution events.
///
/// Calls are made synchronously on the resolving thread, nested resolutions
/// included, so implementations should stay cheap.
///
/// # Examples
///
/// ```
/// use ferrous_ioc::{Container, ContainerObserver, Resolver, ServiceId};
/// use std::sync::{Arc, Mutex};
/// use std::time::Duration;
///
/// #[derive(Default)]
/// struct Recorder(Mutex<Vec<&'static str>>);
///
/// impl ContainerObserver for Recorder {
///     fn resolving(&self, id: &ServiceId) {
///         self.0.lock().unwrap().push(id.bare_name());
///     }
///
///     fn resolved(&self, _id: &ServiceId, _duration: Duration) {}
/// }
///
/// let recorder = Arc::new(Recorder::default());
/// let container = Container::new();
/// container.add_observer(recorder.clone());
/// container.register_instance(Arc::new(7u16));
/// container.resolve::<u16>().unwrap();
///
/// assert_eq!(*recorder.0.lock().unwrap(), vec!["u16"]);
/// ```
pub trait ContainerObserver: Send + Sync {
    /// Called before a service is looked up.
    fn resolving(&self, id: &ServiceId);

    /// Called after a service resolved successfully.
    fn resolved(&self, id: &ServiceId, duration: Duration);

    /// Called when resolution fails, including for unregistered services.
    fn failed(&self, _id: &ServiceId, _error: &DiError) {}

    /// Called when a singleton binding is replaced by its first instance.
    fn promoted(&self, _id: &ServiceId) {}
}

/// Observer that reports resolution events through `tracing`.
///
/// Successful resolutions and promotions are emitted at `TRACE`/`DEBUG`,
/// failures at `WARN`.
#[derive(Debug, Clone, Default)]
pub struct TracingObserver;

impl TracingObserver {
    pub fn new() -> Self {
        Self
    }
}

impl ContainerObserver for TracingObserver {
    fn resolving(&self, id: &ServiceId) {
        tracing::trace!(service = id.type_name(), "resolving");
    }

    fn resolved(&self, id: &ServiceId, duration: Duration) {
        tracing::trace!(service = id.type_name(), elapsed = ?duration, "resolved");
    }

    fn failed(&self, id: &ServiceId, error: &DiError) {
        tracing::warn!(service = id.type_name(), %error, "resolution failed");
    }

    fn promoted(&self, id: &ServiceId) {
        tracing::debug!(service = id.type_name(), "singleton cached");
    }
}

/// Observer list kept by a container.
pub(crate) struct Observers {
    list: RwLock<Vec<Arc<dyn ContainerObserver>>>,
    present: AtomicBool,
}

impl Observers {
    pub(crate) fn new() -> Self {
        Self {
            list: RwLock::new(Vec::new()),
            present: AtomicBool::new(false),
        }
    }

    pub(crate) fn add(&self, observer: Arc<dyn ContainerObserver>) {
        self.list.write().push(observer);
        self.present.store(true, Ordering::Release);
    }

    #[inline(always)]
    pub(crate) fn has_observers(&self) -> bool {
        self.present.load(Ordering::Acquire)
    }

    // Hooks run on a snapshot so an observer may itself resolve services.
    fn snapshot(&self) -> Vec<Arc<dyn ContainerObserver>> {
        self.list.read().clone()
    }

    pub(crate) fn resolving(&self, id: &ServiceId) {
        for observer in self.snapshot() {
            observer.resolving(id);
        }
    }

    pub(crate) fn resolved(&self, id: &ServiceId, duration: Duration) {
        for observer in self.snapshot() {
            observer.resolved(id, duration);
        }
    }

    pub(crate) fn failed(&self, id: &ServiceId, error: &DiError) {
        for observer in self.snapshot() {
            observer.failed(id, error);
        }
    }

    pub(crate) fn promoted(&self, id: &ServiceId) {
        if !self.has_observers() {
            return;
        }
        for observer in self.snapshot() {
            observer.promoted(id);
        }
    }
}
