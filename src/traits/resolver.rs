//! Resolver traits for service resolution.

use std::sync::Arc;

use crate::error::DiResult;
use crate::key::ServiceId;
use crate::registration::{downcast, AnyArc};

/// Core resolver trait for object-safe service resolution.
///
/// Most users should use the [`Resolver`] trait instead, which provides
/// typed generic methods on top of this one.
pub trait ResolverCore: Send + Sync {
    /// Resolves a service by identifier.
    ///
    /// The returned value wraps an `Arc<S>` where `S` is the type `id` was
    /// built from. Dependencies are resolved depth-first, left to right.
    /// Cycles are not detected: a cycle through transient bindings recurses
    /// until the stack overflows and a cycle through a singleton blocks on
    /// its own initialization.
    fn resolve_any(&self, id: &ServiceId) -> DiResult<AnyArc>;
}

/// Typed resolution API, available on every [`ResolverCore`].
///
/// # Examples
///
/// ```
/// use ferrous_ioc::{Container, Resolver};
/// use std::sync::Arc;
///
/// trait Logger: Send + Sync {
///     fn log(&self, msg: &str);
/// }
///
/// struct ConsoleLogger;
/// impl Logger for ConsoleLogger {
///     fn log(&self, msg: &str) {
///         println!("LOG: {}", msg);
///     }
/// }
///
/// let container = Container::new();
/// container.register_instance(Arc::new(42usize));
/// container.register_instance::<dyn Logger>(Arc::new(ConsoleLogger));
///
/// assert_eq!(*container.resolve::<usize>().unwrap(), 42);
/// container.resolve::<dyn Logger>().unwrap().log("resolved");
/// ```
pub trait Resolver: ResolverCore {
    /// Resolves the service `S`, concrete type or trait object.
    ///
    /// # Returns
    ///
    /// * `Ok(Arc<S>)` - The resolved service
    /// * `Err(DiError::NotRegistered)` - No binding for `S`
    /// * `Err(DiError::TypeMismatch)` - The binding produced something other than `S`
    fn resolve<S: ?Sized + Send + Sync + 'static>(&self) -> DiResult<Arc<S>> {
        let any = self.resolve_any(&ServiceId::of::<S>())?;
        downcast::<S>(&any)
    }

    /// Resolves the service `S`.
    ///
    /// # Panics
    ///
    /// Panics if resolution fails. Use [`resolve`](Self::resolve) to handle errors.
    fn resolve_required<S: ?Sized + Send + Sync + 'static>(&self) -> Arc<S> {
        match self.resolve::<S>() {
            Ok(service) => service,
            Err(e) => panic!("Failed to resolve {}: {}", std::any::type_name::<S>(), e),
        }
    }
}

impl<R: ResolverCore + ?Sized> Resolver for R {}
