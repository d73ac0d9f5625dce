//! The container: registration API over a registry of bindings.

use std::sync::Arc;

use crate::activation::{Injectable, TypeDescriptor};
use crate::config::ContainerOptions;
use crate::descriptors::BindingDescriptor;
use crate::error::DiResult;
use crate::key::ServiceId;
use crate::lifetime::Lifetime;
use crate::observer::{ContainerObserver, Observers};
use crate::registration::{Binding, Registry};

mod context;
mod resolve;

pub use context::ResolverContext;

/// Inversion-of-control container.
///
/// Maps service identifiers to [`Binding`]s and builds object graphs on
/// demand. Registration and resolution both take `&self`; the container is
/// `Send + Sync` and can be shared across threads behind an `Arc` or a
/// `static`. Registering an identifier again replaces its binding.
///
/// # Examples
///
/// ```
/// use ferrous_ioc::{Container, Resolver};
/// use std::sync::Arc;
///
/// struct Config { port: u16 }
///
/// let container = Container::new();
/// container.register_instance(Arc::new(Config { port: 8080 }));
/// assert_eq!(container.resolve::<Config>().unwrap().port, 8080);
///
/// container.reset();
/// assert!(container.resolve::<Config>().is_err());
/// ```
pub struct Container {
    registry: Registry,
    observers: Observers,
    options: ContainerOptions,
}

impl Container {
    /// Creates an empty container with default options.
    pub fn new() -> Self {
        Self::with_options(ContainerOptions::default())
    }

    /// Creates an empty container with the given options.
    pub fn with_options(options: ContainerOptions) -> Self {
        Self {
            registry: Registry::new(),
            observers: Observers::new(),
            options,
        }
    }

    pub fn options(&self) -> &ContainerOptions {
        &self.options
    }

    /// Adds an observer notified of every resolution.
    pub fn add_observer(&self, observer: Arc<dyn ContainerObserver>) -> &Self {
        self.observers.add(observer);
        self
    }

    // ----- Registration -----

    /// Binds `id` to `binding`, replacing whatever was there.
    ///
    /// This is the untyped entry point; nothing checks that the binding
    /// produces values of the type `id` names. A mismatch is reported as
    /// [`DiError::TypeMismatch`](crate::DiError::TypeMismatch) on resolution.
    pub fn register(&self, id: ServiceId, binding: Binding) -> &Self {
        tracing::debug!(service = id.type_name(), binding = ?binding, "registering");
        if self.registry.insert(id, binding) {
            tracing::trace!(service = id.type_name(), "replaced previous binding");
        }
        self
    }

    /// Binds `S` to a pre-built instance.
    pub fn register_instance<S>(&self, value: Arc<S>) -> &Self
    where
        S: ?Sized + Send + Sync + 'static,
    {
        self.register(ServiceId::of::<S>(), Binding::instance(value))
    }

    /// Binds `S` to a zero-argument factory invoked on every resolution.
    ///
    /// ```
    /// use ferrous_ioc::{Container, Resolver};
    /// use std::sync::Arc;
    ///
    /// struct Request;
    ///
    /// let container = Container::new();
    /// container.register_factory::<Request, _>(|| Arc::new(Request));
    ///
    /// let a = container.resolve::<Request>().unwrap();
    /// let b = container.resolve::<Request>().unwrap();
    /// assert!(!Arc::ptr_eq(&a, &b));
    /// ```
    pub fn register_factory<S, F>(&self, factory: F) -> &Self
    where
        S: ?Sized + Send + Sync + 'static,
        F: Fn() -> Arc<S> + Send + Sync + 'static,
    {
        self.register(ServiceId::of::<S>(), Binding::factory(factory, Lifetime::Transient))
    }

    /// Binds `S` to a zero-argument factory invoked once; its first result
    /// replaces the binding.
    pub fn register_singleton_factory<S, F>(&self, factory: F) -> &Self
    where
        S: ?Sized + Send + Sync + 'static,
        F: Fn() -> Arc<S> + Send + Sync + 'static,
    {
        self.register(ServiceId::of::<S>(), Binding::factory(factory, Lifetime::Singleton))
    }

    /// Binds `S` to a factory that wires its own dependencies.
    pub fn register_factory_with<S, F>(&self, lifetime: Lifetime, factory: F) -> &Self
    where
        S: ?Sized + Send + Sync + 'static,
        F: Fn(&ResolverContext<'_>) -> DiResult<Arc<S>> + Send + Sync + 'static,
    {
        self.register(ServiceId::of::<S>(), Binding::wiring_factory(factory, lifetime))
    }

    /// Binds `S` to the auto-wired concrete type `T`, transient.
    ///
    /// Constructibility is not checked here; a missing dependency or a `T`
    /// that does not implement `S` is reported when `S` is resolved.
    pub fn register_type<S, T>(&self) -> &Self
    where
        S: ?Sized + Send + Sync + 'static,
        T: Injectable,
    {
        self.register_type_with(ServiceId::of::<S>(), T::descriptor(), Lifetime::Transient)
    }

    /// Binds `S` to the auto-wired concrete type `T`, singleton.
    pub fn register_singleton_type<S, T>(&self) -> &Self
    where
        S: ?Sized + Send + Sync + 'static,
        T: Injectable,
    {
        self.register_type_with(ServiceId::of::<S>(), T::descriptor(), Lifetime::Singleton)
    }

    /// Binds `id` to a type described at runtime, with an explicit lifetime.
    pub fn register_type_with(&self, id: ServiceId, descriptor: TypeDescriptor, lifetime: Lifetime) -> &Self {
        self.register(id, Binding::of_type(descriptor, lifetime))
    }

    /// Removes every binding.
    pub fn reset(&self) {
        let cleared = self.registry.clear();
        tracing::debug!(cleared, "container reset");
    }

    // ----- Introspection -----

    pub fn contains<S: ?Sized + 'static>(&self) -> bool {
        self.registry.contains(&ServiceId::of::<S>())
    }

    /// Untyped form of [`contains`](Self::contains).
    pub fn contains_id(&self, id: &ServiceId) -> bool {
        self.registry.contains(id)
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of every binding, in no particular order.
    pub fn descriptors(&self) -> Vec<BindingDescriptor> {
        self.registry
            .snapshot()
            .iter()
            .map(|(id, binding)| BindingDescriptor::new(*id, binding))
            .collect()
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Container")
            .field("bindings", &self.len())
            .field("options", &self.options)
            .finish()
    }
}
