//! Bindings and the registry that owns them.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use parking_lot::RwLock;

use crate::activation::TypeDescriptor;
use crate::container::ResolverContext;
use crate::descriptors::BindingKind;
use crate::error::{DiError, DiResult};
use crate::key::ServiceId;
use crate::lifetime::Lifetime;

#[cfg(feature = "ahash")]
type Map<K, V> = ahash::AHashMap<K, V>;
#[cfg(not(feature = "ahash"))]
type Map<K, V> = std::collections::HashMap<K, V>;

/// Type-erased service value. The payload is always an `Arc<S>` for the
/// service type `S` it was produced for.
pub type AnyArc = Arc<dyn Any + Send + Sync>;

pub(crate) fn erase<S: ?Sized + Send + Sync + 'static>(value: Arc<S>) -> AnyArc {
    Arc::new(value)
}

pub(crate) fn downcast<S: ?Sized + Send + Sync + 'static>(value: &AnyArc) -> DiResult<Arc<S>> {
    (**value)
        .downcast_ref::<Arc<S>>()
        .cloned()
        .ok_or(DiError::TypeMismatch(std::any::type_name::<S>()))
}

type FactoryFn = Arc<dyn for<'a> Fn(&ResolverContext<'a>) -> DiResult<AnyArc> + Send + Sync>;

/// Producer stored in a factory binding.
#[derive(Clone)]
pub struct Factory {
    produces: ServiceId,
    invoke: FactoryFn,
}

impl Factory {
    /// Service type the factory's values are built as.
    pub fn produces(&self) -> ServiceId {
        self.produces
    }

    pub(crate) fn invoke(&self, ctx: &ResolverContext<'_>) -> DiResult<AnyArc> {
        (self.invoke)(ctx)
    }
}

impl fmt::Debug for Factory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Factory").field("produces", &self.produces).finish()
    }
}

/// How the registry satisfies one service identifier.
///
/// Exactly one binding exists per identifier; registering again replaces it,
/// whatever kind either side is.
#[derive(Clone)]
pub enum Binding {
    /// Pre-built value, always returned as-is
    Instance(AnyArc),
    /// Producer invoked on resolution
    Factory { factory: Factory, lifetime: Lifetime },
    /// Concrete type constructed by auto-wiring
    Type { descriptor: Arc<TypeDescriptor>, lifetime: Lifetime },
}

impl Binding {
    pub fn instance<S: ?Sized + Send + Sync + 'static>(value: Arc<S>) -> Self {
        Binding::Instance(erase(value))
    }

    /// Zero-argument factory.
    pub fn factory<S, F>(factory: F, lifetime: Lifetime) -> Self
    where
        S: ?Sized + Send + Sync + 'static,
        F: Fn() -> Arc<S> + Send + Sync + 'static,
    {
        Self::wiring_factory::<S, _>(move |_| Ok(factory()), lifetime)
    }

    /// Factory that resolves its own dependencies through the context.
    pub fn wiring_factory<S, F>(factory: F, lifetime: Lifetime) -> Self
    where
        S: ?Sized + Send + Sync + 'static,
        F: Fn(&ResolverContext<'_>) -> DiResult<Arc<S>> + Send + Sync + 'static,
    {
        let invoke: FactoryFn = Arc::new(move |ctx: &ResolverContext<'_>| factory(ctx).map(erase));
        let factory = Factory {
            produces: ServiceId::of::<S>(),
            invoke,
        };
        Binding::Factory { factory, lifetime }
    }

    pub fn of_type(descriptor: TypeDescriptor, lifetime: Lifetime) -> Self {
        Binding::Type { descriptor: Arc::new(descriptor), lifetime }
    }

    pub fn kind(&self) -> BindingKind {
        match self {
            Binding::Instance(_) => BindingKind::Instance,
            Binding::Factory { .. } => BindingKind::Factory,
            Binding::Type { .. } => BindingKind::Type,
        }
    }

    /// `None` for instance bindings.
    pub fn lifetime(&self) -> Option<Lifetime> {
        match self {
            Binding::Instance(_) => None,
            Binding::Factory { lifetime, .. } | Binding::Type { lifetime, .. } => Some(*lifetime),
        }
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Binding::Instance(_) => f.write_str("Instance(..)"),
            Binding::Factory { lifetime, .. } => f.debug_struct("Factory").field("lifetime", lifetime).finish(),
            Binding::Type { descriptor, lifetime } => f
                .debug_struct("Type")
                .field("type", &descriptor.type_name())
                .field("lifetime", lifetime)
                .finish(),
        }
    }
}

/// Registry slot. Singleton construction for one identifier is serialized
/// by `cell`; the slot is replaced wholesale on promotion or re-registration.
pub(crate) struct Entry {
    pub(crate) binding: Binding,
    pub(crate) cell: OnceCell<AnyArc>,
}

impl Entry {
    fn new(binding: Binding) -> Self {
        Self { binding, cell: OnceCell::new() }
    }
}

/// Service registry holding all bindings
pub(crate) struct Registry {
    entries: RwLock<Map<ServiceId, Arc<Entry>>>,
}

impl Registry {
    pub(crate) fn new() -> Self {
        Self { entries: RwLock::new(Map::default()) }
    }

    /// Inserts or replaces; returns true when a binding was replaced.
    pub(crate) fn insert(&self, id: ServiceId, binding: Binding) -> bool {
        self.entries.write().insert(id, Arc::new(Entry::new(binding))).is_some()
    }

    /// Lock is released before the caller constructs anything.
    #[inline(always)]
    pub(crate) fn get(&self, id: &ServiceId) -> Option<Arc<Entry>> {
        self.entries.read().get(id).cloned()
    }

    pub(crate) fn contains(&self, id: &ServiceId) -> bool {
        self.entries.read().contains_key(id)
    }

    /// Replaces `expected` with an instance binding holding `value`.
    ///
    /// Compare-and-swap: does nothing when the slot was already promoted or
    /// re-registered since `expected` was read.
    pub(crate) fn promote(&self, id: &ServiceId, expected: &Arc<Entry>, value: AnyArc) -> bool {
        let mut entries = self.entries.write();
        match entries.get_mut(id) {
            Some(current) if Arc::ptr_eq(current, expected) => {
                *current = Arc::new(Entry::new(Binding::Instance(value)));
                true
            }
            _ => false,
        }
    }

    /// Removes every binding; returns how many there were.
    pub(crate) fn clear(&self) -> usize {
        let mut entries = self.entries.write();
        let count = entries.len();
        entries.clear();
        count
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub(crate) fn snapshot(&self) -> Vec<(ServiceId, Binding)> {
        self.entries
            .read()
            .iter()
            .map(|(id, entry)| (*id, entry.binding.clone()))
            .collect()
    }
}
