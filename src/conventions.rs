//! Convention-based bulk registration.
//!
//! A concrete type `Foo` is bound to the service whose bare name is the
//! configured prefix followed by `Foo` (`IFoo` by default), provided `Foo`
//! declares that it implements it.

use std::sync::Arc;

use crate::activation::TypeDescriptor;
use crate::container::Container;
use crate::discovery;
use crate::key::ServiceId;
use crate::registration::Binding;

/// Capabilities of `descriptor` that match the naming convention.
///
/// Pure: looks only at names, registers nothing.
///
/// ```rust
/// use ferrous_ioc::{conventions::matching_services, ServiceId, TypeDescriptor};
///
/// trait IMailer: Send + Sync {}
/// trait Auditable: Send + Sync {}
/// struct Mailer;
/// impl IMailer for Mailer {}
/// impl Auditable for Mailer {}
///
/// let descriptor = TypeDescriptor::builder::<Mailer>()
///     .implements::<dyn IMailer>(|m| m)
///     .implements::<dyn Auditable>(|m| m)
///     .build();
///
/// assert_eq!(matching_services(&descriptor, "I"), vec![ServiceId::of::<dyn IMailer>()]);
/// ```
pub fn matching_services(descriptor: &TypeDescriptor, prefix: &str) -> Vec<ServiceId> {
    let bare = descriptor.bare_name();
    descriptor
        .capabilities()
        .filter(|id| *id != descriptor.id())
        .filter(|id| {
            id.bare_name()
                .strip_prefix(prefix)
                .is_some_and(|rest| rest == bare)
        })
        .collect()
}

impl Container {
    /// Registers every candidate under the services it matches by convention.
    ///
    /// Candidates without a matching service are skipped. Bindings use the
    /// container's `convention_lifetime` (transient by default). Returns the
    /// number of bindings registered.
    pub fn register_conventions<I>(&self, candidates: I) -> usize
    where
        I: IntoIterator<Item = TypeDescriptor>,
    {
        let prefix = self.options().convention_prefix.as_str();
        let lifetime = self.options().convention_lifetime;
        let mut registered = 0;

        for descriptor in candidates {
            let services = matching_services(&descriptor, prefix);
            if services.is_empty() {
                tracing::trace!(concrete = descriptor.type_name(), "no conventional service, skipped");
                continue;
            }
            let descriptor = Arc::new(descriptor);
            for id in services {
                self.register(id, Binding::Type { descriptor: descriptor.clone(), lifetime });
                registered += 1;
            }
        }

        tracing::debug!(registered, prefix, "convention scan complete");
        registered
    }

    /// Runs [`register_conventions`](Self::register_conventions) over every
    /// type submitted with [`discoverable!`](crate::discoverable).
    pub fn register_discovered(&self) -> usize {
        self.register_conventions(discovery::discovered())
    }
}
