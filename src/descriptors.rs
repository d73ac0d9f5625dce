//! Binding descriptors for introspection and diagnostics.

use crate::key::ServiceId;
use crate::lifetime::Lifetime;
use crate::registration::Binding;

/// Which case of [`Binding`] is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    Instance,
    Factory,
    Type,
}

/// Snapshot of one registered binding
///
/// Singleton promotion shows up here: once a singleton factory or type
/// binding has been resolved, its descriptor reports [`BindingKind::Instance`].
///
/// # Examples
///
/// ```rust
/// use ferrous_ioc::{BindingKind, Container, Resolver};
/// use std::sync::Arc;
///
/// struct Cache;
///
/// let container = Container::new();
/// container.register_singleton_factory::<Cache, _>(|| Arc::new(Cache));
///
/// let before = container.descriptors();
/// assert_eq!(before[0].kind, BindingKind::Factory);
///
/// container.resolve::<Cache>().unwrap();
/// let after = container.descriptors();
/// assert!(after[0].is_cached());
/// ```
#[derive(Debug, Clone)]
pub struct BindingDescriptor {
    /// Identifier the binding is registered under
    pub id: ServiceId,
    pub kind: BindingKind,
    /// `None` for instance bindings
    pub lifetime: Option<Lifetime>,
    /// Concrete type name for type bindings
    pub impl_type_name: Option<&'static str>,
}

impl BindingDescriptor {
    pub(crate) fn new(id: ServiceId, binding: &Binding) -> Self {
        let impl_type_name = match binding {
            Binding::Type { descriptor, .. } => Some(descriptor.type_name()),
            _ => None,
        };
        Self {
            id,
            kind: binding.kind(),
            lifetime: binding.lifetime(),
            impl_type_name,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.id.type_name()
    }

    /// True when resolution returns a stored value without building anything.
    pub fn is_cached(&self) -> bool {
        self.kind == BindingKind::Instance
    }
}
