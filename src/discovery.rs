//! Link-time discovery of injectable types.
//!
//! Types submitted with [`discoverable!`](crate::discoverable) are collected
//! by `inventory` and fed to [`Container::register_discovered`](crate::Container::register_discovered).

use crate::activation::TypeDescriptor;

/// Entry for inventory-collected injectable types
pub struct Discoverable {
    describe: fn() -> TypeDescriptor,
}

impl Discoverable {
    pub const fn new(describe: fn() -> TypeDescriptor) -> Self {
        Self { describe }
    }

    pub fn describe(&self) -> TypeDescriptor {
        (self.describe)()
    }
}

inventory::collect!(Discoverable);

/// Descriptors of every discoverable type linked into the binary.
pub fn discovered() -> impl Iterator<Item = TypeDescriptor> {
    inventory::iter::<Discoverable>.into_iter().map(Discoverable::describe)
}

/// Submits an [`Injectable`](crate::Injectable) type for convention scanning.
///
/// ```rust
/// use ferrous_ioc::{discoverable, Container, Injectable, Resolver, TypeDescriptor};
///
/// trait IPinger: Send + Sync {}
///
/// #[derive(Default)]
/// struct Pinger;
/// impl IPinger for Pinger {}
///
/// impl Injectable for Pinger {
///     fn descriptor() -> TypeDescriptor {
///         TypeDescriptor::builder::<Pinger>()
///             .implements::<dyn IPinger>(|p| p)
///             .implicit_default()
///             .build()
///     }
/// }
///
/// discoverable!(Pinger);
///
/// let container = Container::new();
/// container.register_discovered();
/// assert!(container.resolve::<dyn IPinger>().is_ok());
/// ```
#[macro_export]
macro_rules! discoverable {
    ($ty:ty) => {
        $crate::inventory::submit! {
            $crate::discovery::Discoverable::new(<$ty as $crate::Injectable>::descriptor)
        }
    };
}
