//! Service lifetime definitions.

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

/// Caching behavior of factory and type bindings
///
/// Instance bindings have no lifetime: they always hand out the stored value.
///
/// # Examples
///
/// ```rust
/// use ferrous_ioc::{Container, Resolver};
/// use std::sync::Arc;
///
/// struct Connection;
///
/// let container = Container::new();
/// container.register_singleton_factory::<Connection, _>(|| Arc::new(Connection));
///
/// let a = container.resolve::<Connection>().unwrap();
/// let b = container.resolve::<Connection>().unwrap();
/// assert!(Arc::ptr_eq(&a, &b));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "lowercase"))]
pub enum Lifetime {
    /// Built on first resolution, then promoted to an instance binding
    ///
    /// The first successful result replaces the factory or type binding in
    /// the registry, so later resolutions never rebuild it until the
    /// container is reset or the service is registered again.
    Singleton,
    /// Built fresh on every resolution, never cached
    #[default]
    Transient,
}

impl Lifetime {
    /// True for bindings promoted after their first build.
    pub fn is_singleton(self) -> bool {
        self == Lifetime::Singleton
    }
}
