//! Service modules for grouping registrations.

use crate::{Container, DiResult};

/// A module that registers a related group of services.
///
/// # Example
///
/// ```rust
/// use ferrous_ioc::{Container, DiResult, Lifetime, Resolver, ServiceModule};
/// use std::sync::Arc;
///
/// struct StorageConfig { root: String }
/// struct Storage { config: Arc<StorageConfig> }
///
/// struct StorageModule;
///
/// impl ServiceModule for StorageModule {
///     fn register_services(self, container: &Container) -> DiResult<()> {
///         container.register_instance(Arc::new(StorageConfig { root: "/var/data".into() }));
///         container.register_factory_with::<Storage, _>(Lifetime::Transient, |r| {
///             Ok(Arc::new(Storage { config: r.resolve()? }))
///         });
///         Ok(())
///     }
/// }
///
/// # fn main() -> DiResult<()> {
/// let container = Container::new();
/// container.add_module(StorageModule)?;
/// assert_eq!(container.resolve::<Storage>()?.config.root, "/var/data");
/// # Ok(())
/// # }
/// ```
pub trait ServiceModule {
    fn register_services(self, container: &Container) -> DiResult<()>;
}

impl Container {
    /// Runs a module's registrations against this container.
    pub fn add_module<M: ServiceModule>(&self, module: M) -> DiResult<&Self> {
        tracing::debug!(module = std::any::type_name::<M>(), "adding module");
        module.register_services(self)?;
        Ok(self)
    }
}
