//! Resolver context handed to wiring factories.

use crate::error::DiResult;
use crate::key::ServiceId;
use crate::registration::AnyArc;
use crate::traits::ResolverCore;

/// Context passed to wiring factories for resolving dependencies.
///
/// # Examples
///
/// ```
/// use ferrous_ioc::{Container, Lifetime, Resolver};
/// use std::sync::Arc;
///
/// struct Database { url: String }
/// struct UserService { db: Arc<Database> }
///
/// let container = Container::new();
/// container.register_instance(Arc::new(Database {
///     url: "postgres://localhost".to_string()
/// }));
/// container.register_factory_with::<UserService, _>(Lifetime::Transient, |resolver| {
///     Ok(Arc::new(UserService { db: resolver.resolve::<Database>()? }))
/// });
///
/// let users = container.resolve::<UserService>().unwrap();
/// assert_eq!(users.db.url, "postgres://localhost");
/// ```
pub struct ResolverContext<'a> {
    resolver: &'a dyn ResolverCore,
}

impl<'a> ResolverContext<'a> {
    pub(crate) fn new<T>(resolver: &'a T) -> Self
    where
        T: ResolverCore,
    {
        Self { resolver }
    }
}

impl<'a> ResolverCore for ResolverContext<'a> {
    fn resolve_any(&self, id: &ServiceId) -> DiResult<AnyArc> {
        self.resolver.resolve_any(id)
    }
}
