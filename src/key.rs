//! Service identifier types for the container.

use std::any::TypeId;

/// Identifier callers resolve services by.
///
/// A `ServiceId` names any `'static` type, sized or not, so the same token
/// works for concrete structs (`ServiceId::of::<Database>()`) and for trait
/// objects (`ServiceId::of::<dyn Logger>()`). Equality and hashing only look
/// at the `TypeId`; the type name is carried for diagnostics and for the
/// naming convention used by [`register_conventions`](crate::Container::register_conventions).
///
/// # Examples
///
/// ```rust
/// use ferrous_ioc::ServiceId;
///
/// trait IClock: Send + Sync {}
/// struct Clock;
///
/// let a = ServiceId::of::<dyn IClock>();
/// let b = ServiceId::of::<dyn IClock>();
/// assert_eq!(a, b);
/// assert_ne!(a, ServiceId::of::<Clock>());
/// assert_eq!(a.bare_name(), "IClock");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ServiceId {
    id: TypeId,
    name: &'static str,
}

impl ServiceId {
    /// Identifier for the type `S`.
    #[inline(always)]
    pub fn of<S: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<S>(),
            name: std::any::type_name::<S>(),
        }
    }

    /// The underlying `TypeId`.
    pub fn type_id(&self) -> TypeId {
        self.id
    }

    /// Full `std::any::type_name` of the identified type.
    pub fn type_name(&self) -> &'static str {
        self.name
    }

    /// Unqualified name of the identified type.
    ///
    /// Strips a leading `dyn `, any `+ Bound` suffix, generic arguments and
    /// the module path, so `dyn app::IFoo + core::marker::Send` becomes
    /// `IFoo` and `app::Repo<u32>` becomes `Repo`.
    ///
    /// ```rust
    /// use ferrous_ioc::ServiceId;
    ///
    /// assert_eq!(ServiceId::of::<String>().bare_name(), "String");
    /// assert_eq!(ServiceId::of::<Vec<u8>>().bare_name(), "Vec");
    /// ```
    pub fn bare_name(&self) -> &'static str {
        bare_name(self.name)
    }
}

pub(crate) fn bare_name(type_name: &'static str) -> &'static str {
    let mut name = type_name.strip_prefix("dyn ").unwrap_or(type_name);
    if let Some(end) = name.find(" + ") {
        name = &name[..end];
    }
    if let Some(end) = name.find('<') {
        name = &name[..end];
    }
    match name.rfind("::") {
        Some(pos) => &name[pos + 2..],
        None => name,
    }
}

impl PartialEq for ServiceId {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ServiceId {}

// Hash TypeId only, consistent with Eq
impl std::hash::Hash for ServiceId {
    #[inline(always)]
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for ServiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}
