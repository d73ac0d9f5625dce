//! Type descriptors used for automatic (type-to-type) bindings.
//!
//! Rust has no runtime reflection, so a type opts into auto-wiring by
//! describing itself: its constructors, which of them is the designated
//! injection constructor, and which service identifiers (usually trait
//! objects) a built value can be handed out as.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::key::ServiceId;
use crate::registration::{erase, AnyArc};

mod constructor;

pub use constructor::{Arguments, Constructor, ConstructorFn, ConstructorInfo, FallibleConstructorFn};

/// Types that can describe how to construct themselves.
///
/// # Examples
///
/// ```rust
/// use ferrous_ioc::{Container, Constructor, Injectable, Resolver, TypeDescriptor};
/// use std::sync::Arc;
///
/// trait IGreeter: Send + Sync {
///     fn greet(&self) -> String;
/// }
///
/// #[derive(Default)]
/// struct Greeter;
///
/// impl IGreeter for Greeter {
///     fn greet(&self) -> String { "hello".into() }
/// }
///
/// impl Injectable for Greeter {
///     fn descriptor() -> TypeDescriptor {
///         TypeDescriptor::builder::<Greeter>()
///             .implements::<dyn IGreeter>(|g| g)
///             .constructor(Constructor::new(|| Greeter))
///             .build()
///     }
/// }
///
/// let container = Container::new();
/// container.register_type::<dyn IGreeter, Greeter>();
/// assert_eq!(container.resolve::<dyn IGreeter>().unwrap().greet(), "hello");
/// ```
pub trait Injectable: Send + Sync + Sized + 'static {
    fn descriptor() -> TypeDescriptor;
}

type Cast = Arc<dyn Fn(&AnyArc) -> Option<AnyArc> + Send + Sync>;

/// A service identifier a concrete type can be viewed as.
#[derive(Clone)]
pub(crate) struct Capability {
    id: ServiceId,
    cast: Cast,
}

impl Capability {
    pub(crate) fn cast(&self, value: &AnyArc) -> Option<AnyArc> {
        (self.cast)(value)
    }
}

/// Constructible type: its constructors and the services it implements.
#[derive(Clone)]
pub struct TypeDescriptor {
    id: ServiceId,
    constructors: Vec<ConstructorInfo>,
    implicit: Option<ConstructorInfo>,
    capabilities: Vec<Capability>,
}

impl TypeDescriptor {
    /// Starts describing `T`. The descriptor always implements `T` itself.
    pub fn builder<T: Send + Sync + 'static>() -> DescriptorBuilder<T> {
        DescriptorBuilder {
            descriptor: TypeDescriptor {
                id: ServiceId::of::<T>(),
                constructors: Vec::new(),
                implicit: None,
                capabilities: Vec::new(),
            },
            _marker: PhantomData,
        }
        .implements::<T>(|value| value)
    }

    /// Identifier of the concrete type.
    pub fn id(&self) -> ServiceId {
        self.id
    }

    /// Full type name of the concrete type.
    pub fn type_name(&self) -> &'static str {
        self.id.type_name()
    }

    /// Unqualified name, as matched by convention scanning.
    pub fn bare_name(&self) -> &'static str {
        self.id.bare_name()
    }

    /// Declared constructors in declaration order.
    pub fn constructors(&self) -> &[ConstructorInfo] {
        &self.constructors
    }

    /// Every service identifier a built value can be resolved as.
    pub fn capabilities(&self) -> impl Iterator<Item = ServiceId> + '_ {
        self.capabilities.iter().map(|c| c.id)
    }

    /// Whether a built value can be resolved as `id`.
    pub fn implements(&self, id: &ServiceId) -> bool {
        self.capability(id).is_some()
    }

    pub(crate) fn capability(&self, id: &ServiceId) -> Option<&Capability> {
        self.capabilities.iter().find(|c| c.id == *id)
    }

    /// Picks the constructor used for auto-wiring.
    ///
    /// Constructors marked with [`Constructor::injection`] form the candidate
    /// pool when any exist, otherwise every constructor does. The pool
    /// member with the most parameters wins, the first declared among equals.
    /// A type without constructors falls back to its implicit default, if any.
    pub fn select_constructor(&self) -> Option<&ConstructorInfo> {
        let marked = self.constructors.iter().any(ConstructorInfo::is_injection);
        let mut selected: Option<&ConstructorInfo> = None;
        for candidate in self.constructors.iter().filter(|c| !marked || c.is_injection()) {
            if selected.map_or(true, |s| candidate.arity() > s.arity()) {
                selected = Some(candidate);
            }
        }
        selected.or(self.implicit.as_ref())
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("type", &self.id.type_name())
            .field("constructors", &self.constructors)
            .field("implicit_default", &self.implicit.is_some())
            .field("capabilities", &self.capabilities().collect::<Vec<_>>())
            .finish()
    }
}

/// Builder returned by [`TypeDescriptor::builder`].
pub struct DescriptorBuilder<T> {
    descriptor: TypeDescriptor,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Send + Sync + 'static> DescriptorBuilder<T> {
    /// Declares a constructor.
    pub fn constructor(mut self, constructor: Constructor<T>) -> Self {
        self.descriptor.constructors.push(constructor.erase());
        self
    }

    /// Declares that `T` can be handed out as the service `S`.
    ///
    /// The cast is usually the identity closure `|value| value`, which
    /// coerces `Arc<T>` into `Arc<dyn Trait>`. Declaring the same `S` twice
    /// keeps the latest cast.
    pub fn implements<S: ?Sized + Send + Sync + 'static>(mut self, cast: fn(Arc<T>) -> Arc<S>) -> Self {
        let id = ServiceId::of::<S>();
        let capability = Capability {
            id,
            cast: Arc::new(move |value: &AnyArc| {
                (**value)
                    .downcast_ref::<Arc<T>>()
                    .map(|concrete| erase(cast(concrete.clone())))
            }),
        };
        match self.descriptor.capabilities.iter_mut().find(|c| c.id == id) {
            Some(existing) => *existing = capability,
            None => self.descriptor.capabilities.push(capability),
        }
        self
    }

    pub fn build(self) -> TypeDescriptor {
        self.descriptor
    }
}

impl<T: Default + Send + Sync + 'static> DescriptorBuilder<T> {
    /// Allows implicit parameterless construction through `T::default()`
    /// when no constructor is declared.
    pub fn implicit_default(mut self) -> Self {
        self.descriptor.implicit = Some(Constructor::new(T::default).erase());
        self
    }
}
