//! Typed constructors with parameter lists inferred from closure signatures.

use std::fmt;
use std::sync::Arc;

use crate::error::{BoxError, DiError, DiResult};
use crate::key::ServiceId;
use crate::registration::{downcast, erase, AnyArc};

type Invoke<T> = Arc<dyn Fn(&mut Arguments) -> DiResult<T> + Send + Sync>;

/// Resolved constructor arguments, consumed left to right.
pub struct Arguments {
    values: std::vec::IntoIter<AnyArc>,
}

impl Arguments {
    pub(crate) fn new(values: Vec<AnyArc>) -> Self {
        Self { values: values.into_iter() }
    }

    /// Takes the next argument as an `Arc<S>`.
    pub fn take<S: ?Sized + Send + Sync + 'static>(&mut self) -> DiResult<Arc<S>> {
        let value = self
            .values
            .next()
            .ok_or(DiError::TypeMismatch(std::any::type_name::<S>()))?;
        downcast::<S>(&value)
    }
}

/// A way of building `T` from resolved dependencies.
///
/// Parameter identifiers come straight from the closure signature: every
/// parameter must be an `Arc<S>` and is resolved as the service `S`.
///
/// ```rust
/// use ferrous_ioc::Constructor;
/// use std::sync::Arc;
///
/// trait IClock: Send + Sync {}
/// struct Scheduler { clock: Arc<dyn IClock> }
///
/// let ctor = Constructor::new(|clock: Arc<dyn IClock>| Scheduler { clock });
/// assert_eq!(ctor.params().len(), 1);
/// assert!(!ctor.is_injection());
/// ```
pub struct Constructor<T> {
    params: Vec<ServiceId>,
    injection: bool,
    invoke: Invoke<T>,
}

impl<T: Send + Sync + 'static> Constructor<T> {
    /// Constructor from an infallible closure taking `Arc<_>` parameters.
    pub fn new<F, Args>(f: F) -> Self
    where
        F: ConstructorFn<T, Args>,
    {
        f.into_constructor()
    }

    /// Constructor from a closure returning `Result<T, E>`.
    ///
    /// An `Err` surfaces as [`DiError::ConstructionFailed`] and nothing is cached.
    pub fn fallible<F, Args>(f: F) -> Self
    where
        F: FallibleConstructorFn<T, Args>,
    {
        f.into_constructor()
    }

    /// Marks this as the designated injection constructor.
    pub fn injection(mut self) -> Self {
        self.injection = true;
        self
    }

    pub fn params(&self) -> &[ServiceId] {
        &self.params
    }

    pub fn is_injection(&self) -> bool {
        self.injection
    }

    pub(crate) fn erase(self) -> ConstructorInfo {
        let invoke = self.invoke;
        ConstructorInfo {
            params: self.params,
            injection: self.injection,
            invoke: Arc::new(move |args: &mut Arguments| invoke(args).map(|value| erase(Arc::new(value)))),
        }
    }
}

/// Type-erased constructor stored in a [`TypeDescriptor`](crate::TypeDescriptor).
#[derive(Clone)]
pub struct ConstructorInfo {
    params: Vec<ServiceId>,
    injection: bool,
    invoke: Invoke<AnyArc>,
}

impl ConstructorInfo {
    /// Service identifiers of the parameters, in call order.
    pub fn params(&self) -> &[ServiceId] {
        &self.params
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    pub fn is_injection(&self) -> bool {
        self.injection
    }

    pub(crate) fn invoke(&self, mut args: Arguments) -> DiResult<AnyArc> {
        (self.invoke)(&mut args)
    }
}

impl fmt::Debug for ConstructorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstructorInfo")
            .field("params", &self.params)
            .field("injection", &self.injection)
            .finish()
    }
}

/// Closures usable with [`Constructor::new`].
///
/// Implemented for `Fn(Arc<A1>, .., Arc<An>) -> T` up to eight parameters.
pub trait ConstructorFn<T, Args>: Send + Sync + 'static {
    fn into_constructor(self) -> Constructor<T>;
}

/// Closures usable with [`Constructor::fallible`].
///
/// Implemented for `Fn(Arc<A1>, .., Arc<An>) -> Result<T, E>` up to eight parameters.
pub trait FallibleConstructorFn<T, Args>: Send + Sync + 'static {
    fn into_constructor(self) -> Constructor<T>;
}

macro_rules! impl_constructor_fn {
    ($($arg:ident),*) => {
        impl<T, F, $($arg),*> ConstructorFn<T, ($(Arc<$arg>,)*)> for F
        where
            T: Send + Sync + 'static,
            F: Fn($(Arc<$arg>),*) -> T + Send + Sync + 'static,
            $($arg: ?Sized + Send + Sync + 'static,)*
        {
            fn into_constructor(self) -> Constructor<T> {
                Constructor {
                    params: vec![$(ServiceId::of::<$arg>()),*],
                    injection: false,
                    invoke: Arc::new(move |_args: &mut Arguments| {
                        Ok((self)($(_args.take::<$arg>()?),*))
                    }),
                }
            }
        }

        impl<T, E, F, $($arg),*> FallibleConstructorFn<T, (E, $(Arc<$arg>,)*)> for F
        where
            T: Send + Sync + 'static,
            E: Into<BoxError> + 'static,
            F: Fn($(Arc<$arg>),*) -> Result<T, E> + Send + Sync + 'static,
            $($arg: ?Sized + Send + Sync + 'static,)*
        {
            fn into_constructor(self) -> Constructor<T> {
                Constructor {
                    params: vec![$(ServiceId::of::<$arg>()),*],
                    injection: false,
                    invoke: Arc::new(move |_args: &mut Arguments| {
                        (self)($(_args.take::<$arg>()?),*)
                            .map_err(|e| DiError::construction(std::any::type_name::<T>(), e))
                    }),
                }
            }
        }
    };
}

impl_constructor_fn!();
impl_constructor_fn!(A1);
impl_constructor_fn!(A1, A2);
impl_constructor_fn!(A1, A2, A3);
impl_constructor_fn!(A1, A2, A3, A4);
impl_constructor_fn!(A1, A2, A3, A4, A5);
impl_constructor_fn!(A1, A2, A3, A4, A5, A6);
impl_constructor_fn!(A1, A2, A3, A4, A5, A6, A7);
impl_constructor_fn!(A1, A2, A3, A4, A5, A6, A7, A8);

#[cfg(test)]
mod tests {
    use super::*;

    trait Sink: Send + Sync {}
    trait Source: Send + Sync {}

    struct Pipe;

    #[test]
    fn params_follow_closure_signature_with_trait_objects() {
        let ctor = Constructor::new(|_: Arc<dyn Source>, _: Arc<dyn Sink>, _: Arc<u8>| Pipe);
        assert_eq!(
            ctor.params(),
            &[ServiceId::of::<dyn Source>(), ServiceId::of::<dyn Sink>(), ServiceId::of::<u8>()]
        );
    }

    #[test]
    fn fallible_constructor_reports_construction_failure() {
        let info = Constructor::fallible(|_: Arc<dyn Source>, port: Arc<u16>| -> Result<Pipe, String> {
            Err(format!("port {} closed", port))
        })
        .erase();
        assert_eq!(info.arity(), 2);

        struct Tap;
        impl Source for Tap {}
        let args = Arguments::new(vec![erase::<dyn Source>(Arc::new(Tap)), erase(Arc::new(9u16))]);
        match info.invoke(args) {
            Err(DiError::ConstructionFailed { service, source }) => {
                assert!(service.contains("Pipe"));
                assert_eq!(source.to_string(), "port 9 closed");
            }
            other => panic!("expected ConstructionFailed, got {:?}", other.map(|_| ())),
        }
    }
}
