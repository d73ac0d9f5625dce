//! # ferrous-ioc
//!
//! Minimal inversion-of-control container: a registry mapping service
//! identifiers to bindings, and a resolver that builds object graphs on demand.
//!
//! ## Features
//!
//! - **Three binding kinds**: pre-built instances, factories and auto-wired types
//! - **Singleton promotion**: the first successful build replaces its binding
//! - **Constructor selection**: designated injection constructor first, then most parameters
//! - **Convention scanning**: `Foo` is bound to `IFoo` automatically
//! - **Thread-safe**: concurrent first resolutions of a singleton build it exactly once
//!
//! ## Quick Start
//!
//! ```rust
//! use ferrous_ioc::{Constructor, Container, Injectable, Resolver, TypeDescriptor};
//! use std::sync::Arc;
//!
//! trait IStore: Send + Sync {
//!     fn url(&self) -> &str;
//! }
//!
//! struct Store { url: String }
//! impl IStore for Store {
//!     fn url(&self) -> &str { &self.url }
//! }
//!
//! trait IUsers: Send + Sync {
//!     fn store(&self) -> Arc<dyn IStore>;
//! }
//!
//! struct Users { store: Arc<dyn IStore> }
//! impl IUsers for Users {
//!     fn store(&self) -> Arc<dyn IStore> { self.store.clone() }
//! }
//!
//! impl Injectable for Users {
//!     fn descriptor() -> TypeDescriptor {
//!         TypeDescriptor::builder::<Users>()
//!             .implements::<dyn IUsers>(|u| u)
//!             .constructor(Constructor::new(|store: Arc<dyn IStore>| Users { store }))
//!             .build()
//!     }
//! }
//!
//! let container = Container::new();
//! container.register_instance::<dyn IStore>(Arc::new(Store { url: "postgres://localhost".into() }));
//! container.register_type::<dyn IUsers, Users>();
//!
//! let users = container.resolve::<dyn IUsers>().unwrap();
//! assert_eq!(users.store().url(), "postgres://localhost");
//! ```
//!
//! ## Lifetimes
//!
//! - **Singleton**: built on first resolution, then cached as an instance binding
//! - **Transient**: built fresh on every resolution
//!
//! ## Dependency cycles
//!
//! Cycles are not detected. Registering one is a caller error: resolution
//! recurses without bound (transient) or blocks on itself (singleton).

pub mod activation;
pub mod config;
pub mod container;
pub mod conventions;
pub mod descriptors;
pub mod discovery;
pub mod error;
pub mod global;
pub mod key;
pub mod lifetime;
pub mod module_system;
pub mod observer;
pub mod registration;
pub mod traits;

pub use activation::{Arguments, Constructor, ConstructorInfo, DescriptorBuilder, Injectable, TypeDescriptor};
pub use config::ContainerOptions;
pub use container::{Container, ResolverContext};
pub use descriptors::{BindingDescriptor, BindingKind};
pub use error::{BoxError, DiError, DiResult};
pub use global::global;
pub use key::ServiceId;
pub use lifetime::Lifetime;
pub use module_system::ServiceModule;
pub use observer::{ContainerObserver, TracingObserver};
pub use registration::{AnyArc, Binding, Factory};
pub use traits::{Resolver, ResolverCore};

#[doc(hidden)]
pub use inventory;
