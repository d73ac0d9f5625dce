/// Object graph tests with a three-level Foo -> Bar -> Baz domain.
///
/// Verifies how singleton caching propagates through auto-wired type
/// bindings and that the designated injection constructor is honoured.
use ferrous_ioc::{Constructor, Container, Injectable, Resolver, TypeDescriptor};
use std::sync::Arc;

// ===== Sample domain =====

pub trait IBaz: Send + Sync {
    fn extra_parameter_was_supplied(&self) -> bool;
}

pub struct Baz {
    extra_parameter_was_supplied: bool,
}

impl IBaz for Baz {
    fn extra_parameter_was_supplied(&self) -> bool {
        self.extra_parameter_was_supplied
    }
}

impl Injectable for Baz {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::builder::<Baz>()
            .implements::<dyn IBaz>(|baz| baz)
            .constructor(Constructor::new(|| Baz { extra_parameter_was_supplied: false }).injection())
            .constructor(Constructor::new(|_extra: Arc<String>| Baz { extra_parameter_was_supplied: true }))
            .build()
    }
}

pub trait IBar: Send + Sync {
    fn baz(&self) -> Arc<dyn IBaz>;
}

pub struct Bar {
    baz: Arc<dyn IBaz>,
}

impl IBar for Bar {
    fn baz(&self) -> Arc<dyn IBaz> {
        self.baz.clone()
    }
}

impl Injectable for Bar {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::builder::<Bar>()
            .implements::<dyn IBar>(|bar| bar)
            .constructor(Constructor::new(|baz: Arc<dyn IBaz>| Bar { baz }))
            .build()
    }
}

pub trait IFoo: Send + Sync {
    fn bar(&self) -> Arc<dyn IBar>;
}

pub struct Foo {
    bar: Arc<dyn IBar>,
}

impl IFoo for Foo {
    fn bar(&self) -> Arc<dyn IBar> {
        self.bar.clone()
    }
}

impl Injectable for Foo {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::builder::<Foo>()
            .implements::<dyn IFoo>(|foo| foo)
            .constructor(Constructor::new(|bar: Arc<dyn IBar>| Foo { bar }))
            .build()
    }
}

fn graph_container() -> Container {
    let container = Container::new();
    container.register_type::<dyn IBaz, Baz>();
    container.register_singleton_type::<dyn IBar, Bar>();
    container.register_type::<dyn IFoo, Foo>();
    container
}

// ===== Tests =====

#[test]
fn test_singleton_propagation_through_graph() {
    let container = graph_container();

    let foo1 = container.resolve::<dyn IFoo>().unwrap();
    let foo2 = container.resolve::<dyn IFoo>().unwrap();

    // Foo is transient
    assert!(!Arc::ptr_eq(&foo1, &foo2));

    // Bar is a singleton shared by both Foos and by direct resolution
    assert!(Arc::ptr_eq(&foo1.bar(), &foo2.bar()));
    let bar = container.resolve::<dyn IBar>().unwrap();
    assert!(Arc::ptr_eq(&foo1.bar(), &bar));

    // The cached Bar captured one Baz; direct Baz resolutions stay fresh
    let baz = container.resolve::<dyn IBaz>().unwrap();
    assert!(!Arc::ptr_eq(&foo1.bar().baz(), &baz));
    assert!(Arc::ptr_eq(&foo1.bar().baz(), &foo2.bar().baz()));
}

#[test]
fn test_injection_constructor_wins_over_arity() {
    let container = Container::new();
    container.register_instance(Arc::new("extra".to_string()));
    container.register_type::<dyn IBaz, Baz>();

    let baz = container.resolve::<dyn IBaz>().unwrap();
    assert!(!baz.extra_parameter_was_supplied());
}

#[test]
fn test_type_binding_transient_vs_singleton() {
    let transient = Container::new();
    transient.register_type::<dyn IBaz, Baz>();
    let a = transient.resolve::<dyn IBaz>().unwrap();
    let b = transient.resolve::<dyn IBaz>().unwrap();
    assert!(!Arc::ptr_eq(&a, &b));

    let singleton = Container::new();
    singleton.register_singleton_type::<dyn IBaz, Baz>();
    let a = singleton.resolve::<dyn IBaz>().unwrap();
    let b = singleton.resolve::<dyn IBaz>().unwrap();
    assert!(Arc::ptr_eq(&a, &b));
}

#[test]
fn test_concrete_type_registered_as_itself() {
    let container = Container::new();
    container.register_type::<Baz, Baz>();

    let baz = container.resolve::<Baz>().unwrap();
    assert!(!baz.extra_parameter_was_supplied);
}

#[test]
fn test_instance_and_type_bindings_mix() {
    let container = Container::new();
    let baz: Arc<dyn IBaz> = Arc::new(Baz { extra_parameter_was_supplied: true });
    container.register_instance::<dyn IBaz>(baz.clone());
    container.register_type::<dyn IBar, Bar>();

    let bar = container.resolve::<dyn IBar>().unwrap();
    assert!(Arc::ptr_eq(&bar.baz(), &baz));
}
