use ferrous_ioc::{Binding, BindingKind, Container, DiError, Lifetime, Resolver, ServiceId, ServiceModule, DiResult};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[test]
fn test_instance_round_trip_keeps_identity() {
    let container = Container::new();
    let value = Arc::new("hello".to_string());
    container.register_instance(value.clone());

    let resolved = container.resolve::<String>().unwrap();
    assert!(Arc::ptr_eq(&value, &resolved));
}

#[test]
fn test_last_write_wins() {
    let container = Container::new();
    let first = Arc::new(1usize);
    let second = Arc::new(2usize);

    container.register_instance(first.clone());
    container.register_instance(second.clone());
    container.register_instance(first);
    container.register_instance(second.clone());

    let value = container.resolve::<usize>().unwrap();
    assert!(Arc::ptr_eq(&value, &second));
    assert_eq!(container.len(), 1);
}

#[test]
fn test_reregistration_can_change_binding_kind() {
    let container = Container::new();
    container.register_instance(Arc::new(5u32));
    container.register_factory::<u32, _>(|| Arc::new(9));

    assert_eq!(*container.resolve::<u32>().unwrap(), 9);
    assert_eq!(container.descriptors()[0].kind, BindingKind::Factory);
}

#[test]
fn test_transient_factory_builds_fresh_values() {
    struct Request;

    let container = Container::new();
    container.register_factory::<Request, _>(|| Arc::new(Request));

    let a = container.resolve::<Request>().unwrap();
    let b = container.resolve::<Request>().unwrap();
    assert!(!Arc::ptr_eq(&a, &b));
}

#[test]
fn test_singleton_factory_invoked_once() {
    struct Connection;

    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();

    let container = Container::new();
    container.register_singleton_factory::<Connection, _>(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        Arc::new(Connection)
    });

    let a = container.resolve::<Connection>().unwrap();
    let b = container.resolve::<Connection>().unwrap();

    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_wiring_factory_with_dependencies() {
    struct Config {
        port: u16,
    }

    struct Server {
        config: Arc<Config>,
        name: String,
    }

    let container = Container::new();
    container.register_instance(Arc::new(Config { port: 8080 }));
    container.register_factory_with::<Server, _>(Lifetime::Singleton, |r| {
        Ok(Arc::new(Server {
            config: r.resolve::<Config>()?,
            name: "MyServer".to_string(),
        }))
    });

    let server = container.resolve::<Server>().unwrap();
    assert_eq!(server.config.port, 8080);
    assert_eq!(server.name, "MyServer");
}

#[test]
fn test_not_registered_error() {
    struct UnregisteredType;

    let container = Container::new();
    match container.resolve::<UnregisteredType>() {
        Err(DiError::NotRegistered(name)) => assert!(name.contains("UnregisteredType")),
        other => panic!("expected NotRegistered, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_missing_transitive_dependency_propagates() {
    struct Missing;
    struct Needs {
        _missing: Arc<Missing>,
    }

    let container = Container::new();
    container.register_factory_with::<Needs, _>(Lifetime::Transient, |r| {
        Ok(Arc::new(Needs { _missing: r.resolve()? }))
    });

    match container.resolve::<Needs>() {
        Err(DiError::NotRegistered(name)) => assert!(name.contains("Missing")),
        other => panic!("expected NotRegistered, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_untyped_binding_type_mismatch() {
    trait Clock: Send + Sync {}

    let container = Container::new();
    container.register(ServiceId::of::<dyn Clock>(), Binding::instance(Arc::new(5u32)));

    assert!(matches!(container.resolve::<dyn Clock>(), Err(DiError::TypeMismatch(_))));
}

#[test]
fn test_mismatched_singleton_factory_is_not_promoted() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();

    let container = Container::new();
    container.register(
        ServiceId::of::<String>(),
        Binding::factory::<u32, _>(
            move || {
                counter.fetch_add(1, Ordering::SeqCst);
                Arc::new(7)
            },
            Lifetime::Singleton,
        ),
    );

    assert!(matches!(container.resolve::<String>(), Err(DiError::TypeMismatch(_))));
    assert!(matches!(container.resolve::<String>(), Err(DiError::TypeMismatch(_))));

    let descriptor = &container.descriptors()[0];
    assert_eq!(descriptor.kind, BindingKind::Factory);
    assert_eq!(descriptor.lifetime, Some(Lifetime::Singleton));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_reset_clears_everything() {
    let container = Container::new();
    container.register_instance(Arc::new(1u8));
    container.register_factory::<u16, _>(|| Arc::new(2));
    container.register_singleton_factory::<u32, _>(|| Arc::new(3));
    container.resolve::<u32>().unwrap();

    container.reset();

    assert!(container.is_empty());
    assert!(matches!(container.resolve::<u8>(), Err(DiError::NotRegistered(_))));
    assert!(matches!(container.resolve::<u16>(), Err(DiError::NotRegistered(_))));
    assert!(matches!(container.resolve::<u32>(), Err(DiError::NotRegistered(_))));
}

#[test]
fn test_containers_are_independent() {
    let a = Container::new();
    let b = Container::new();
    a.register_instance(Arc::new(1i64));

    assert!(a.contains::<i64>());
    assert!(!b.contains::<i64>());
}

#[test]
fn test_module_registration() {
    struct Greeting(&'static str);
    struct GreetingModule;

    impl ServiceModule for GreetingModule {
        fn register_services(self, container: &Container) -> DiResult<()> {
            container.register_instance(Arc::new(Greeting("hi")));
            Ok(())
        }
    }

    let container = Container::new();
    container.add_module(GreetingModule).unwrap();
    assert_eq!(container.resolve::<Greeting>().unwrap().0, "hi");
}

#[test]
#[should_panic(expected = "Failed to resolve")]
fn test_resolve_required_panics_when_missing() {
    let container = Container::new();
    let _ = container.resolve_required::<f64>();
}
