#![cfg(feature = "config")]
/// JSON-loaded container options.
use ferrous_ioc::{Container, ContainerOptions, DiError, Lifetime};

#[test]
fn test_options_from_json() {
    let options = ContainerOptions::from_json(
        r#"{ "convention_prefix": "Abstract", "convention_lifetime": "singleton" }"#,
    )
    .unwrap();

    assert_eq!(options.convention_prefix, "Abstract");
    assert_eq!(options.convention_lifetime, Lifetime::Singleton);

    let container = Container::with_options(options.clone());
    assert_eq!(container.options(), &options);
}

#[test]
fn test_empty_json_keeps_defaults() {
    assert_eq!(ContainerOptions::from_json("{}").unwrap(), ContainerOptions::default());
}

#[test]
fn test_invalid_json_is_reported() {
    let err = ContainerOptions::from_json(r#"{ "convention_lifetime": "scoped" }"#).unwrap_err();
    assert!(matches!(err, DiError::InvalidConfig(_)));
}

#[test]
fn test_options_serialize_round_trip() {
    let options = ContainerOptions::new().with_convention_lifetime(Lifetime::Singleton);
    let json = serde_json::to_string(&options).unwrap();
    assert!(json.contains("\"singleton\""));
}
