//! Container options.

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

use crate::lifetime::Lifetime;
#[cfg(feature = "config")]
use crate::{DiError, DiResult};

/// Tunables for a [`Container`](crate::Container)
///
/// The defaults follow the classic convention: `Foo` is bound to `IFoo`
/// as a transient.
///
/// ```rust
/// use ferrous_ioc::{ContainerOptions, Lifetime};
///
/// let options = ContainerOptions::new()
///     .with_convention_prefix("Abstract")
///     .with_convention_lifetime(Lifetime::Singleton);
/// assert_eq!(options.convention_prefix, "Abstract");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct ContainerOptions {
    /// Prefix that turns a concrete type's bare name into its service name
    pub convention_prefix: String,
    /// Lifetime of bindings created by convention scanning
    pub convention_lifetime: Lifetime,
}

impl ContainerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_convention_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.convention_prefix = prefix.into();
        self
    }

    pub fn with_convention_lifetime(mut self, lifetime: Lifetime) -> Self {
        self.convention_lifetime = lifetime;
        self
    }

    /// Loads options from JSON; missing fields keep their defaults.
    ///
    /// ```rust
    /// # #[cfg(feature = "config")] {
    /// use ferrous_ioc::{ContainerOptions, Lifetime};
    ///
    /// let options = ContainerOptions::from_json(r#"{ "convention_lifetime": "singleton" }"#).unwrap();
    /// assert_eq!(options.convention_prefix, "I");
    /// assert_eq!(options.convention_lifetime, Lifetime::Singleton);
    /// # }
    /// ```
    #[cfg(feature = "config")]
    pub fn from_json(json: &str) -> DiResult<Self> {
        serde_json::from_str(json).map_err(|e| DiError::InvalidConfig(e.to_string()))
    }
}

impl Default for ContainerOptions {
    fn default() -> Self {
        Self {
            convention_prefix: "I".to_string(),
            convention_lifetime: Lifetime::Transient,
        }
    }
}
