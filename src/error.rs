//! Error types for the container.

use std::fmt;
use std::sync::Arc;

/// Boxed error returned by fallible constructors and wiring factories.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Container errors
///
/// Every failure surfaces synchronously to the caller of `resolve`; nothing
/// is retried and no partially built graph is cached.
///
/// # Examples
///
/// ```rust
/// use ferrous_ioc::{Container, DiError, Resolver};
///
/// let container = Container::new();
/// match container.resolve::<String>() {
///     Err(DiError::NotRegistered(type_name)) => {
///         assert_eq!(type_name, "alloc::string::String");
///     }
///     _ => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone)]
pub enum DiError {
    /// No binding for the requested service
    NotRegistered(&'static str),
    /// Stored value or descriptor cannot be viewed as the requested service
    TypeMismatch(&'static str),
    /// A constructor or factory reported an error
    ConstructionFailed {
        service: &'static str,
        source: Arc<dyn std::error::Error + Send + Sync>,
    },
    /// Type declares no constructor and has no implicit default
    NoConstructor(&'static str),
    /// Container options could not be loaded
    InvalidConfig(String),
}

impl DiError {
    /// Wraps a constructor error for `service`.
    pub fn construction(service: &'static str, source: impl Into<BoxError>) -> Self {
        DiError::ConstructionFailed {
            service,
            source: Arc::from(source.into()),
        }
    }
}

impl fmt::Display for DiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiError::NotRegistered(name) => write!(f, "Service not registered: {}", name),
            DiError::TypeMismatch(name) => write!(f, "Type mismatch for: {}", name),
            DiError::ConstructionFailed { service, source } => {
                write!(f, "Construction of {} failed: {}", service, source)
            }
            DiError::NoConstructor(name) => write!(f, "No usable constructor for: {}", name),
            DiError::InvalidConfig(msg) => write!(f, "Invalid container options: {}", msg),
        }
    }
}

impl std::error::Error for DiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DiError::ConstructionFailed { source, .. } => Some(&**source),
            _ => None,
        }
    }
}

/// Result type for container operations
pub type DiResult<T> = Result<T, DiError>;
