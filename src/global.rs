//! Process-wide container.
//!
//! Prefer passing an explicit [`Container`] around; the global exists for
//! code that expects one shared registry for the whole process. Tests that
//! touch it should [`reset`](Container::reset) it first and run serially.

use once_cell::sync::Lazy;

use crate::container::Container;

static GLOBAL: Lazy<Container> = Lazy::new(|| {
    tracing::debug!("initializing global container");
    Container::new()
});

/// The process-wide container, created empty on first use.
///
/// ```rust
/// use ferrous_ioc::{global, Resolver};
/// use std::sync::Arc;
///
/// global().register_instance(Arc::new("shared".to_string()));
/// assert_eq!(global().resolve::<String>().unwrap().as_str(), "shared");
/// global().reset();
/// ```
pub fn global() -> &'static Container {
    &GLOBAL
}
