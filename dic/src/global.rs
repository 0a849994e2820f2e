//! The process-wide container instance.

use crate::container::Container;
use once_cell::sync::Lazy;

static GLOBAL_CONTAINER: Lazy<Container> = Lazy::new(Container::default);

/// Provides a reference to the global container instance.
///
/// Registration and resolution both work through `&self`, so bootstrap code
/// and request handlers can share it without further wiring.
///
/// # Examples
///
/// ```
/// use fibre_dic::{args, global};
///
/// global().register("app.name", "fibre", args![]).unwrap();
/// assert!(global().contains("app.name"));
/// ```
pub fn global() -> &'static Container {
  &GLOBAL_CONTAINER
}
