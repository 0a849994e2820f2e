//! Filling the fields of an externally owned value from the container.

use crate::container::Container;
use crate::core::downcast_cloned;
use crate::error::{Error, Result};
use std::any::{type_name, Any};

/// A value that declares which of its fields are fed by which services.
///
/// ```
/// use fibre_dic::{args, Container, Injectable, Injector, Result};
///
/// #[derive(Default)]
/// struct Handler {
///   db_name: String,
///   verbose: bool,
/// }
///
/// impl Injectable for Handler {
///   fn inject_fields(&mut self, injector: &mut Injector<'_>) -> Result<()> {
///     injector.bind(&mut self.db_name, "db.name")?;
///     injector.bind(&mut self.verbose, "logger.verbose")
///   }
/// }
///
/// let container = Container::new();
/// container.register("db.name", "app", args![]).unwrap();
/// container.register("logger.verbose", true, args![]).unwrap();
///
/// let mut handler = Handler::default();
/// container.inject(&mut handler).unwrap();
/// assert_eq!(handler.db_name, "app");
/// assert!(handler.verbose);
/// ```
pub trait Injectable {
  fn inject_fields(&mut self, injector: &mut Injector<'_>) -> Result<()>;
}

/// Visitor handed to [`Injectable::inject_fields`].
pub struct Injector<'c> {
  container: &'c Container,
  bound: usize,
}

impl<'c> Injector<'c> {
  pub(crate) fn new(container: &'c Container) -> Self {
    Self { container, bound: 0 }
  }

  /// Sets `slot` to the first result of `service`.
  ///
  /// Like dependency resolution, this does not require the service to be public.
  pub fn bind<T: Any + Clone>(&mut self, slot: &mut T, service: &str) -> Result<()> {
    let first = self.container.resolve_first(service)?;
    *slot = downcast_cloned::<T>(&first).ok_or_else(|| Error::ServiceTypeMismatch {
      name: service.to_owned(),
      expected: type_name::<T>(),
    })?;
    self.bound += 1;
    Ok(())
  }

  /// Number of fields set so far.
  pub fn bound(&self) -> usize {
    self.bound
  }
}
