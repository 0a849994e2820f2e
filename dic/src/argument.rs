//! One slot of a definition's argument list.

use crate::core::Service;
use crate::reference::{is_a_reference, Reference};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Either a literal value passed through as-is, or a reference resolved by name.
#[derive(Clone)]
pub enum Argument {
  Literal(Service),
  Reference(Reference),
}

impl Argument {
  /// Wraps `value`, turning a [`Reference`] into a by-name slot and anything
  /// else into a literal.
  pub fn new<T: Any + Send + Sync>(value: T) -> Self {
    let boxed: Box<dyn Any + Send + Sync> = Box::new(value);
    match boxed.downcast::<Reference>() {
      Ok(reference) => Argument::Reference(*reference),
      Err(other) => Argument::Literal(Arc::from(other)),
    }
  }

  pub fn literal<T: Any + Send + Sync>(value: T) -> Self {
    Argument::Literal(Arc::new(value))
  }

  pub fn reference(name: impl Into<String>) -> Self {
    Argument::Reference(Reference::new(name))
  }

  /// Builds a slot from an already type-erased value.
  pub fn from_service(service: Service) -> Self {
    match is_a_reference(&*service).ok().map(str::to_owned) {
      Some(name) => Argument::reference(name),
      None => Argument::Literal(service),
    }
  }

  /// The referenced service name, if this slot is a reference.
  pub fn reference_name(&self) -> Option<&str> {
    match self {
      Argument::Reference(reference) => Some(reference.reference()),
      Argument::Literal(_) => None,
    }
  }
}

impl From<Reference> for Argument {
  fn from(reference: Reference) -> Self {
    Argument::Reference(reference)
  }
}

impl fmt::Debug for Argument {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Argument::Literal(_) => f.write_str("Literal(..)"),
      Argument::Reference(reference) => f.debug_tuple("Reference").field(&reference.reference()).finish(),
    }
  }
}
