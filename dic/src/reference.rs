//! Named placeholders that point one registered entry at another.

use crate::error::{Error, Result};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A marker argument standing for "the first result of the service named `name`".
///
/// References are consumed while a definition's arguments are resolved; the
/// container never stores them as results.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference {
  name: String,
}

impl Reference {
  pub fn new(name: impl Into<String>) -> Self {
    Self { name: name.into() }
  }

  /// The name of the service this reference points to.
  pub fn reference(&self) -> &str {
    &self.name
  }
}

impl fmt::Display for Reference {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "@{}", self.name)
  }
}

/// Reports the referenced name if `value` is a [`Reference`].
///
/// Argument lists are heterogeneous, so a non-reference input is an expected
/// case and is reported as [`Error::ObjectIsNotAReference`] rather than a panic.
pub fn is_a_reference(value: &dyn Any) -> Result<&str> {
  if let Some(reference) = value.downcast_ref::<Reference>() {
    return Ok(reference.reference());
  }
  if let Some(reference) = value.downcast_ref::<Arc<Reference>>() {
    return Ok(reference.reference());
  }
  Err(Error::ObjectIsNotAReference)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn new_keeps_the_name() {
    let reference = Reference::new("ref");
    assert_eq!(reference.reference(), "ref");
    assert_eq!(reference.to_string(), "@ref");
  }

  #[test]
  fn is_a_reference_finds_references() {
    let reference = Reference::new("ref");
    assert_eq!(is_a_reference(&reference).unwrap(), "ref");

    let shared = Arc::new(Reference::new("shared"));
    assert_eq!(is_a_reference(&shared).unwrap(), "shared");
  }

  #[test]
  fn is_a_reference_rejects_other_values() {
    let err = is_a_reference(&true).unwrap_err();
    assert!(matches!(err, Error::ObjectIsNotAReference));
    assert!(is_a_reference(&"ref").is_err());
  }
}
