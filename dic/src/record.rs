//! Field-bearing producers: a template record populated positionally.

use crate::core::{downcast_cloned, Service};
use crate::error::{Error, Result};
use std::any::{type_name, Any};

/// A record whose settable fields can be assigned by position.
///
/// Implementations are usually generated with [`impl_record!`](crate::impl_record).
/// The registered record acts as a template: each resolution populates a fresh
/// copy of it.
pub trait Record: Send + Sync + 'static {
  /// Names of the settable fields, in declaration order.
  fn field_names(&self) -> &'static [&'static str];

  fn set_field(&mut self, index: usize, value: Service) -> Result<()>;

  fn clone_record(&self) -> Box<dyn Record>;

  fn into_service(self: Box<Self>) -> Service;

  fn field_count(&self) -> usize {
    self.field_names().len()
  }
}

/// Downcasts a resolved argument for the field `field`.
#[doc(hidden)]
pub fn field_value<T: Any + Clone>(value: &Service, field: &'static str) -> Result<T> {
  downcast_cloned::<T>(value).ok_or(Error::FieldTypeMismatch {
    field,
    expected: type_name::<T>(),
  })
}

/// Copies `template` and assigns `args` to its settable fields in order.
pub(crate) fn populate(template: &dyn Record, args: Vec<Service>) -> Result<Vec<Service>> {
  let expected = template.field_count();
  if args.len() != expected {
    return Err(Error::ParamsNotAdapted {
      given: args.len(),
      expected,
    });
  }

  let mut record = template.clone_record();
  for (index, value) in args.into_iter().enumerate() {
    record.set_field(index, value)?;
  }
  Ok(vec![record.into_service()])
}
