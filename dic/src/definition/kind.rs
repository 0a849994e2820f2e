//! Producer shapes and their classification.

use crate::callable::{Callable, IntoCallable};
use crate::core::Service;
use crate::record::Record;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// How the container dispatches a producer at resolution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
  /// Cannot be handled; rejected when resolved.
  Invalid,
  /// Invoked with positional arguments; all of its outputs are the results.
  Callable,
  /// A record whose settable fields receive the arguments in order.
  Fields,
  /// A ready value returned as-is.
  Parameter,
}

impl fmt::Display for Kind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      Kind::Invalid => "invalid",
      Kind::Callable => "callable",
      Kind::Fields => "fields",
      Kind::Parameter => "parameter",
    };
    f.write_str(name)
  }
}

/// The registered value that yields a service's results.
#[derive(Clone)]
pub enum Producer {
  Callable(Arc<dyn Callable>),
  Fields(Arc<dyn Record>),
  Parameter(Service),
  Invalid(Service),
}

impl Producer {
  /// Wraps a function or closure taking up to eight cloneable arguments.
  pub fn callable<F, Args>(f: F) -> Self
  where
    F: IntoCallable<Args>,
  {
    Producer::Callable(f.into_callable())
  }

  pub fn fields<R: Record>(record: R) -> Self {
    Producer::Fields(Arc::new(record))
  }

  pub fn parameter<T: Any + Send + Sync>(value: T) -> Self {
    Producer::Parameter(Arc::new(value))
  }

  /// Classifies an already type-erased value by inspecting its concrete type.
  ///
  /// An erased `Arc<dyn Callable>` or `Arc<dyn Record>` keeps its capability.
  /// A value that is itself only another erased handle has no structure left
  /// to dispatch on and is `Invalid`. Everything else (scalars, strings,
  /// collections, maps, YAML values, plain structs) is a parameter.
  pub fn classify(value: Service) -> Self {
    if let Some(callable) = value.downcast_ref::<Arc<dyn Callable>>() {
      return Producer::Callable(Arc::clone(callable));
    }
    if let Some(record) = value.downcast_ref::<Arc<dyn Record>>() {
      return Producer::Fields(Arc::clone(record));
    }
    if is_opaque_handle(&*value) {
      Producer::Invalid(value)
    } else {
      Producer::Parameter(value)
    }
  }

  pub fn kind(&self) -> Kind {
    match self {
      Producer::Callable(_) => Kind::Callable,
      Producer::Fields(_) => Kind::Fields,
      Producer::Parameter(_) => Kind::Parameter,
      Producer::Invalid(_) => Kind::Invalid,
    }
  }
}

impl fmt::Debug for Producer {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Producer::Callable(callable) => f.debug_struct("Callable").field("arity", &callable.arity()).finish(),
      Producer::Fields(record) => f.debug_struct("Fields").field("fields", &record.field_names()).finish(),
      Producer::Parameter(_) => f.write_str("Parameter(..)"),
      Producer::Invalid(_) => f.write_str("Invalid(..)"),
    }
  }
}

fn is_opaque_handle(value: &(dyn Any + Send + Sync)) -> bool {
  value.is::<Service>() || value.is::<Box<dyn Any + Send + Sync>>() || value.is::<Arc<dyn Any>>()
}

macro_rules! impl_parameter_from {
  ($($ty:ty),+ $(,)?) => {
    $(
      impl From<$ty> for Producer {
        fn from(value: $ty) -> Self {
          Producer::parameter(value)
        }
      }
    )+
  };
}

impl_parameter_from!(
  bool, char,
  i8, i16, i32, i64, i128, isize,
  u8, u16, u32, u64, u128, usize,
  f32, f64,
  String, &'static str,
  serde_yaml::Value,
);

impl From<Service> for Producer {
  fn from(value: Service) -> Self {
    Producer::classify(value)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn typed_constructors_pick_their_kind() {
    assert_eq!(Producer::callable(|| 4).kind(), Kind::Callable);
    assert_eq!(Producer::parameter(vec![1, 2, 3]).kind(), Kind::Parameter);
    assert_eq!(Producer::from("logger").kind(), Kind::Parameter);
    assert_eq!(Producer::from(123_456_789_i64).kind(), Kind::Parameter);
    assert_eq!(Producer::from(8080_u16).kind(), Kind::Parameter);
    assert_eq!(Producer::from(0.5_f32).kind(), Kind::Parameter);
  }

  #[test]
  fn classify_inspects_erased_values() {
    let text: Service = Arc::new(String::from("Can not call this as a function"));
    assert_eq!(Producer::classify(text).kind(), Kind::Parameter);

    let list: Service = Arc::new(vec![String::from("a")]);
    assert_eq!(Producer::classify(list).kind(), Kind::Parameter);

    let callable: Arc<dyn Callable> = crate::callable::IntoCallable::into_callable(|a: i32| a * 2);
    let erased: Service = Arc::new(callable);
    assert_eq!(Producer::classify(erased).kind(), Kind::Callable);

    let numbers: Service = Arc::new(vec![1_i32, 2, 3]);
    assert_eq!(Producer::classify(numbers).kind(), Kind::Parameter);

    let pair: Service = Arc::new([1_i64, 2]);
    assert_eq!(Producer::classify(pair).kind(), Kind::Parameter);

    let inner: Service = Arc::new(7_u8);
    let nested: Service = Arc::new(inner);
    assert_eq!(Producer::classify(nested).kind(), Kind::Invalid);
  }

  #[test]
  fn kinds_display_lowercase() {
    assert_eq!(Kind::Fields.to_string(), "fields");
    assert_eq!(Kind::Invalid.to_string(), "invalid");
  }
}
