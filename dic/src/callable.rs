//! Function-shaped producers: invoked with positional, type-erased arguments.

use crate::core::{downcast_cloned, Service};
use crate::error::{Error, Result};
use std::any::{type_name, Any};
use std::marker::PhantomData;
use std::sync::Arc;

/// A producer that can be invoked with exactly `arity()` arguments.
pub trait Callable: Send + Sync + 'static {
  /// The number of positional inputs the producer requires.
  fn arity(&self) -> usize;

  /// Invokes the producer. The container checks the arity before calling.
  fn call(&self, args: Vec<Service>) -> Result<Vec<Service>>;
}

/// Conversion from a plain Rust function or closure into a [`Callable`].
///
/// `Args` is the tuple of parameter types and only exists to keep the
/// implementations for different arities apart.
pub trait IntoCallable<Args>: Send + Sync + 'static {
  fn into_callable(self) -> Arc<dyn Callable>;
}

/// Several results returned from a single producer call.
///
/// A function returning `Outputs` yields each pushed value as its own result,
/// a function returning `()` yields none, and any other return value yields one.
#[derive(Clone, Default)]
pub struct Outputs(Vec<Service>);

impl Outputs {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with<T: Any + Send + Sync>(mut self, value: T) -> Self {
    self.0.push(Arc::new(value));
    self
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}

impl From<Vec<Service>> for Outputs {
  fn from(services: Vec<Service>) -> Self {
    Self(services)
  }
}

fn into_outputs<R: Any + Send + Sync>(result: R) -> Vec<Service> {
  let boxed: Box<dyn Any + Send + Sync> = Box::new(result);
  if boxed.is::<()>() {
    return Vec::new();
  }
  match boxed.downcast::<Outputs>() {
    Ok(outputs) => outputs.0,
    Err(single) => vec![Arc::from(single)],
  }
}

fn argument<T: Any + Clone>(args: &[Service], position: usize) -> Result<T> {
  downcast_cloned::<T>(&args[position]).ok_or(Error::ArgumentTypeMismatch {
    position,
    expected: type_name::<T>(),
  })
}

struct FnCallable<F, Args> {
  f: F,
  _args: PhantomData<fn() -> Args>,
}

macro_rules! impl_callable {
  ($arity:literal; $($arg:ident => $position:tt),*) => {
    impl<F, R, $($arg,)*> Callable for FnCallable<F, ($($arg,)*)>
    where
      F: Fn($($arg),*) -> R + Send + Sync + 'static,
      R: Any + Send + Sync,
      $($arg: Any + Clone + Send + Sync,)*
    {
      fn arity(&self) -> usize {
        $arity
      }

      fn call(&self, args: Vec<Service>) -> Result<Vec<Service>> {
        if args.len() != $arity {
          return Err(Error::ParamsNotAdapted {
            given: args.len(),
            expected: $arity,
          });
        }
        let result = (self.f)($(argument::<$arg>(&args, $position)?),*);
        Ok(into_outputs(result))
      }
    }

    impl<F, R, $($arg,)*> IntoCallable<($($arg,)*)> for F
    where
      F: Fn($($arg),*) -> R + Send + Sync + 'static,
      R: Any + Send + Sync,
      $($arg: Any + Clone + Send + Sync,)*
    {
      fn into_callable(self) -> Arc<dyn Callable> {
        Arc::new(FnCallable {
          f: self,
          _args: PhantomData,
        })
      }
    }
  };
}

impl_callable!(0;);
impl_callable!(1; A0 => 0);
impl_callable!(2; A0 => 0, A1 => 1);
impl_callable!(3; A0 => 0, A1 => 1, A2 => 2);
impl_callable!(4; A0 => 0, A1 => 1, A2 => 2, A3 => 3);
impl_callable!(5; A0 => 0, A1 => 1, A2 => 2, A3 => 3, A4 => 4);
impl_callable!(6; A0 => 0, A1 => 1, A2 => 2, A3 => 3, A4 => 4, A5 => 5);
impl_callable!(7; A0 => 0, A1 => 1, A2 => 2, A3 => 3, A4 => 4, A5 => 5, A6 => 6);
impl_callable!(8; A0 => 0, A1 => 1, A2 => 2, A3 => 3, A4 => 4, A5 => 5, A6 => 6, A7 => 7);
