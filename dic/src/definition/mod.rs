//! What the container stores per name.

mod kind;

pub use kind::{Kind, Producer};

use crate::argument::Argument;
use std::fmt;

/// One registered entry: a producer, its derived [`Kind`], its arguments and
/// its visibility/lifetime flags.
///
/// A `public` definition can be requested directly; a private one only serves
/// as a dependency of other entries. A `static` definition is built at most
/// once and the cached results are reused for every call without override
/// arguments.
#[derive(Clone)]
pub struct Definition {
  producer: Producer,
  kind: Kind,
  args: Vec<Argument>,
  public: bool,
  is_static: bool,
}

impl Definition {
  pub fn new<P, I>(producer: P, public: bool, is_static: bool, args: I) -> Self
  where
    P: Into<Producer>,
    I: IntoIterator<Item = Argument>,
  {
    let producer = producer.into();
    Self {
      kind: producer.kind(),
      producer,
      args: args.into_iter().collect(),
      public,
      is_static,
    }
  }

  /// Swaps the whole argument list.
  pub fn replace_args<I>(&mut self, args: I) -> &mut Self
  where
    I: IntoIterator<Item = Argument>,
  {
    self.args = args.into_iter().collect();
    self
  }

  pub fn set_public(&mut self, public: bool) -> &mut Self {
    self.public = public;
    self
  }

  pub fn set_static(&mut self, is_static: bool) -> &mut Self {
    self.is_static = is_static;
    self
  }

  pub fn value(&self) -> &Producer {
    &self.producer
  }

  pub fn args(&self) -> &[Argument] {
    &self.args
  }

  pub fn is_public(&self) -> bool {
    self.public
  }

  pub fn is_static(&self) -> bool {
    self.is_static
  }

  pub fn kind(&self) -> Kind {
    self.kind
  }
}

impl fmt::Debug for Definition {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Definition")
      .field("kind", &self.kind)
      .field("args", &self.args)
      .field("public", &self.public)
      .field("static", &self.is_static)
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{args, Reference};

  #[test]
  fn new_with_a_callable_and_args() {
    let definition = Definition::new(Producer::callable(|s: &'static str| s.len()), true, true, args!["arg1"]);
    assert_eq!(definition.kind(), Kind::Callable);
    assert_eq!(definition.args().len(), 1);
    assert!(definition.is_public());
    assert!(definition.is_static());
  }

  #[test]
  fn new_without_args() {
    let definition = Definition::new(Producer::callable(|| ()), true, true, args![]);
    assert!(definition.args().is_empty());
  }

  #[test]
  fn replace_args_swaps_the_whole_list() {
    let mut definition = Definition::new("value", true, true, args!["arg1"]);
    definition.replace_args(args!["arg1", Reference::new("arg2")]);
    assert_eq!(definition.args().len(), 2);
    assert_eq!(definition.args()[1].reference_name(), Some("arg2"));
    assert_eq!(definition.kind(), Kind::Parameter);
  }

  #[test]
  fn flags_chain() {
    let mut definition = Definition::new(42_i64, true, true, args![]);
    definition.set_public(false).set_static(false);
    assert!(!definition.is_public());
    assert!(!definition.is_static());
  }
}
