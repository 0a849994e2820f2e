//! Core data structures shared by the resolver: the type-erased service handle
//! and the per-thread resolution stack.

use crate::error::{Error, Result};
use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::sync::Arc;

/// A resolved, type-erased value. Two results are the same instance when
/// `Arc::ptr_eq` holds.
pub type Service = Arc<dyn Any + Send + Sync>;

/// Clones the value behind `service` out as a `T`.
///
/// Asking for `Service` itself hands back a clone of the handle, so producers
/// can accept opaque dependencies.
pub fn downcast_cloned<T: Any + Clone>(service: &Service) -> Option<T> {
  if TypeId::of::<T>() == TypeId::of::<Service>() {
    let handle: Box<dyn Any> = Box::new(Arc::clone(service));
    return handle.downcast::<T>().ok().map(|boxed| *boxed);
  }
  service.downcast_ref::<T>().cloned()
}

thread_local! {
  // Services currently being resolved on this thread, outermost first.
  static RESOLVING_STACK: RefCell<Vec<ResolutionKey>> = const { RefCell::new(Vec::new()) };
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ResolutionKey {
  container: u64,
  name: String,
}

/// An RAII guard that bounds recursion and detects dependency cycles.
///
/// Entering pushes `(container, name)` on the thread's resolution stack and
/// fails if the name is already being resolved by the same container or the
/// chain is already `max_depth` deep. Dropping the guard pops the entry.
pub(crate) struct ResolutionGuard {
  key: ResolutionKey,
}

impl ResolutionGuard {
  pub(crate) fn enter(container: u64, name: &str, max_depth: usize) -> Result<Self> {
    RESOLVING_STACK.with(|stack| {
      let mut stack = stack.borrow_mut();
      let chain = stack
        .iter()
        .filter(|key| key.container == container)
        .map(|key| key.name.as_str());

      if let Some(start) = chain.clone().position(|resolving| resolving == name) {
        let mut cycle: Vec<String> = chain.skip(start).map(str::to_owned).collect();
        cycle.push(name.to_owned());
        return Err(Error::CyclicDependency { chain: cycle });
      }

      if chain.count() >= max_depth {
        return Err(Error::MaxDepthExceeded {
          name: name.to_owned(),
          limit: max_depth,
        });
      }

      let key = ResolutionKey {
        container,
        name: name.to_owned(),
      };
      stack.push(key.clone());
      Ok(Self { key })
    })
  }
}

impl Drop for ResolutionGuard {
  fn drop(&mut self) {
    RESOLVING_STACK.with(|stack| {
      let mut stack = stack.borrow_mut();
      if let Some(position) = stack.iter().rposition(|key| *key == self.key) {
        stack.remove(position);
      }
    });
  }
}
