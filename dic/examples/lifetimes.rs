use fibre_dic::{args, Container, Definition, Producer};
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};

// A simple service that gets a unique ID upon creation.
struct RequestTracker {
  id: usize,
}

static ID_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn tracker() -> RequestTracker {
  RequestTracker {
    id: ID_COUNTER.fetch_add(1, Ordering::SeqCst),
  }
}

fn main() {
  let container = Container::new();

  // Static: built once, then served from the cache.
  container
    .register("static_tracker", Producer::callable(tracker), args![])
    .unwrap();

  // Non-static: built on every request.
  let dynamic = Definition::new(Producer::callable(tracker), true, false, args![]);
  container.set_definition("dynamic_tracker", dynamic).unwrap();

  println!("--- Resolving static services ---");
  let s1 = container.resolve::<RequestTracker>("static_tracker").unwrap();
  let s2 = container.resolve::<RequestTracker>("static_tracker").unwrap();
  println!("Static 1 ID: {}, Static 2 ID: {}", s1.id, s2.id);
  assert!(Arc::ptr_eq(&s1, &s2), "Static instances should be identical");

  println!("--- Resolving non-static services ---");
  let d1 = container.resolve::<RequestTracker>("dynamic_tracker").unwrap();
  let d2 = container.resolve::<RequestTracker>("dynamic_tracker").unwrap();
  println!("Dynamic 1 ID: {}, Dynamic 2 ID: {}", d1.id, d2.id);
  assert!(!Arc::ptr_eq(&d1, &d2), "Non-static instances should be different");
}
