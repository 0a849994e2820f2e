use fibre_dic::{args, Container, Definition, Error, Kind, Producer, Reference};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

// --- Registration ---

#[test]
fn test_register_functions() {
  let container = Container::new();
  container
    .register("hello", Producer::callable(|| println!("hello")), args![])
    .unwrap();
  container
    .register("foobar", Producer::callable(|a: i32, b: i32, c: i32| a + b + c), args![])
    .unwrap();

  assert!(container.contains("hello"));
  assert!(container.contains("foobar"));
  assert_eq!(container.len(), 2);
}

#[test]
fn test_get_definition_of_missing_service() {
  let container = Container::new();
  match container.get_definition("hello") {
    Err(Error::ServiceNotFound(name)) => assert_eq!(name, "hello"),
    other => panic!("unexpected {other:?}"),
  }
}

#[test]
fn test_get_definition_returns_the_stored_definition() {
  let container = Container::new();
  container
    .register("hello", Producer::callable(|| "hello"), args![])
    .unwrap();

  let definition = container.get_definition("hello").unwrap();
  assert_eq!(definition.kind(), Kind::Callable);
  assert!(definition.is_public());
  assert!(definition.is_static());
}

// --- Resolution ---

#[test]
fn test_get_all_returns_every_result() {
  let container = Container::new();
  container.register("root", Producer::callable(|| 2 * 2), args![]).unwrap();

  let results = container.get_all("root", args![]).unwrap();
  assert_eq!(results.len(), 1);
  assert_eq!(results[0].downcast_ref::<i32>(), Some(&4));
}

#[test]
fn test_get_returns_the_first_result() {
  let container = Container::new();
  container.register("root", Producer::callable(|| 2 * 2), args![]).unwrap();

  let first = container.get("root", args![]).unwrap();
  assert_eq!(first.downcast_ref::<i32>(), Some(&4));
}

#[test]
fn test_get_swallows_errors() {
  let container = Container::new();
  assert!(container.get("missing", args![]).is_none());

  // A producer without a return value yields no result at all.
  container.register("hello", Producer::callable(|| ()), args![]).unwrap();
  assert!(container.get_all("hello", args![]).unwrap().is_empty());
  assert!(container.get("hello", args![]).is_none());
}

#[test]
fn test_private_service_is_not_resolvable_directly() {
  let container = Container::new();
  let definition = Definition::new(Producer::callable(|| 2 * 2), false, false, args![]);
  container.set_definition("root", definition).unwrap();

  let err = container.get_all("root", args![]).unwrap_err();
  assert!(matches!(err, Error::ServiceNotPublic(ref name) if name == "root"));
  assert!(err.to_string().contains("not public"));
}

#[test]
fn test_missing_service_is_reported() {
  let container = Container::new();
  let err = container.get_all("hello", args![]).unwrap_err();
  assert_eq!(err.to_string(), "Service hello not found");
}

// --- Caching ---

#[test]
fn test_static_service_is_built_once() {
  let container = Container::new();
  container.register("root", Producer::callable(Instant::now), args![]).unwrap();

  let before = container.get_all("root", args![]).unwrap();
  thread::sleep(Duration::from_millis(2));
  let now = container.get_all("root", args![]).unwrap();

  assert!(Arc::ptr_eq(&before[0], &now[0]));
  assert_eq!(before[0].downcast_ref::<Instant>(), now[0].downcast_ref::<Instant>());
}

#[test]
fn test_non_static_service_is_built_each_time() {
  let container = Container::new();
  let definition = Definition::new(Producer::callable(Instant::now), true, false, args![]);
  container.set_definition("root", definition).unwrap();

  let before = container.get_all("root", args![]).unwrap();
  thread::sleep(Duration::from_millis(2));
  let now = container.get_all("root", args![]).unwrap();

  assert!(!Arc::ptr_eq(&before[0], &now[0]));
  assert_ne!(before[0].downcast_ref::<Instant>(), now[0].downcast_ref::<Instant>());
}

// --- Dependencies ---

#[test]
fn test_reference_is_substituted() {
  let container = Container::new();
  container.register("service.4", Producer::callable(|| 4), args![]).unwrap();
  container
    .register("multiplicator", Producer::callable(|a: i32| a * 2), args![])
    .unwrap();

  let results = container
    .get_all("multiplicator", args![Reference::new("service.4")])
    .unwrap();
  assert_eq!(results[0].downcast_ref::<i32>(), Some(&8));
}

#[test]
fn test_mixed_literal_and_reference_arguments() {
  let container = Container::new();
  container.register("service.2", Producer::callable(|| 2), args![]).unwrap();
  container
    .register(
      "service.sum",
      Producer::callable(|a: i32, b: i32, format: &'static str| {
        format.replacen("%d", &a.to_string(), 1).replacen("%d", &b.to_string(), 1)
      }),
      args![],
    )
    .unwrap();

  let results = container
    .get_all("service.sum", args![Reference::new("service.2"), 3, "a:%d,b:%d"])
    .unwrap();
  assert_eq!(results[0].downcast_ref::<String>().map(String::as_str), Some("a:2,b:3"));
}

#[test]
fn test_arity_mismatch_is_not_adapted() {
  let container = Container::new();
  container
    .register("pair", Producer::callable(|a: i32, b: i32| a + b), args![1])
    .unwrap();

  let err = container.get_all("pair", args![]).unwrap_err();
  assert!(matches!(err, Error::ParamsNotAdapted { given: 1, expected: 2 }));
  assert_eq!(err.to_string(), "The number of params is not adapted. Given:1, Expected:2");
}

#[test]
fn test_private_service_resolves_as_a_dependency() {
  let container = Container::new();
  let secret = Definition::new(Producer::callable(|| 21), false, true, args![]);
  container.set_definition("secret", secret).unwrap();
  container
    .register("answer", Producer::callable(|a: i32| a * 2), args![Reference::new("secret")])
    .unwrap();

  assert!(matches!(
    container.get_all("secret", args![]),
    Err(Error::ServiceNotPublic(_))
  ));
  assert_eq!(*container.resolve::<i32>("answer").unwrap(), 42);
}

#[test]
fn test_missing_dependency_is_reported() {
  let container = Container::new();
  container
    .register("answer", Producer::callable(|a: i32| a * 2), args![Reference::new("nowhere")])
    .unwrap();

  match container.get_all("answer", args![]) {
    Err(Error::ServiceNotFound(name)) => assert_eq!(name, "nowhere"),
    other => panic!("unexpected {other:?}"),
  }
}
