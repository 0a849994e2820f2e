//! Tests for the public macros: `args!`, `impl_record!`, `resolve!` and `resolve_from!`.

use fibre_dic::{args, global, impl_record, resolve, resolve_from, Argument, Container, Producer, Reference, Record};
use pretty_assertions::assert_eq;
use std::sync::Arc;

#[derive(Clone, Default)]
struct Endpoint {
  host: String,
  port: u16,
}

impl_record!(Endpoint { host: String, port: u16 });

#[test]
fn test_args_sorts_references_from_literals() {
  let empty: Vec<Argument> = args![];
  assert!(empty.is_empty());

  let mixed = args![Reference::new("two"), 3, "a:%d,b:%d",];
  assert_eq!(mixed.len(), 3);
  assert_eq!(mixed[0].reference_name(), Some("two"));
  assert_eq!(mixed[1].reference_name(), None);
  assert_eq!(mixed[2].reference_name(), None);
}

#[test]
fn test_impl_record_declares_settable_fields() {
  let endpoint = Endpoint::default();
  assert_eq!(endpoint.field_names(), &["host", "port"]);

  let container = Container::new();
  container
    .register(
      "endpoint",
      Producer::fields(Endpoint::default()),
      args![String::from("localhost"), 8080_u16],
    )
    .unwrap();

  let endpoint = resolve_from!(container, Endpoint, "endpoint");
  assert_eq!(endpoint.host, "localhost");
  assert_eq!(endpoint.port, 8080);
}

#[test]
fn test_resolve_from_global() {
  global()
    .register("macros.greeting", Producer::callable(|| String::from("Hello!")), args![])
    .unwrap();

  let first = resolve!(String, "macros.greeting");
  let second = resolve!(String, "macros.greeting");
  assert_eq!(*first, "Hello!");
  assert!(Arc::ptr_eq(&first, &second));
}

#[test]
#[should_panic(expected = "Failed to resolve required service 'macros.missing'")]
fn test_resolve_panics_on_missing_service() {
  resolve!(String, "macros.missing");
}

#[test]
#[should_panic(expected = "is not of type")]
fn test_resolve_from_panics_on_wrong_type() {
  let container = Container::new();
  container.register("port", 8080_u32, args![]).unwrap();
  resolve_from!(container, String, "port");
}
