//! Public macros for building argument lists, records and for resolution.

/// Builds a `Vec<Argument>`, turning each [`Reference`](crate::Reference) into a
/// by-name slot and every other value into a literal.
///
/// # Examples
///
/// ```
/// use fibre_dic::{args, Container, Producer, Reference};
///
/// let container = Container::new();
/// container.register("two", Producer::callable(|| 2), args![]).unwrap();
/// container
///   .register("sum", Producer::callable(|a: i32, b: i32| a + b), args![Reference::new("two"), 3])
///   .unwrap();
///
/// let sum = container.resolve::<i32>("sum").unwrap();
/// assert_eq!(*sum, 5);
/// ```
#[macro_export]
macro_rules! args {
  () => {
    ::std::vec::Vec::<$crate::Argument>::new()
  };
  ($($value:expr),+ $(,)?) => {
    ::std::vec![$($crate::Argument::new($value)),+]
  };
}

/// Implements [`Record`](crate::Record) for a `Clone` struct, declaring which
/// fields are settable and in which order.
///
/// Fields left out of the list keep the value they have in the registered
/// template.
///
/// # Examples
///
/// ```
/// use fibre_dic::{args, impl_record, Container, Producer, Reference};
///
/// #[derive(Clone, Default)]
/// struct Mailer {
///   transport: String,
///   prefix: String,
/// }
///
/// impl_record!(Mailer { transport: String, prefix: String });
///
/// let container = Container::new();
/// container.register("transport", "sendmail", args![]).unwrap();
/// container
///   .register(
///     "mailer",
///     Producer::fields(Mailer::default()),
///     args![Reference::new("transport"), "[fibre] "],
///   )
///   .unwrap();
///
/// let mailer = container.resolve::<Mailer>("mailer").unwrap();
/// assert_eq!(mailer.transport, "sendmail");
/// assert_eq!(mailer.prefix, "[fibre] ");
/// ```
#[macro_export]
macro_rules! impl_record {
  ($record:ident { $($field:ident : $ty:ty),* $(,)? }) => {
    impl $crate::Record for $record {
      fn field_names(&self) -> &'static [&'static str] {
        &[$(::std::stringify!($field)),*]
      }

      fn set_field(&mut self, index: usize, value: $crate::Service) -> $crate::Result<()> {
        let setters: &[fn(&mut Self, $crate::Service) -> $crate::Result<()>] = &[
          $(|record: &mut Self, value: $crate::Service| {
            record.$field = $crate::record::field_value::<$ty>(&value, ::std::stringify!($field))?;
            ::std::result::Result::Ok(())
          }),*
        ];
        match setters.get(index) {
          ::std::option::Option::Some(setter) => setter(self, value),
          ::std::option::Option::None => ::std::result::Result::Err($crate::Error::FieldIndexOutOfRange {
            index,
            fields: setters.len(),
          }),
        }
      }

      fn clone_record(&self) -> ::std::boxed::Box<dyn $crate::Record> {
        ::std::boxed::Box::new(::std::clone::Clone::clone(self))
      }

      fn into_service(self: ::std::boxed::Box<Self>) -> $crate::Service {
        ::std::sync::Arc::new(*self)
      }
    }
  };
}

/// Resolves a named service of type `T` from the global container.
///
/// # Panics
///
/// Panics if the service cannot be resolved or is not a `T`. For a
/// non-panicking version, use `global().resolve::<T>(name)` directly.
///
/// # Examples
///
/// ```
/// use fibre_dic::{args, global, resolve};
///
/// global().register("greeting", "hello", args![]).unwrap();
///
/// let greeting = resolve!(&str, "greeting");
/// assert_eq!(*greeting, "hello");
/// ```
#[macro_export]
macro_rules! resolve {
  ($type:ty, $name:expr) => {
    $crate::resolve_from!($crate::global(), $type, $name)
  };
}

/// Resolves a named service of type `T` from the given container, panicking on
/// failure.
#[macro_export]
macro_rules! resolve_from {
  ($container:expr, $type:ty, $name:expr) => {{
    let name: &str = $name;
    $container.resolve::<$type>(name).unwrap_or_else(|err| {
      ::std::panic!(
        "Failed to resolve required service '{}' as {}: {}",
        name,
        ::std::any::type_name::<$type>(),
        err
      )
    })
  }};
}
