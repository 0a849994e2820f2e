use fibre_dic::{args, impl_record, Container, Producer, Reference};

fn logger_new(verbose: bool) -> String {
  format!("the verbosity is: {verbose}.")
}

#[derive(Clone, Default)]
struct TestStruct {
  nerd: String,
  database_name: &'static str,
  logger: String,
}

impl_record!(TestStruct {
  nerd: String,
  database_name: &'static str,
  logger: String,
});

fn main() {
  let container = Container::new();

  println!("Registering parameters");
  container.register("dbName", "logger", args![]).unwrap();
  container.register("logger.verbosity", false, args![]).unwrap();

  println!("Registering services");
  container
    .register("logger", Producer::callable(logger_new), args![Reference::new("logger.verbosity")])
    .unwrap();
  container
    .register(
      "my_struct",
      Producer::fields(TestStruct::default()),
      args![
        String::from("liuggio"),
        Reference::new("dbName"),
        Reference::new("logger")
      ],
    )
    .unwrap();

  let test = container.resolve::<TestStruct>("my_struct").unwrap();
  println!(
    "Nerd name: `{}`, database: `{}`, logger: `{}`",
    test.nerd, test.database_name, test.logger
  );
}
