use fibre_dic::{args, Container, Producer, Reference};
use std::sync::Arc;

// --- The sender objects ---
trait MailSender: Send + Sync {
  fn describe(&self) -> String;
}

struct Sendmail {
  transport: String,
}

impl MailSender for Sendmail {
  fn describe(&self) -> String {
    self.transport.clone()
  }
}

fn sendmail_new() -> Arc<dyn MailSender> {
  Arc::new(Sendmail {
    transport: "transport is sendmail".to_string(),
  })
}

// --- The mailer ---
struct Mailer {
  sender: Arc<dyn MailSender>,
  prefix: String,
}

impl Mailer {
  fn send(&self, message: &str) -> bool {
    println!("Sent `{}{}` using '{}'", self.prefix, message, self.sender.describe());
    true
  }
}

fn mailer_new(sender: Arc<dyn MailSender>, prefix: &'static str) -> Mailer {
  Mailer {
    sender,
    prefix: prefix.to_string(),
  }
}

fn main() {
  println!("Registering services");
  let container = Container::new();
  container
    .register("transport.sendmail", Producer::callable(sendmail_new), args![])
    .unwrap();
  container
    .register(
      "mailer",
      Producer::callable(mailer_new),
      args![Reference::new("transport.sendmail"), "[fibre] "],
    )
    .unwrap();

  println!("Getting Mailer");
  let mailer = container.resolve::<Mailer>("mailer").unwrap();

  println!("Calling...");
  assert!(mailer.send("liuggio"));
}
