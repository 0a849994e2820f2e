//! # Fibre DIC
//!
//! A named, argument-wiring service container for Rust.
//!
//! Producers (functions, records or plain values) are registered under a name
//! together with an argument list. Arguments are either literals or
//! [`Reference`]s to other entries; resolving a name resolves its references
//! first, then calls the function, populates the record or hands back the
//! value.
//!
//! ## Core Concepts
//!
//! - **Definition**: a producer, its [`Kind`], its arguments and two flags.
//!   *Public* entries can be requested directly, private ones only serve as
//!   dependencies. *Static* entries are built once and cached.
//! - **Reference**: a by-name placeholder resolved to another entry's first result.
//! - **Container**: the registry and cache. It is `Send + Sync`; a dependency
//!   cycle or an over-deep chain is reported as an error instead of recursing forever.
//! - **Global Container**: a process-wide instance reachable through [`global()`].
//!
//! ## Quick Start
//!
//! ```
//! use fibre_dic::{args, Container, Producer, Reference};
//!
//! let container = Container::new();
//! container.register("service.4", Producer::callable(|| 4), args![]).unwrap();
//! container
//!   .register("multiplicator", Producer::callable(|a: i32| a * 2), args![])
//!   .unwrap();
//!
//! let results = container
//!   .get_all("multiplicator", args![Reference::new("service.4")])
//!   .unwrap();
//! assert_eq!(results[0].downcast_ref::<i32>(), Some(&8));
//! ```

mod argument;
mod callable;
mod config;
mod container;
mod core;
mod definition;
mod error;
mod global;
mod inject;
mod macros;
pub mod record;
mod reference;

pub use argument::Argument;
pub use callable::{Callable, IntoCallable, Outputs};
pub use config::{ContainerConfig, OverrideMode};
pub use container::Container;
pub use crate::core::{downcast_cloned, Service};
pub use definition::{Definition, Kind, Producer};
pub use error::{Error, Result};
pub use global::global;
pub use inject::{Injectable, Injector};
pub use record::Record;
pub use reference::{is_a_reference, Reference};
