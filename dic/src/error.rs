use crate::definition::Kind;
use thiserror::Error;

/// The error type for every fallible `fibre_dic` operation.
#[derive(Debug, Error)]
pub enum Error {
  #[error("Service {0} not found")]
  ServiceNotFound(String),

  #[error("Service {0} is not public")]
  ServiceNotPublic(String),

  #[error("The number of params is not adapted. Given:{given}, Expected:{expected}")]
  ParamsNotAdapted { given: usize, expected: usize },

  #[error("Kind {0} is not a valid kind")]
  KindIsNotValid(Kind),

  /// Raised by `is_a_reference`; resolution treats it as "pass the literal through".
  #[error("Object is not a Reference")]
  ObjectIsNotAReference,

  #[error("Cyclic dependency detected: {}", .chain.join(" -> "))]
  CyclicDependency { chain: Vec<String> },

  #[error("Resolution of service {name} exceeded the maximum depth of {limit}")]
  MaxDepthExceeded { name: String, limit: usize },

  #[error("Service {0} produced no result")]
  NoResult(String),

  #[error("Argument {position} expected a value of type {expected}")]
  ArgumentTypeMismatch {
    position: usize,
    expected: &'static str,
  },

  #[error("Field '{field}' expected a value of type {expected}")]
  FieldTypeMismatch {
    field: &'static str,
    expected: &'static str,
  },

  #[error("Field index {index} is out of range for a record with {fields} settable fields")]
  FieldIndexOutOfRange { index: usize, fields: usize },

  #[error("Service {name} is not of type {expected}")]
  ServiceTypeMismatch {
    name: String,
    expected: &'static str,
  },

  #[error("Configuration file not found: {0}")]
  ConfigNotFound(String),

  #[error("Failed to read configuration file: {0}")]
  ConfigRead(#[from] std::io::Error),

  #[error("Failed to parse configuration: {0}")]
  ConfigParse(String),

  #[error("Invalid configuration value for '{field}': {message}")]
  InvalidConfigValue { field: String, message: String },
}

/// A specialized `Result` type for `fibre_dic` operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
