//! The main `Container` struct: registration and the resolution engine.

use crate::argument::Argument;
use crate::config::{parameter_from_yaml, ContainerConfig, OverrideMode};
use crate::core::{ResolutionGuard, Service};
use crate::definition::{Definition, Producer};
use crate::error::{Error, Result};
use crate::inject::{Injectable, Injector};
use crate::record;
use dashmap::DashMap;
use once_cell::sync::OnceCell;
use std::any::{type_name, Any};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, trace};

static NEXT_CONTAINER_ID: AtomicU64 = AtomicU64::new(1);

/// A registry of named producers that resolves them, and their references,
/// into services.
///
/// The container is thread-safe: registration and resolution take `&self`,
/// and no internal lock is held while a producer runs or a dependency is
/// resolved. A static definition resolved without override arguments is built
/// at most once, even when several threads ask for it concurrently.
pub struct Container {
  id: u64,
  max_depth: usize,
  overrides: OverrideMode,
  definitions: DashMap<String, Definition>,
  services: DashMap<String, Arc<OnceCell<Vec<Service>>>>,
}

impl Default for Container {
  fn default() -> Self {
    Self::new()
  }
}

impl Container {
  /// Creates a new, empty `Container` with default settings.
  pub fn new() -> Self {
    Self::with_config(ContainerConfig::default())
  }

  /// Creates a container with the given settings, registering every configured
  /// parameter as a public, static definition.
  pub fn with_config(config: ContainerConfig) -> Self {
    let container = Self {
      id: NEXT_CONTAINER_ID.fetch_add(1, Ordering::Relaxed),
      max_depth: config.max_depth,
      overrides: config.overrides,
      definitions: DashMap::new(),
      services: DashMap::new(),
    };
    for (name, value) in config.parameters {
      container.store(name, Definition::new(parameter_from_yaml(value), true, true, Vec::new()));
    }
    container
  }

  pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self> {
    Ok(Self::with_config(ContainerConfig::from_file(path)?))
  }

  // --- Registration ---

  /// Registers `producer` under `name` as a public, static definition.
  pub fn register<P, I>(&self, name: impl Into<String>, producer: P, args: I) -> Result<()>
  where
    P: Into<Producer>,
    I: IntoIterator<Item = Argument>,
  {
    self.set_definition(name, Definition::new(producer, true, true, args))
  }

  /// Stores `definition` under `name`, replacing any previous definition and
  /// its cached results.
  pub fn set_definition(&self, name: impl Into<String>, definition: Definition) -> Result<()> {
    self.store(name.into(), definition);
    Ok(())
  }

  fn store(&self, name: String, definition: Definition) {
    debug!(
      service = %name,
      kind = %definition.kind(),
      public = definition.is_public(),
      is_static = definition.is_static(),
      "registering definition"
    );
    self.definitions.insert(name.clone(), definition);
    self.services.remove(&name);
  }

  /// Returns a copy of the definition stored under `name`.
  pub fn get_definition(&self, name: &str) -> Result<Definition> {
    self
      .definitions
      .get(name)
      .map(|entry| entry.value().clone())
      .ok_or_else(|| Error::ServiceNotFound(name.to_owned()))
  }

  /// Applies `update` to a copy of the stored definition and stores the result.
  /// Cached results are kept.
  ///
  /// No lock is held while `update` runs, so it may call back into the container.
  pub fn update_definition<F>(&self, name: &str, update: F) -> Result<()>
  where
    F: FnOnce(&mut Definition),
  {
    let mut definition = self.get_definition(name)?;
    update(&mut definition);
    self.definitions.insert(name.to_owned(), definition);
    Ok(())
  }

  pub fn contains(&self, name: &str) -> bool {
    self.definitions.contains_key(name)
  }

  pub fn len(&self) -> usize {
    self.definitions.len()
  }

  pub fn is_empty(&self) -> bool {
    self.definitions.is_empty()
  }

  // --- Resolution ---

  /// Resolves `name` and returns every result its producer yielded.
  ///
  /// Non-empty `overrides` replace the definition's arguments (for this call
  /// only or for good, depending on [`OverrideMode`]) and bypass the cache.
  pub fn get_all<I>(&self, name: &str, overrides: I) -> Result<Vec<Service>>
  where
    I: IntoIterator<Item = Argument>,
  {
    let public = self
      .definitions
      .get(name)
      .map(|entry| entry.is_public())
      .ok_or_else(|| Error::ServiceNotFound(name.to_owned()))?;
    if !public {
      return Err(Error::ServiceNotPublic(name.to_owned()));
    }

    self.resolve_definition(name, overrides.into_iter().collect())
  }

  /// Returns the first result of `name`, or `None` if it yielded nothing or failed.
  ///
  /// Errors are only logged; use [`get_all`](Self::get_all) to see them.
  pub fn get<I>(&self, name: &str, overrides: I) -> Option<Service>
  where
    I: IntoIterator<Item = Argument>,
  {
    match self.get_all(name, overrides) {
      Ok(services) => services.into_iter().next(),
      Err(err) => {
        debug!(service = %name, error = %err, "resolution failed");
        None
      }
    }
  }

  /// Resolves `name` and downcasts its first result to `T`.
  pub fn resolve<T: Any + Send + Sync>(&self, name: &str) -> Result<Arc<T>> {
    let first = self
      .get_all(name, Vec::new())?
      .into_iter()
      .next()
      .ok_or_else(|| Error::NoResult(name.to_owned()))?;
    first.downcast::<T>().map_err(|_| Error::ServiceTypeMismatch {
      name: name.to_owned(),
      expected: type_name::<T>(),
    })
  }

  /// Fills the fields `target` binds with their services' first results.
  pub fn inject(&self, target: &mut dyn Injectable) -> Result<()> {
    let mut injector = Injector::new(self);
    target.inject_fields(&mut injector)?;
    trace!(fields = injector.bound(), "injected fields");
    Ok(())
  }

  /// Dependency-side resolution: no visibility check, first result only.
  pub(crate) fn resolve_first(&self, name: &str) -> Result<Service> {
    self
      .resolve_definition(name, Vec::new())?
      .into_iter()
      .next()
      .ok_or_else(|| Error::NoResult(name.to_owned()))
  }

  fn resolve_definition(&self, name: &str, overrides: Vec<Argument>) -> Result<Vec<Service>> {
    let _guard = ResolutionGuard::enter(self.id, name, self.max_depth)?;

    if overrides.is_empty() {
      let definition = self.get_definition(name)?;
      if definition.is_static() {
        let cell = Arc::clone(self.services.entry(name.to_owned()).or_default().value());
        if cell.get().is_some() {
          trace!(service = %name, "cache hit");
        }
        return cell.get_or_try_init(|| self.build(&definition)).cloned();
      }

      let services = self.build(&definition)?;
      self
        .services
        .insert(name.to_owned(), Arc::new(OnceCell::with_value(services.clone())));
      return Ok(services);
    }

    let mut definition = self.get_definition(name)?;
    definition.replace_args(overrides);
    let services = self.build(&definition)?;

    // Persistent overrides are only kept once they have built successfully.
    if self.overrides == OverrideMode::Persistent {
      if let Some(mut entry) = self.definitions.get_mut(name) {
        debug!(service = %name, args = definition.args().len(), "replacing stored arguments");
        entry.replace_args(definition.args().to_vec());
      }
    }
    Ok(services)
  }

  fn build(&self, definition: &Definition) -> Result<Vec<Service>> {
    let dependencies = self.resolve_arguments(definition.args())?;

    match definition.value() {
      Producer::Callable(callable) => {
        let expected = callable.arity();
        if dependencies.len() != expected {
          return Err(Error::ParamsNotAdapted {
            given: dependencies.len(),
            expected,
          });
        }
        callable.call(dependencies)
      }
      Producer::Fields(template) => record::populate(template.as_ref(), dependencies),
      Producer::Parameter(value) => Ok(vec![Arc::clone(value)]),
      Producer::Invalid(_) => Err(Error::KindIsNotValid(definition.kind())),
    }
  }

  fn resolve_arguments(&self, args: &[Argument]) -> Result<Vec<Service>> {
    args
      .iter()
      .map(|argument| match argument {
        Argument::Reference(reference) => self.resolve_first(reference.reference()),
        Argument::Literal(value) => Ok(Arc::clone(value)),
      })
      .collect()
  }
}
