//! YAML-driven container settings and parameters.

use crate::definition::Producer;
use crate::error::{Error, Result};
use serde::Deserialize;
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_BASE_NAME: &str = "fibre_dic";
const DEFAULT_CONFIG_EXTENSION: &str = "yaml";
const DEFAULT_MAX_DEPTH: usize = 64;

/// What happens to the stored arguments when a resolution call supplies
/// override arguments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideMode {
  /// Overrides replace the definition's arguments for this and every later call.
  #[default]
  Persistent,
  /// Overrides apply to the current call only.
  CallScoped,
}

/// Container settings, usually loaded from `fibre_dic.yaml`.
///
/// ```yaml
/// max_depth: 32
/// overrides: call_scoped
/// parameters:
///   db.name: app
///   logger.verbose: false
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContainerConfig {
  /// Upper bound on nested dependency resolution.
  #[serde(default = "default_max_depth")]
  pub max_depth: usize,
  #[serde(default)]
  pub overrides: OverrideMode,
  /// Registered as public, static parameter definitions.
  #[serde(default)]
  pub parameters: BTreeMap<String, Value>,
}

fn default_max_depth() -> usize {
  DEFAULT_MAX_DEPTH
}

impl Default for ContainerConfig {
  fn default() -> Self {
    Self {
      max_depth: DEFAULT_MAX_DEPTH,
      overrides: OverrideMode::default(),
      parameters: BTreeMap::new(),
    }
  }
}

impl ContainerConfig {
  pub fn from_yaml_str(yaml: &str) -> Result<Self> {
    let config: ContainerConfig = serde_yaml::from_str(yaml).map_err(|e| Error::ConfigParse(e.to_string()))?;
    config.validate()?;
    Ok(config)
  }

  pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    if !path.is_file() {
      return Err(Error::ConfigNotFound(path.display().to_string()));
    }
    let contents = fs::read_to_string(path)?;
    Self::from_yaml_str(&contents)
  }

  /// Finds `fibre_dic.<env>.yaml` or `fibre_dic.yaml` in the working directory.
  ///
  /// The environment comes from `environment_suffix`, then `FIBRE_ENV`, then `APP_ENV`.
  pub fn find_config_file(environment_suffix: Option<&str>) -> Result<PathBuf> {
    Self::find_config_file_in(Path::new("."), environment_suffix)
  }

  pub(crate) fn find_config_file_in(dir: &Path, environment_suffix: Option<&str>) -> Result<PathBuf> {
    let environment = environment_suffix
      .map(str::to_owned)
      .or_else(|| env::var("FIBRE_ENV").ok())
      .or_else(|| env::var("APP_ENV").ok());

    let mut candidates = Vec::new();
    if let Some(environment) = environment.filter(|e| !e.is_empty()) {
      candidates.push(format!(
        "{}.{}.{}",
        DEFAULT_CONFIG_BASE_NAME, environment, DEFAULT_CONFIG_EXTENSION
      ));
    }
    candidates.push(format!("{}.{}", DEFAULT_CONFIG_BASE_NAME, DEFAULT_CONFIG_EXTENSION));

    candidates
      .iter()
      .map(|file_name| dir.join(file_name))
      .find(|path| path.is_file())
      .ok_or_else(|| Error::ConfigNotFound(candidates.join(", ")))
  }

  fn validate(&self) -> Result<()> {
    if self.max_depth == 0 {
      return Err(Error::InvalidConfigValue {
        field: "max_depth".to_string(),
        message: "must be greater than zero".to_string(),
      });
    }
    Ok(())
  }
}

/// Maps a YAML scalar onto the closest Rust type; structured values stay YAML.
pub(crate) fn parameter_from_yaml(value: Value) -> Producer {
  match value {
    Value::Bool(flag) => Producer::parameter(flag),
    Value::Number(number) => {
      if let Some(signed) = number.as_i64() {
        Producer::parameter(signed)
      } else if let Some(unsigned) = number.as_u64() {
        Producer::parameter(unsigned)
      } else {
        Producer::parameter(number.as_f64().unwrap_or(f64::NAN))
      }
    }
    Value::String(text) => Producer::parameter(text),
    other => Producer::parameter(other),
  }
}
