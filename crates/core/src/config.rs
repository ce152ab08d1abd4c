//! Resolver configuration and external data files.
//!
//! By default the resolver uses the compiled-in tables. A config file can
//! point at replacement device and rule tables instead:
//!
//! ```yaml
//! config_version: "0.1.0"
//! catalog: data/devices.yaml
//! rules: data/rules.json
//! ```
//!
//! Relative paths are resolved against the directory holding the config file.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::DeviceCatalog;
use crate::error::ConfigError;
use crate::model::DeviceRecord;
use crate::resolver::Resolver;
use crate::rules::{RuleSet, ToolRule};

const CONFIG_VERSION: &str = "0.1.0";

fn default_config_version() -> String {
    CONFIG_VERSION.to_string()
}

/// Serialization format of a data file, picked from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Yaml,
}

impl DataFormat {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Config format version, not a data revision.
    #[serde(default = "default_config_version")]
    pub config_version: String,
    /// Replacement device catalog file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
    /// Replacement rule table file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<PathBuf>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self { config_version: default_config_version(), catalog: None, rules: None }
    }
}

impl ResolverConfig {
    /// Read a config file; relative data paths become relative to its directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut config: ResolverConfig = read_data(path)?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        config.catalog = config.catalog.map(|p| rebase(base, p));
        config.rules = config.rules.map(|p| rebase(base, p));
        Ok(config)
    }

    pub fn build_resolver(&self) -> Result<Resolver, ConfigError> {
        let catalog = match &self.catalog {
            Some(path) => load_catalog(path)?,
            None => DeviceCatalog::builtin(),
        };
        let rules = match &self.rules {
            Some(path) => load_rules(path)?,
            None => RuleSet::builtin(),
        };
        info!(devices = catalog.len(), rules = rules.len(), "resolver tables loaded");
        Ok(Resolver::new(catalog, rules))
    }

    /// Human-readable origin of the catalog table.
    pub fn catalog_source(&self) -> String {
        describe_source(self.catalog.as_deref())
    }

    /// Human-readable origin of the rule table.
    pub fn rules_source(&self) -> String {
        describe_source(self.rules.as_deref())
    }
}

fn describe_source(path: Option<&Path>) -> String {
    path.map_or_else(|| "built-in".to_string(), |p| p.display().to_string())
}

fn rebase(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

/// Load and validate a device catalog (a list of device records).
pub fn load_catalog(path: impl AsRef<Path>) -> Result<DeviceCatalog, ConfigError> {
    let records: Vec<DeviceRecord> = read_data(path.as_ref())?;
    Ok(DeviceCatalog::new(records)?)
}

/// Load and validate a rule table (a list of tool rules, in display order).
pub fn load_rules(path: impl AsRef<Path>) -> Result<RuleSet, ConfigError> {
    let rules: Vec<ToolRule> = read_data(path.as_ref())?;
    Ok(RuleSet::new(rules)?)
}

fn read_data<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let format = DataFormat::from_path(path)?;
    let text = std::fs::read_to_string(path)
        .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
    match format {
        DataFormat::Json => serde_json::from_str(&text)
            .map_err(|source| ConfigError::Json { path: path.to_path_buf(), source }),
        DataFormat::Yaml => serde_yaml::from_str(&text)
            .map_err(|source| ConfigError::Yaml { path: path.to_path_buf(), source }),
    }
}
