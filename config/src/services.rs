//! TOML file listing AI service configurations.
//!
//! ```toml
//! [[services]]
//! id = 7
//! name = "script-writer"
//! settings = '{"max_concurrency": 2}'
//! ```
//!
//! `settings` is kept as the raw blob; it is resolved per call by
//! [`crate::parse_service_settings`], so a bad blob only affects its own service.

use aigate_types::ConfigId;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("duplicate service id {id} in {}", path.display())]
    DuplicateId { path: PathBuf, id: ConfigId },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::DuplicateId { path, .. } => path.as_path(),
        }
    }
}

/// One AI service configuration entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceConfig {
    pub id: ConfigId,
    pub name: String,
    /// Raw settings blob; empty means "no settings".
    #[serde(default)]
    pub settings: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ServiceConfigFile {
    #[serde(default)]
    pub services: Vec<ServiceConfig>,
}

/// Load and validate the service list at `path`.
pub fn load_service_configs(path: impl AsRef<Path>) -> Result<Vec<ServiceConfig>, ConfigError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_service_configs(&text, path)
}

/// Parse service configuration text. `path` is only used for error context.
pub fn parse_service_configs(text: &str, path: &Path) -> Result<Vec<ServiceConfig>, ConfigError> {
    let file: ServiceConfigFile = toml::from_str(text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let mut seen = HashSet::with_capacity(file.services.len());
    for service in &file.services {
        if !seen.insert(service.id) {
            return Err(ConfigError::DuplicateId {
                path: path.to_path_buf(),
                id: service.id,
            });
        }
    }

    tracing::debug!(
        path = %path.display(),
        services = file.services.len(),
        "Loaded AI service configurations"
    );
    Ok(file.services)
}
