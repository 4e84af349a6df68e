//! Configuration loading and representation.

use std::env::VarError;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Environment variable naming the catalog source file.
pub const DATA_PATH_ENV: &str = "CATALOG_DATA_PATH";

/// Catalog file read when nothing else is configured (relative to the working directory).
pub const DEFAULT_DATA_PATH: &str = "products.json";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is set but empty")]
    Empty { var: &'static str },

    #[error("{var} is not valid unicode")]
    NotUnicode { var: &'static str },
}

/// Runtime configuration of the catalog store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub data_path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
        }
    }
}

impl CatalogConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(DATA_PATH_ENV) {
            Ok(value) => Self::from_lookup(|_| Some(value.clone())),
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode { var: DATA_PATH_ENV }),
        }
    }

    /// Build configuration from an arbitrary key lookup (tests, embedding).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_path = match lookup(DATA_PATH_ENV) {
            None => PathBuf::from(DEFAULT_DATA_PATH),
            Some(value) if value.trim().is_empty() => {
                return Err(ConfigError::Empty { var: DATA_PATH_ENV });
            }
            Some(value) => PathBuf::from(value),
        };
        Ok(Self { data_path })
    }

    pub fn with_data_path(mut self, data_path: impl Into<PathBuf>) -> Self {
        self.data_path = data_path.into();
        self
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_products_json() {
        let config = CatalogConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.data_path(), Path::new("products.json"));
        assert_eq!(config, CatalogConfig::default());
    }

    #[test]
    fn reads_data_path_from_lookup() {
        let config = CatalogConfig::from_lookup(|key| {
            (key == DATA_PATH_ENV).then(|| "/srv/catalog/items.json".to_string())
        })
        .unwrap();
        assert_eq!(config.data_path(), Path::new("/srv/catalog/items.json"));
    }

    #[test]
    fn rejects_blank_data_path() {
        let err = CatalogConfig::from_lookup(|_| Some("  ".to_string())).unwrap_err();
        assert_eq!(err, ConfigError::Empty { var: DATA_PATH_ENV });
    }

    #[test]
    fn explicit_path_overrides() {
        let config = CatalogConfig::default().with_data_path("other.json");
        assert_eq!(config.data_path(), Path::new("other.json"));
    }
}
