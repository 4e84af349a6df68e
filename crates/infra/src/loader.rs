//! Catalog source file loading.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use catalog_products::Product;

/// Startup failure: the catalog cannot be served without its source file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file [{}] does not exist", path.display())]
    Missing { path: PathBuf },

    #[error("failed to read [{}]: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse [{}]: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Missing { path }
            | LoadError::Io { path, .. }
            | LoadError::Parse { path, .. } => path.as_path(),
        }
    }
}

/// Read every record from a JSON array file, in file order (duplicates kept).
pub fn load_products(path: impl AsRef<Path>) -> Result<Vec<Product>, LoadError> {
    let path = path.as_ref();

    let bytes = std::fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::Missing {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    serde_json::from_slice(&bytes).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
