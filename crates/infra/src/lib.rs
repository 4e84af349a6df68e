//! Infrastructure layer: catalog loading, in-memory storage, config.

pub mod catalog;
pub mod config;
pub mod loader;
pub mod read_model;


pub use catalog::ProductCatalog;
pub use config::{CatalogConfig, ConfigError};
pub use loader::{LoadError, load_products};
pub use read_model::{InMemoryProductStore, ProductRepository};
