//! Domain error model.

use thiserror::Error;

use crate::id::ProductId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. Loading and
/// configuration failures belong to the infrastructure layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An update referenced a product that is not in the catalog.
    #[error("product id [{0}] doesn't exist")]
    NotFound(ProductId),

    /// No identifier is left above the largest one in the catalog.
    #[error("no product id available after [{0}]")]
    IdSpaceExhausted(ProductId),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn not_found(id: ProductId) -> Self {
        Self::NotFound(id)
    }

    pub fn id_space_exhausted(last: ProductId) -> Self {
        Self::IdSpaceExhausted(last)
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// True when the error means "the referenced record is absent".
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
