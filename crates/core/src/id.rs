//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a catalog product.
///
/// Positive once assigned by the store. Zero (and negative values) mean
/// "not assigned yet" and ask the store to pick the next identifier.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    /// First identifier handed out by an empty catalog.
    pub const FIRST: ProductId = ProductId(1);

    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// The unassigned identifier.
    pub const fn unassigned() -> Self {
        Self(0)
    }

    pub const fn get(self) -> i64 {
        self.0
    }

    pub const fn is_assigned(self) -> bool {
        self.0 > 0
    }

    /// Identifier following this one. Non-positive identifiers step to `FIRST`.
    ///
    /// `None` once `i64::MAX` is reached.
    pub fn next(self) -> Option<Self> {
        if self.0 < Self::FIRST.0 {
            Some(Self::FIRST)
        } else {
            self.0.checked_add(1).map(Self)
        }
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<ProductId> for i64 {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<i64>()
            .map_err(|e| DomainError::invalid_id(format!("ProductId: {e}")))?;
        Ok(Self(value))
    }
}
