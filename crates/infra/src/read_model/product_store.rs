use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use catalog_core::{DomainError, DomainResult, ProductId, index_by_id};
use catalog_products::Product;

use crate::loader::{LoadError, load_products};

/// Keyed product storage.
///
/// Every method is a single lock acquisition. Returned records are copies and
/// never alias the stored ones.
pub trait ProductRepository: Send + Sync {
    fn get(&self, id: ProductId) -> Option<Product>;

    /// All records, in no particular order.
    fn list(&self) -> Vec<Product>;

    /// Delete a record. Returns whether one was present.
    fn remove(&self, id: ProductId) -> bool;

    /// Assign the next identifier to `product` and store it.
    ///
    /// Fails without touching the store when no identifier is left.
    fn insert(&self, product: Product) -> DomainResult<ProductId>;

    /// Replace an existing record wholesale.
    fn replace(&self, product: Product) -> DomainResult<ProductId>;

    /// Identifier the next insert would receive.
    fn next_id(&self) -> DomainResult<ProductId>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S> ProductRepository for Arc<S>
where
    S: ProductRepository + ?Sized,
{
    fn get(&self, id: ProductId) -> Option<Product> {
        (**self).get(id)
    }

    fn list(&self) -> Vec<Product> {
        (**self).list()
    }

    fn remove(&self, id: ProductId) -> bool {
        (**self).remove(id)
    }

    fn insert(&self, product: Product) -> DomainResult<ProductId> {
        (**self).insert(product)
    }

    fn replace(&self, product: Product) -> DomainResult<ProductId> {
        (**self).replace(product)
    }

    fn next_id(&self) -> DomainResult<ProductId> {
        (**self).next_id()
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

/// In-memory product store guarded by a single reader/writer lock.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    inner: RwLock<HashMap<ProductId, Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store from records. Later duplicates overwrite earlier ones.
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            inner: RwLock::new(index_by_id(products)),
        }
    }

    /// Load the catalog source file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        tracing::info!(path = %path.display(), "loading products...");

        let store = Self::from_products(load_products(path)?);

        tracing::info!(
            path = %path.display(),
            count = store.len(),
            "{} products loaded",
            store.len()
        );
        Ok(store)
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    // Every write is a single map operation, so a panic in another holder
    // cannot leave the map half-updated and the data stays usable.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<ProductId, Product>> {
        self.inner.read().unwrap_or_else(|poisoned| {
            tracing::warn!("product store lock poisoned; recovering");
            PoisonError::into_inner(poisoned)
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<ProductId, Product>> {
        self.inner.write().unwrap_or_else(|poisoned| {
            tracing::warn!("product store lock poisoned; recovering");
            PoisonError::into_inner(poisoned)
        })
    }

    fn next_id_in(map: &HashMap<ProductId, Product>) -> DomainResult<ProductId> {
        match map.keys().max().copied() {
            None => Ok(ProductId::FIRST),
            Some(last) => last
                .next()
                .ok_or_else(|| DomainError::id_space_exhausted(last)),
        }
    }
}

impl ProductRepository for InMemoryProductStore {
    fn get(&self, id: ProductId) -> Option<Product> {
        self.read().get(&id).cloned()
    }

    fn list(&self) -> Vec<Product> {
        let map = self.read();
        map.values().cloned().collect()
    }

    fn remove(&self, id: ProductId) -> bool {
        let removed = self.write().remove(&id).is_some();
        tracing::debug!(product_id = %id, removed, "remove product");
        removed
    }

    fn insert(&self, mut product: Product) -> DomainResult<ProductId> {
        let mut map = self.write();
        let id = match Self::next_id_in(&map) {
            Ok(id) => id,
            Err(err) => {
                drop(map);
                tracing::warn!(error = %err, "insert rejected");
                return Err(err);
            }
        };
        product.product_id = id;
        map.insert(id, product);
        drop(map);

        tracing::debug!(product_id = %id, "inserted product");
        Ok(id)
    }

    fn replace(&self, product: Product) -> DomainResult<ProductId> {
        let id = product.product_id;
        let mut map = self.write();
        if !map.contains_key(&id) {
            drop(map);
            tracing::debug!(product_id = %id, "update of unknown product rejected");
            return Err(DomainError::not_found(id));
        }
        map.insert(id, product);
        drop(map);

        tracing::debug!(product_id = %id, "replaced product");
        Ok(id)
    }

    fn next_id(&self) -> DomainResult<ProductId> {
        Self::next_id_in(&self.read())
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}
