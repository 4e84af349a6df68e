//! Catalog operations over a product repository.

use std::sync::Arc;

use catalog_core::{DomainResult, ProductId};
use catalog_products::{Product, ProductReportFilter, TOP_TEN, top_by_quantity};

use crate::config::CatalogConfig;
use crate::loader::LoadError;
use crate::read_model::{InMemoryProductStore, ProductRepository};

/// Read and write operations callers (HTTP handlers, CLI) use on the catalog.
///
/// Each call takes the store lock on its own; a `get_product` followed by an
/// `add_or_update_product` is not atomic as a pair.
#[derive(Debug, Clone)]
pub struct ProductCatalog<S = Arc<InMemoryProductStore>>
where
    S: ProductRepository,
{
    store: S,
}

impl ProductCatalog {
    /// Load the configured catalog file into a shared in-memory store.
    pub fn open(config: &CatalogConfig) -> Result<Self, LoadError> {
        let store = InMemoryProductStore::load(config.data_path())?;
        Ok(Self::new(store.arc()))
    }
}

impl<S> ProductCatalog<S>
where
    S: ProductRepository,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn get_product(&self, id: ProductId) -> Option<Product> {
        self.store.get(id)
    }

    /// Removing an unknown id is a no-op.
    pub fn remove_product(&self, id: ProductId) {
        self.store.remove(id);
    }

    pub fn list_products(&self) -> Vec<Product> {
        self.store.list()
    }

    pub fn top_ten_products(&self) -> Vec<Product> {
        self.top_products(TOP_TEN)
    }

    pub fn top_products(&self, n: usize) -> Vec<Product> {
        top_by_quantity(self.store.list(), n)
    }

    pub fn search_products(&self, filter: &ProductReportFilter) -> Vec<Product> {
        filter.apply(self.store.list())
    }

    /// Update when `product` carries a positive id, insert otherwise.
    ///
    /// Updates replace the stored record wholesale and fail with
    /// `DomainError::NotFound` when the id is unknown. Inserts get the next id,
    /// or `DomainError::IdSpaceExhausted` when the largest id is `i64::MAX`.
    pub fn add_or_update_product(&self, product: Product) -> DomainResult<ProductId> {
        if product.is_identified() {
            self.store.replace(product)
        } else {
            self.store.insert(product)
        }
    }

    pub fn next_id(&self) -> DomainResult<ProductId> {
        self.store.next_id()
    }

    pub fn count(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::DomainError;

    fn catalog_of(products: Vec<Product>) -> ProductCatalog<InMemoryProductStore> {
        ProductCatalog::new(InMemoryProductStore::from_products(products))
    }

    fn sized_catalog(size: usize) -> ProductCatalog<InMemoryProductStore> {
        catalog_of(
            (0..size)
                .map(|i| {
                    Product::new(format!("SKU-{i}"), format!("Item {i}"), "Acme", (i * 13 % 29) as i64)
                        .with_id(i as i64 + 1)
                })
                .collect(),
        )
    }

    #[test]
    fn insert_then_get_returns_equal_record() {
        let catalog = catalog_of(vec![]);
        let product = Product::new("AC-1", "Anvil", "ACME", 12);

        let id = catalog.add_or_update_product(product.clone()).unwrap();
        assert_eq!(catalog.get_product(id), Some(product.with_id(id.get())));
    }

    #[test]
    fn first_insert_into_empty_catalog_gets_id_one() {
        let catalog = catalog_of(vec![]);
        assert_eq!(catalog.next_id(), Ok(ProductId::new(1)));
        let id = catalog.add_or_update_product(Product::new("A", "A", "A", 0)).unwrap();
        assert_eq!(id, ProductId::new(1));
    }

    #[test]
    fn update_of_unknown_id_is_not_found_and_changes_nothing() {
        let catalog = sized_catalog(3);
        let before = {
            let mut all = catalog.list_products();
            all.sort_by_key(|p| p.product_id);
            all
        };

        let err = catalog
            .add_or_update_product(Product::new("Z", "Z", "Z", 1).with_id(77))
            .unwrap_err();
        assert_eq!(err, DomainError::NotFound(ProductId::new(77)));

        let mut after = catalog.list_products();
        after.sort_by_key(|p| p.product_id);
        assert_eq!(before, after);
    }

    #[test]
    fn update_replaces_wholesale() {
        let catalog = sized_catalog(2);
        let replacement = Product::new("", "Renamed", "", 0).with_id(2);

        assert_eq!(catalog.add_or_update_product(replacement.clone()), Ok(ProductId::new(2)));
        assert_eq!(catalog.get_product(ProductId::new(2)), Some(replacement));
        assert_eq!(catalog.count(), 2);
    }

    #[test]
    fn insert_after_max_id_fails_and_leaves_catalog_unchanged() {
        let catalog = catalog_of(vec![Product::new("A", "A", "A", 1).with_id(i64::MAX)]);

        let err = catalog
            .add_or_update_product(Product::new("B", "B", "B", 1))
            .unwrap_err();
        assert_eq!(err, DomainError::IdSpaceExhausted(ProductId::new(i64::MAX)));
        assert_eq!(catalog.count(), 1);

        // Updates of the existing record still work.
        let renamed = Product::new("A", "Renamed", "A", 2).with_id(i64::MAX);
        assert_eq!(
            catalog.add_or_update_product(renamed.clone()),
            Ok(ProductId::new(i64::MAX))
        );
        assert_eq!(catalog.get_product(ProductId::new(i64::MAX)), Some(renamed));
    }

    #[test]
    fn negative_id_is_treated_as_insert() {
        let catalog = sized_catalog(2);
        let id = catalog
            .add_or_update_product(Product::new("N", "N", "N", 0).with_id(-5))
            .unwrap();
        assert_eq!(id, ProductId::new(3));
    }

    #[test]
    fn remove_then_get_is_absent() {
        let catalog = sized_catalog(3);
        for raw in [1, 3, 99, 0, -1] {
            let id = ProductId::new(raw);
            catalog.remove_product(id);
            assert!(catalog.get_product(id).is_none());
        }
        assert_eq!(catalog.count(), 1);
    }

    #[test]
    fn top_ten_length_and_order() {
        for size in [0, 1, 9, 10, 50] {
            let top = sized_catalog(size).top_ten_products();
            assert_eq!(top.len(), size.min(10), "catalog size {size}");
            assert!(
                top.windows(2).all(|w| w[0].quantity_on_hand >= w[1].quantity_on_hand),
                "top ten not descending for catalog size {size}"
            );
        }
    }

    #[test]
    fn search_with_empty_filter_returns_everything() {
        let catalog = sized_catalog(7);
        let found = catalog.search_products(&ProductReportFilter::default());
        assert_eq!(found.len(), 7);
    }

    #[test]
    fn search_by_manufacturer_is_case_insensitive() {
        let catalog = catalog_of(vec![
            Product::new("1", "Anvil", "ACME", 1).with_id(1),
            Product::new("2", "Skates", "Acme Industries", 1).with_id(2),
            Product::new("3", "Glue", "Globex", 1).with_id(3),
            Product::new("4", "Jet pack", "acmeish", 1).with_id(4),
        ]);
        let filter = ProductReportFilter::new("acme", "\u{0}", "\u{0}");

        let mut ids: Vec<i64> = catalog
            .search_products(&filter)
            .iter()
            .map(|p| p.product_id.get())
            .collect();
        ids.sort();
        assert_eq!(ids, vec![1, 2, 4]);

        let manufacturer_only = ProductReportFilter {
            manufacturer_filter: "acme".to_string(),
            ..Default::default()
        };
        assert_eq!(catalog.search_products(&manufacturer_only).len(), 4);
    }
}
