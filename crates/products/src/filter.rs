//! Report filter for catalog searches.

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Search criteria for a product report.
///
/// A record matches when ANY field is a case-insensitive substring of the
/// corresponding record field. An empty field is a substring of everything,
/// so it always matches: a filter with an empty field returns every product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductReportFilter {
    #[serde(rename = "manufacturer", alias = "manufacturerFilter")]
    pub manufacturer_filter: String,
    #[serde(rename = "sku", alias = "skuFilter")]
    pub sku_filter: String,
    #[serde(rename = "productName", alias = "nameFilter")]
    pub name_filter: String,
}

impl ProductReportFilter {
    pub fn new(
        manufacturer_filter: impl Into<String>,
        sku_filter: impl Into<String>,
        name_filter: impl Into<String>,
    ) -> Self {
        Self {
            manufacturer_filter: manufacturer_filter.into(),
            sku_filter: sku_filter.into(),
            name_filter: name_filter.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.manufacturer_filter.is_empty()
            && self.sku_filter.is_empty()
            && self.name_filter.is_empty()
    }

    pub fn matches(&self, product: &Product) -> bool {
        contains_ignore_case(&product.manufacturer, &self.manufacturer_filter)
            || contains_ignore_case(&product.sku, &self.sku_filter)
            || contains_ignore_case(&product.product_name, &self.name_filter)
    }

    /// Keep the products this filter matches, preserving input order.
    pub fn apply(&self, products: impl IntoIterator<Item = Product>) -> Vec<Product> {
        products.into_iter().filter(|p| self.matches(p)).collect()
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
