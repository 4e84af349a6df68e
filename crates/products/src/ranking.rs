//! Stock-level ranking.

use crate::product::Product;

/// Size of the "top products" report.
pub const TOP_TEN: usize = 10;

/// Highest-stocked products first, at most `n` of them.
///
/// Sorts the given records descending by `quantity_on_hand` and keeps
/// `min(n, len)` entries. Ties keep no particular relative order.
pub fn top_by_quantity(mut products: Vec<Product>, n: usize) -> Vec<Product> {
    products.sort_unstable_by(|a, b| b.quantity_on_hand.cmp(&a.quantity_on_hand));
    products.truncate(n);
    products
}
