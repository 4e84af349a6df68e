//! Products domain module.
//!
//! Business rules for the product catalog, implemented purely as deterministic
//! domain logic (no IO, no locking, no storage).

pub mod filter;
pub mod product;
pub mod ranking;

pub use filter::ProductReportFilter;
pub use product::Product;
pub use ranking::{TOP_TEN, top_by_quantity};
