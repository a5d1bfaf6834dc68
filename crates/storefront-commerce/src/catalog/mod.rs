//! Product catalog module.
//!
//! Contains the product and category types, the mock data source, and
//! the load-once catalog store with its pure query operations.

mod mock;
mod product;
mod source;
mod store;

pub use mock::build_catalog;
pub use product::{Category, Product};
pub use source::{CatalogSource, MockCatalogSource, DEFAULT_FETCH_LATENCY};
pub use store::{CatalogStore, SortMode};
