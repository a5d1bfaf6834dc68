//! Browse view: the category / search / sort state applied to a catalog.

use std::sync::Arc;
use storefront_commerce::catalog::{CatalogStore, Product, SortMode};

/// The browse state a presentation layer holds: active category, search
/// query, and sort mode.
///
/// `apply` composes them in the fixed order category filter, then
/// search, then sort. A non-empty query replaces the category filter
/// and searches the full catalog; search and category are mutually
/// exclusive, never combined.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseView {
    category: String,
    query: String,
    sort: SortMode,
}

impl Default for BrowseView {
    fn default() -> Self {
        Self {
            category: "all".to_string(),
            query: String::new(),
            sort: SortMode::Default,
        }
    }
}

impl BrowseView {
    /// A fresh view: all categories, no query, input order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Active category. `"all"` selects everything.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Active search query, trimmed.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Active sort mode.
    pub fn sort(&self) -> SortMode {
        self.sort
    }

    /// Set the active category.
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    /// Set the search query. Surrounding whitespace is trimmed, so a
    /// blank input clears the search.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.trim().to_string();
    }

    /// Set the sort mode.
    pub fn set_sort(&mut self, sort: SortMode) {
        self.sort = sort;
    }

    /// Produce the product view for the current state.
    pub fn apply(&self, catalog: &CatalogStore) -> Vec<Arc<Product>> {
        let mut products = catalog.filter_by_category(&self.category);

        if !self.query.is_empty() {
            products = catalog.search(&self.query);
        }

        catalog.sort(&products, self.sort)
    }
}
