//! Catalog store: load-once product list with pure query operations.

use crate::catalog::product::{Category, Product};
use crate::catalog::source::CatalogSource;
use crate::error::StoreError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::sync::Arc;

/// Sort modes for product views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortMode {
    /// Keep the input order.
    #[default]
    Default,
    /// Price, low to high.
    PriceLowHigh,
    /// Price, high to low.
    PriceHighLow,
    /// Rating, high to low.
    Rating,
}

impl SortMode {
    /// Parse a sort mode. Anything unrecognized (including `"default"`)
    /// keeps the input order.
    pub fn parse(s: &str) -> Self {
        match s {
            "price-low" => SortMode::PriceLowHigh,
            "price-high" => SortMode::PriceHighLow,
            "rating" => SortMode::Rating,
            _ => SortMode::Default,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Default => "default",
            SortMode::PriceLowHigh => "price-low",
            SortMode::PriceHighLow => "price-high",
            SortMode::Rating => "rating",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortMode::Default => "Featured",
            SortMode::PriceLowHigh => "Price: Low to High",
            SortMode::PriceHighLow => "Price: High to Low",
            SortMode::Rating => "Highest Rated",
        }
    }
}

/// The read-only product catalog for one session.
///
/// `load` must complete before any query call; that ordering is the
/// caller's contract, not enforced here. Every query is pure: the
/// catalog is never mutated after load.
#[derive(Debug, Default)]
pub struct CatalogStore {
    products: Vec<Arc<Product>>,
    categories: Vec<Category>,
    loaded: bool,
}

impl CatalogStore {
    /// Create an empty, not-yet-loaded store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the catalog from a source.
    ///
    /// Intended to be called at most once per session. Populates the
    /// product list and the distinct category list in first-appearance
    /// order.
    pub async fn load(&mut self, source: &dyn CatalogSource) -> Result<&[Arc<Product>], StoreError> {
        let products = source.fetch().await?;

        self.categories.clear();
        for p in &products {
            if !self.categories.contains(&p.category) {
                self.categories.push(p.category);
            }
        }
        self.products = products.into_iter().map(Arc::new).collect();
        self.loaded = true;

        tracing::debug!(
            products = self.products.len(),
            categories = self.categories.len(),
            "catalog loaded"
        );
        Ok(&self.products)
    }

    /// Whether `load` has completed.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Arc<Product>] {
        &self.products
    }

    /// Distinct categories, in first-appearance order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<Arc<Product>> {
        self.products.iter().find(|p| p.id == id).cloned()
    }

    /// Products in the given category. `"all"` returns everything;
    /// anything else is a case-sensitive exact match on the category
    /// string.
    pub fn filter_by_category(&self, category: &str) -> Vec<Arc<Product>> {
        if category == "all" {
            return self.products.clone();
        }
        self.products
            .iter()
            .filter(|p| p.category.as_str() == category)
            .cloned()
            .collect()
    }

    /// Case-insensitive substring search over title, category, and
    /// description. An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<Arc<Product>> {
        let query = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                p.title.to_lowercase().contains(&query)
                    || p.category.as_str().to_lowercase().contains(&query)
                    || p.description.to_lowercase().contains(&query)
            })
            .cloned()
            .collect()
    }

    /// Return a newly ordered copy of `products`; the input is untouched.
    /// The sort is stable, so ties keep their relative input order.
    pub fn sort(&self, products: &[Arc<Product>], mode: SortMode) -> Vec<Arc<Product>> {
        let mut sorted = products.to_vec();
        match mode {
            SortMode::Default => {}
            SortMode::PriceLowHigh => sorted.sort_by(|a, b| a.price.cmp(&b.price)),
            SortMode::PriceHighLow => sorted.sort_by(|a, b| b.price.cmp(&a.price)),
            SortMode::Rating => sorted.sort_by(|a, b| {
                b.rating
                    .partial_cmp(&a.rating)
                    .unwrap_or(Ordering::Equal)
            }),
        }
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::source::MockCatalogSource;
    use crate::money::Money;
    use std::time::Duration;

    fn product(id: u32, price_cents: i64, rating: f64, category: Category) -> Arc<Product> {
        Arc::new(Product {
            id: ProductId::new(id),
            title: format!("Item {}", id),
            price: Money::from_cents(price_cents),
            category,
            rating,
            image: String::new(),
            description: String::new(),
        })
    }

    async fn loaded_store() -> CatalogStore {
        let source = MockCatalogSource::new()
            .with_latency(Duration::from_millis(1))
            .with_seed(42);
        let mut store = CatalogStore::new();
        store.load(&source).await.unwrap();
        store
    }

    #[tokio::test(start_paused = true)]
    async fn test_load_populates_store() {
        let store = loaded_store().await;
        assert!(store.is_loaded());
        assert_eq!(store.products().len(), 25);
        assert_eq!(store.categories(), &Category::ALL);
        assert!(store.get(ProductId::new(1)).is_some());
        assert!(store.get(ProductId::new(26)).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_filter_all_returns_everything() {
        let store = loaded_store().await;
        assert_eq!(store.filter_by_category("all").len(), 25);
    }

    #[tokio::test(start_paused = true)]
    async fn test_filter_is_case_sensitive() {
        let store = loaded_store().await;
        assert_eq!(store.filter_by_category("Electronics").len(), 5);
        assert!(store.filter_by_category("electronics").is_empty());
        assert!(store.filter_by_category("Garden").is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_is_case_insensitive() {
        let store = loaded_store().await;
        let upper = store.search("LAPTOP");
        let lower = store.search("laptop");
        assert!(!upper.is_empty());
        assert_eq!(upper, lower);
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_matches_any_field() {
        let store = loaded_store().await;
        // "electronics" only appears in the category field.
        assert_eq!(store.search("electronics").len(), 5);
        // Empty query matches everything.
        assert_eq!(store.search("").len(), 25);
        assert!(store.search("no such product anywhere").is_empty());
    }

    #[test]
    fn test_sort_modes() {
        let store = CatalogStore::new();
        let products = vec![
            product(1, 3000, 4.5, Category::Books),
            product(2, 1000, 3.2, Category::Books),
            product(3, 2000, 4.9, Category::Books),
        ];

        let low = store.sort(&products, SortMode::PriceLowHigh);
        for pair in low.windows(2) {
            assert!(pair[0].price <= pair[1].price);
        }

        let high = store.sort(&products, SortMode::PriceHighLow);
        for pair in high.windows(2) {
            assert!(pair[0].price >= pair[1].price);
        }

        let rated = store.sort(&products, SortMode::Rating);
        for pair in rated.windows(2) {
            assert!(pair[0].rating >= pair[1].rating);
        }

        // Input untouched, unknown mode preserves order.
        assert_eq!(products[0].id.value(), 1);
        let unchanged = store.sort(&products, SortMode::Default);
        let ids: Vec<u32> = unchanged.iter().map(|p| p.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let store = CatalogStore::new();
        let products = vec![
            product(1, 2000, 4.0, Category::Home),
            product(2, 2000, 4.0, Category::Home),
            product(3, 1000, 4.0, Category::Home),
        ];

        let sorted = store.sort(&products, SortMode::PriceLowHigh);
        let ids: Vec<u32> = sorted.iter().map(|p| p.id.value()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_sort_mode_parse() {
        assert_eq!(SortMode::parse("price-low"), SortMode::PriceLowHigh);
        assert_eq!(SortMode::parse("price-high"), SortMode::PriceHighLow);
        assert_eq!(SortMode::parse("rating"), SortMode::Rating);
        assert_eq!(SortMode::parse("default"), SortMode::Default);
        assert_eq!(SortMode::parse("newest"), SortMode::Default);
    }
}
