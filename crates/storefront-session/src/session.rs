//! The per-session context: one catalog, one cart, one checkout process.

use crate::config::SessionConfig;
use crate::storage::MemoryStore;
use crate::view::BrowseView;
use std::sync::Arc;
use std::time::Instant;
use storefront_commerce::cart::CartLedger;
use storefront_commerce::catalog::{CatalogStore, MockCatalogSource, Product, SortMode};
use storefront_commerce::checkout::{CheckoutProcess, CheckoutReceipt, CheckoutState};
use storefront_commerce::{ProductId, StoreError};

/// Owns the storefront core for one session lifetime.
///
/// This is the surface an orchestrator calls: browse-state setters,
/// id-based cart operations, and a checkout that clears the ledger on
/// success. Every cart mutation is persisted to the session store
/// before the call returns.
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    catalog: CatalogStore,
    cart: CartLedger,
    process: CheckoutProcess,
    view: BrowseView,
    storage: MemoryStore,
}

impl Session {
    /// Create a session from a validated configuration.
    pub fn new(config: SessionConfig) -> Result<Self, StoreError> {
        config.validate()?;

        let mut process = CheckoutProcess::new()
            .with_latency(config.checkout_latency())
            .with_success_rate(config.checkout_success_rate);
        if let Some(seed) = config.seed {
            process = process.with_seed(seed);
        }

        Ok(Self {
            config,
            catalog: CatalogStore::new(),
            cart: CartLedger::new(),
            process,
            view: BrowseView::new(),
            storage: MemoryStore::new(),
        })
    }

    /// Load the catalog. Called once, before any browsing.
    pub async fn init(&mut self) -> Result<(), StoreError> {
        let mut source = MockCatalogSource::new().with_latency(self.config.catalog_latency());
        if let Some(seed) = self.config.seed {
            source = source.with_seed(seed);
        }

        let started = Instant::now();
        self.catalog.load(&source).await?;
        tracing::info!(
            products = self.catalog.products().len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "session initialized"
        );
        Ok(())
    }

    /// The loaded catalog.
    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// The cart ledger.
    pub fn cart(&self) -> &CartLedger {
        &self.cart
    }

    /// The session store holding the persisted cart.
    pub fn storage(&self) -> &MemoryStore {
        &self.storage
    }

    /// Current browse state.
    pub fn view(&self) -> &BrowseView {
        &self.view
    }

    /// Current checkout transaction state.
    pub fn checkout_state(&self) -> CheckoutState {
        self.process.state()
    }

    /// Set the active category.
    pub fn set_category(&mut self, category: &str) {
        self.view.set_category(category);
    }

    /// Set the search query.
    pub fn set_search(&mut self, query: &str) {
        self.view.set_query(query);
    }

    /// Set the sort mode.
    pub fn set_sort(&mut self, sort: SortMode) {
        self.view.set_sort(sort);
    }

    /// The product view for the current browse state.
    pub fn browse(&self) -> Vec<Arc<Product>> {
        self.view.apply(&self.catalog)
    }

    /// Look up a product by id.
    pub fn product(&self, id: ProductId) -> Option<Arc<Product>> {
        self.catalog.get(id)
    }

    /// Add one unit of a catalog product to the cart. Returns false when
    /// the id is not in the catalog.
    pub fn add_to_cart(&mut self, id: ProductId) -> Result<bool, StoreError> {
        let Some(product) = self.catalog.get(id) else {
            return Ok(false);
        };
        self.cart.add_item(product);
        self.storage.save_cart(&self.cart)?;
        Ok(true)
    }

    /// Remove a product's item from the cart. Returns false when the
    /// product was not in the cart.
    pub fn remove_from_cart(&mut self, id: ProductId) -> Result<bool, StoreError> {
        let removed = self.cart.remove_item(id);
        if removed {
            self.storage.save_cart(&self.cart)?;
        }
        Ok(removed)
    }

    /// Adjust an item's quantity by a signed step, as the cart's +/-
    /// controls do. A step that would take the quantity to zero or below
    /// is ignored; removal takes an explicit `remove_from_cart`.
    pub fn change_quantity(&mut self, id: ProductId, step: i64) -> Result<(), StoreError> {
        let Some(item) = self.cart.get(id) else {
            return Ok(());
        };
        let new_quantity = item.quantity() as i64 + step;
        if new_quantity > 0 {
            self.cart.update_quantity(id, new_quantity);
            self.storage.save_cart(&self.cart)?;
        }
        Ok(())
    }

    /// Run one checkout transaction. On success the ledger is cleared
    /// and the empty cart persisted; on any failure the cart is left
    /// untouched for retry.
    pub async fn checkout(&mut self) -> Result<CheckoutReceipt, StoreError> {
        let receipt = self.process.checkout(&self.cart).await?;
        self.cart.clear();
        self.storage.save_cart(&self.cart)?;
        Ok(receipt)
    }
}
