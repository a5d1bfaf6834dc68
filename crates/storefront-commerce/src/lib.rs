//! Catalog, cart, and checkout domain logic for the storefront.
//!
//! This crate provides the storefront's core engine:
//!
//! - **Catalog**: Immutable products, the mock data source, load-once
//!   store with filter / search / sort
//! - **Cart**: Ledger of line items with clamp-at-1 quantity rules
//! - **Checkout**: One-at-a-time transaction state machine over a cart
//!   snapshot, with a simulated payment step
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_commerce::prelude::*;
//!
//! // Load the catalog
//! let source = MockCatalogSource::new().with_seed(42);
//! let mut catalog = CatalogStore::new();
//! catalog.load(&source).await?;
//!
//! // Fill the cart
//! let mut cart = CartLedger::new();
//! let laptop = catalog.get(ProductId::new(1)).unwrap();
//! cart.add_item(laptop.clone());
//! cart.add_item(laptop);
//! println!("Total: {}", cart.total());
//!
//! // Check out; the caller clears the ledger on success
//! let process = CheckoutProcess::new();
//! let receipt = process.checkout(&cart).await?;
//! cart.clear();
//! println!("{}", receipt.message());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;

pub use error::StoreError;
pub use ids::{OrderId, ProductId};
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::StoreError;
    pub use crate::ids::{OrderId, ProductId};
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{
        CatalogSource, CatalogStore, Category, MockCatalogSource, Product, SortMode,
    };

    // Cart
    pub use crate::cart::{CartItem, CartLedger, CartSnapshot};

    // Checkout
    pub use crate::checkout::{CheckoutProcess, CheckoutReceipt, CheckoutState};
}
