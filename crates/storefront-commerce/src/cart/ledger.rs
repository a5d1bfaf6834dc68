//! Cart ledger and line items.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A line item in the cart: a shared product reference plus a quantity.
///
/// Quantity is always at least 1; operations that would drive it lower
/// clamp instead. Removal is a separate, explicit ledger operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// The product, shared with the catalog. Never mutated here.
    pub product: Arc<Product>,
    /// Quantity, >= 1.
    quantity: u32,
}

impl CartItem {
    fn new(product: Arc<Product>) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Current quantity.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Line subtotal: unit price times quantity.
    pub fn subtotal(&self) -> Money {
        self.product.price.saturating_mul(self.quantity as i64)
    }
}

/// Immutable copy of the cart's aggregates, taken at a specific instant.
///
/// Decouples a pending checkout from cart mutations that happen while
/// the transaction is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSnapshot {
    /// Total at the moment of capture.
    pub total: Money,
    /// Item count (sum of quantities) at the moment of capture.
    pub item_count: u64,
}

/// The mutable cart for one session.
///
/// Items are kept in insertion order and are unique by product id. Every
/// mutating operation bumps `revision`, the signal an external
/// presentation layer watches to re-render or persist; after any
/// mutating call returns, reads reflect the mutation.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CartLedger {
    items: Vec<CartItem>,
    revision: u64,
}

impl CartLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product. If an item for the product already
    /// exists its quantity goes up by one, otherwise a new item with
    /// quantity 1 is appended. Never fails.
    pub fn add_item(&mut self, product: Arc<Product>) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            item.quantity = item.quantity.saturating_add(1);
        } else {
            self.items.push(CartItem::new(product));
        }
        self.touch();
    }

    /// Remove the item for a product. Returns false (not an error) if
    /// the product is not in the cart.
    pub fn remove_item(&mut self, id: ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.product.id != id);
        let removed = self.items.len() < len_before;
        if removed {
            self.touch();
        }
        removed
    }

    /// Set the quantity for a product's item to `max(1, quantity)`.
    /// No-op if the product is not in the cart.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == id) {
            item.quantity = quantity.clamp(1, u32::MAX as i64) as u32;
            self.touch();
        }
    }

    /// Increase an item's quantity by one. No-op if absent.
    pub fn increment_quantity(&mut self, id: ProductId) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == id) {
            item.quantity = item.quantity.saturating_add(1);
            self.touch();
        }
    }

    /// Decrease an item's quantity by one, flooring at 1. The item is
    /// never removed this way; that takes an explicit `remove_item`.
    pub fn decrement_quantity(&mut self, id: ProductId) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == id) {
            if item.quantity > 1 {
                item.quantity -= 1;
                self.touch();
            }
        }
    }

    /// Sum of `price x quantity` over all items. Computed fresh on every
    /// call; nothing caches a total that could diverge.
    pub fn total(&self) -> Money {
        self.items.iter().map(|i| i.subtotal()).sum()
    }

    /// Sum of quantities.
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|i| i.quantity as u64).sum()
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Get the item for a product, if present.
    pub fn get(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product.id == id)
    }

    /// Remove all items.
    pub fn clear(&mut self) {
        self.items.clear();
        self.touch();
    }

    /// Monotonic mutation counter; advances on every mutating call.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Capture the current total and item count.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            total: self.total(),
            item_count: self.total_items(),
        }
    }

    fn touch(&mut self) {
        self.revision += 1;
        tracing::debug!(
            revision = self.revision,
            items = self.items.len(),
            total = %self.total(),
            "cart updated"
        );
    }
}
