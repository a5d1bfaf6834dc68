//! In-memory session storage.
//!
//! Stands in for the browser-local storage a UI would persist its cart
//! to. Values are stored as JSON strings under plain keys, so anything
//! serde-serializable round-trips.

use std::collections::HashMap;
use storefront_commerce::cart::CartLedger;
use storefront_commerce::StoreError;

const CART_KEY: &str = "cart";

/// A keyed, in-memory JSON store with session lifetime.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a raw JSON string under a key, replacing any prior value.
    pub fn put(&mut self, key: impl Into<String>, json: String) {
        self.slots.insert(key.into(), json);
    }

    /// Fetch the raw JSON string for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }

    /// Drop the value for a key, if any.
    pub fn remove(&mut self, key: &str) {
        self.slots.remove(key);
    }

    /// Persist the cart ledger under the well-known cart key.
    pub fn save_cart(&mut self, cart: &CartLedger) -> Result<(), StoreError> {
        let json = serde_json::to_string(cart)
            .map_err(|e| StoreError::InvalidConfig(format!("cart serialization failed: {}", e)))?;
        self.put(CART_KEY, json);
        Ok(())
    }

    /// Restore a previously saved cart ledger. `None` when nothing has
    /// been saved yet.
    pub fn load_cart(&self) -> Result<Option<CartLedger>, StoreError> {
        match self.get(CART_KEY) {
            Some(json) => {
                let cart = serde_json::from_str(json).map_err(|e| {
                    StoreError::InvalidConfig(format!("cart deserialization failed: {}", e))
                })?;
                Ok(Some(cart))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use storefront_commerce::catalog::{Category, Product};
    use storefront_commerce::money::Money;
    use storefront_commerce::ProductId;

    fn product(id: u32, price_cents: i64) -> Arc<Product> {
        Arc::new(Product {
            id: ProductId::new(id),
            title: format!("Item {}", id),
            price: Money::from_cents(price_cents),
            category: Category::Home,
            rating: 4.5,
            image: String::new(),
            description: String::new(),
        })
    }

    #[test]
    fn test_raw_slots() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("missing"), None);

        store.put("key", "{\"a\":1}".to_string());
        assert_eq!(store.get("key"), Some("{\"a\":1}"));

        store.remove("key");
        assert_eq!(store.get("key"), None);
    }

    #[test]
    fn test_cart_round_trip() {
        let mut cart = CartLedger::new();
        let p = product(1, 2000);
        cart.add_item(p.clone());
        cart.add_item(p);
        cart.add_item(product(2, 550));

        let mut store = MemoryStore::new();
        store.save_cart(&cart).unwrap();

        let restored = store.load_cart().unwrap().unwrap();
        assert_eq!(restored.total(), cart.total());
        assert_eq!(restored.total_items(), cart.total_items());
        assert_eq!(restored.items(), cart.items());
    }

    #[test]
    fn test_load_without_save_is_none() {
        let store = MemoryStore::new();
        assert!(store.load_cart().unwrap().is_none());
    }
}
