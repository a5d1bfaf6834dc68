//! Checkout confirmation.

use crate::ids::OrderId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Confirmation returned by a successful checkout.
///
/// Totals come from the snapshot taken when the transaction started,
/// not from the cart as it stands at completion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutReceipt {
    /// Generated order identifier.
    pub order_id: OrderId,
    /// Total charged.
    pub total: Money,
    /// Item count charged for.
    pub item_count: u64,
    /// Unix timestamp when the transaction completed.
    pub placed_at: i64,
}

impl CheckoutReceipt {
    /// Human-readable confirmation message.
    pub fn message(&self) -> String {
        format!("Order placed successfully! Total: {}", self.total)
    }
}

/// Get current Unix timestamp.
pub(crate) fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message() {
        let receipt = CheckoutReceipt {
            order_id: OrderId::new("ORD-1"),
            total: Money::from_cents(4000),
            item_count: 2,
            placed_at: 0,
        };
        assert_eq!(receipt.message(), "Order placed successfully! Total: $40.00");
    }
}
