//! Storefront error types.

use thiserror::Error;

/// Errors that can occur in catalog, cart, and checkout operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Catalog construction failed during load.
    ///
    /// Fatal to session initialization; the caller may re-invoke `load`.
    #[error("Failed to load catalog: {0}")]
    CatalogLoad(String),

    /// Checkout was attempted against an empty cart. No state changed.
    #[error("Cart is empty")]
    EmptyCart,

    /// A checkout transaction is already pending. The caller should
    /// disable the checkout trigger until it resolves.
    #[error("A checkout is already in progress")]
    CheckoutInProgress,

    /// The simulated payment step declined the transaction. The cart is
    /// preserved and the caller may retry.
    #[error("Payment processing failed")]
    PaymentFailed,

    /// Session configuration failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl StoreError {
    /// Check whether the caller may usefully retry the failed operation.
    pub fn is_retriable(&self) -> bool {
        matches!(self, StoreError::PaymentFailed | StoreError::CatalogLoad(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(StoreError::EmptyCart.to_string(), "Cart is empty");
        assert_eq!(
            StoreError::PaymentFailed.to_string(),
            "Payment processing failed"
        );
    }

    #[test]
    fn test_retriable() {
        assert!(StoreError::PaymentFailed.is_retriable());
        assert!(StoreError::CatalogLoad("bad table".to_string()).is_retriable());
        assert!(!StoreError::EmptyCart.is_retriable());
        assert!(!StoreError::CheckoutInProgress.is_retriable());
    }
}
