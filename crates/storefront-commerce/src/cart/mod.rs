//! Shopping cart module.
//!
//! Contains the cart ledger, its line items, and the checkout snapshot.

mod ledger;

pub use ledger::{CartItem, CartLedger, CartSnapshot};
