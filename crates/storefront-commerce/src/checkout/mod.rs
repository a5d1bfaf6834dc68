//! Checkout module.
//!
//! Contains the checkout state machine, the simulated payment step, and
//! the confirmation receipt.

mod process;
mod receipt;

pub use process::{
    CheckoutProcess, CheckoutState, DEFAULT_PAYMENT_LATENCY, DEFAULT_SUCCESS_RATE,
};
pub use receipt::CheckoutReceipt;
