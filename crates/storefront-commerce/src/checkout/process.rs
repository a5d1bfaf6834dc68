//! Checkout state machine and simulated payment step.

use crate::cart::CartLedger;
use crate::checkout::receipt::{current_timestamp, CheckoutReceipt};
use crate::error::StoreError;
use crate::ids::OrderId;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::time::Duration;

/// Default simulated payment latency.
pub const DEFAULT_PAYMENT_LATENCY: Duration = Duration::from_millis(1500);

/// Default payment success probability.
pub const DEFAULT_SUCCESS_RATE: f64 = 0.9;

/// Checkout transaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CheckoutState {
    /// No transaction in flight.
    #[default]
    Idle,
    /// A transaction is awaiting the payment step.
    Pending,
    /// The last transaction completed; the next checkout starts a fresh
    /// cycle.
    Completed,
    /// The last transaction was declined; the cart is retained and the
    /// next checkout starts a fresh cycle.
    Failed,
}

impl CheckoutState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutState::Idle => "idle",
            CheckoutState::Pending => "pending",
            CheckoutState::Completed => "completed",
            CheckoutState::Failed => "failed",
        }
    }
}

/// Drives one checkout transaction at a time against a cart snapshot.
///
/// The process never mutates the cart; on success the caller is
/// responsible for clearing the ledger. State lives behind `Cell` so
/// `checkout` takes `&self` and an overlapping second submission on the
/// single-threaded scheduler is observable and rejected rather than
/// queued. The resulting future is deliberately not `Send`; it is meant
/// to be awaited, not spawned.
#[derive(Debug)]
pub struct CheckoutProcess {
    state: Cell<CheckoutState>,
    latency: Duration,
    success_rate: f64,
    rng: RefCell<StdRng>,
}

impl CheckoutProcess {
    /// Create a process with default latency, the default 0.9 success
    /// rate, and an entropy-seeded RNG.
    pub fn new() -> Self {
        Self {
            state: Cell::new(CheckoutState::Idle),
            latency: DEFAULT_PAYMENT_LATENCY,
            success_rate: DEFAULT_SUCCESS_RATE,
            rng: RefCell::new(StdRng::from_entropy()),
        }
    }

    /// Set the simulated payment latency.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Set the success probability. A draw in [0, 1) succeeds when it is
    /// below this rate, so 1.0 always succeeds and 0.0 always fails.
    pub fn with_success_rate(mut self, rate: f64) -> Self {
        self.success_rate = rate;
        self
    }

    /// Seed the outcome RNG for deterministic runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = RefCell::new(StdRng::seed_from_u64(seed));
        self
    }

    /// Current transaction state.
    pub fn state(&self) -> CheckoutState {
        self.state.get()
    }

    /// Whether a transaction is currently awaiting its payment step.
    pub fn is_pending(&self) -> bool {
        self.state.get() == CheckoutState::Pending
    }

    /// Run one checkout transaction against the cart's current contents.
    ///
    /// The charged total and item count are snapshotted before the
    /// pending wait begins; cart mutations made while the transaction is
    /// in flight do not affect it. There is no cancellation: once
    /// pending, the transaction always resolves to completed or failed.
    pub async fn checkout(&self, cart: &CartLedger) -> Result<CheckoutReceipt, StoreError> {
        if cart.is_empty() {
            return Err(StoreError::EmptyCart);
        }
        if self.state.get() == CheckoutState::Pending {
            return Err(StoreError::CheckoutInProgress);
        }

        let snapshot = cart.snapshot();
        self.state.set(CheckoutState::Pending);
        tracing::debug!(total = %snapshot.total, items = snapshot.item_count, "checkout pending");

        tokio::time::sleep(self.latency).await;

        let draw: f64 = self.rng.borrow_mut().gen();
        if draw < self.success_rate {
            self.state.set(CheckoutState::Completed);
            let receipt = CheckoutReceipt {
                order_id: OrderId::generate(),
                total: snapshot.total,
                item_count: snapshot.item_count,
                placed_at: current_timestamp(),
            };
            tracing::info!(order_id = %receipt.order_id, total = %receipt.total, "checkout completed");
            Ok(receipt)
        } else {
            self.state.set(CheckoutState::Failed);
            tracing::warn!(total = %snapshot.total, "payment declined");
            Err(StoreError::PaymentFailed)
        }
    }
}

impl Default for CheckoutProcess {
    fn default() -> Self {
        Self::new()
    }
}
