//! Catalog sources.
//!
//! A [`CatalogSource`] models the latency-bound external call that
//! produces the product list. The store itself stays agnostic about
//! where products come from.

use crate::catalog::mock::build_catalog;
use crate::catalog::product::Product;
use crate::error::StoreError;
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

/// An asynchronous producer of the full product list.
#[async_trait]
pub trait CatalogSource {
    /// Fetch the complete product list.
    async fn fetch(&self) -> Result<Vec<Product>, StoreError>;
}

/// Default simulated fetch latency.
pub const DEFAULT_FETCH_LATENCY: Duration = Duration::from_millis(1000);

/// A catalog source that sleeps for a configured latency and then builds
/// the mock catalog.
///
/// With a seed set, every fetch yields the same catalog, which is what
/// the load-once contract expects anyway.
#[derive(Debug, Clone)]
pub struct MockCatalogSource {
    latency: Duration,
    seed: Option<u64>,
}

impl MockCatalogSource {
    /// Create a source with the default latency and entropy-seeded data.
    pub fn new() -> Self {
        Self {
            latency: DEFAULT_FETCH_LATENCY,
            seed: None,
        }
    }

    /// Set the simulated fetch latency.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Seed the data generator for deterministic catalogs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for MockCatalogSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogSource for MockCatalogSource {
    async fn fetch(&self) -> Result<Vec<Product>, StoreError> {
        tokio::time::sleep(self.latency).await;

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        build_catalog(&mut rng)
    }
}
