//! Per-session composition of the storefront core.
//!
//! This crate owns everything with session lifetime:
//!
//! - **Session**: The context object composing one catalog, one cart,
//!   and one checkout process, exposing the id-based call surface an
//!   orchestrator drives
//! - **BrowseView**: Category / search / sort state and its composition
//!   pipeline
//! - **SessionConfig**: TOML-loadable timings, success rate, and RNG
//!   seed
//! - **MemoryStore**: In-memory JSON persistence for the cart
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_session::{Session, SessionConfig};
//!
//! let mut session = Session::new(SessionConfig::default())?;
//! session.init().await?;
//!
//! session.set_category("Electronics");
//! let first = session.browse()[0].id;
//! session.add_to_cart(first)?;
//!
//! let receipt = session.checkout().await?;
//! println!("{}", receipt.message());
//! ```

pub mod config;
pub mod session;
pub mod storage;
pub mod view;

pub use config::SessionConfig;
pub use session::Session;
pub use storage::MemoryStore;
pub use view::BrowseView;
