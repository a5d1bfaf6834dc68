//! Storefront demo - a scripted session standing in for a UI.
//!
//! Drives the whole core contract end to end: catalog load, browsing
//! (category, search, sort), cart mutations, and a checkout with one
//! retry on a declined payment.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use storefront_commerce::catalog::SortMode;
use storefront_commerce::StoreError;
use storefront_session::{Session, SessionConfig};

/// Default config file looked up in the working directory.
const DEFAULT_CONFIG_FILE: &str = "storefront.toml";

/// Scripted storefront session
#[derive(Parser)]
#[command(name = "storefront-demo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file path (defaults to ./storefront.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for catalog and checkout randomness; overrides the config
    #[arg(short, long)]
    seed: Option<u64>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Load the config file if one was given or discovered; otherwise fall
/// back to defaults.
fn load_config(cli: &Cli) -> Result<SessionConfig> {
    let mut config = match &cli.config {
        Some(path) => SessionConfig::load_from_path(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            SessionConfig::load_from_path(Path::new(DEFAULT_CONFIG_FILE))
                .context("failed to load ./storefront.toml")?
        }
        None => SessionConfig::default(),
    };

    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    Ok(config)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let config = load_config(&cli)?;
    tracing::debug!(?config, "session config resolved");
    let mut session = Session::new(config).context("invalid session config")?;

    println!("Loading catalog...");
    session.init().await.context("catalog load failed")?;

    // Browse: a category slice, then a search, then a sorted view.
    session.set_category("Electronics");
    println!("\nElectronics:");
    for product in session.browse() {
        println!(
            "  [{}] {} {} {}",
            product.id,
            product.title,
            product.price_display(),
            product.rating_stars()
        );
    }

    session.set_search("book");
    println!("\nSearch \"book\":");
    for product in session.browse() {
        println!("  [{}] {} ({})", product.id, product.title, product.category);
    }
    session.set_search("");

    session.set_category("all");
    session.set_sort(SortMode::PriceLowHigh);
    let cheapest = session.browse();
    println!("\nCheapest in the catalog: {}", cheapest[0].title);

    // Fill the cart: two of the cheapest, one of the next, then play
    // with the quantity controls.
    let first = cheapest[0].id;
    let second = cheapest[1].id;
    session.add_to_cart(first)?;
    session.add_to_cart(first)?;
    session.add_to_cart(second)?;
    session.change_quantity(second, 1)?;
    session.change_quantity(second, -1)?;

    println!(
        "\nCart: {} items, total {}",
        session.cart().total_items(),
        session.cart().total()
    );
    for item in session.cart().items() {
        println!(
            "  {} x{} = {}",
            item.product.title,
            item.quantity(),
            item.subtotal()
        );
    }

    // Checkout, retrying once if the simulated payment declines.
    println!("\nChecking out...");
    let receipt = match session.checkout().await {
        Ok(receipt) => receipt,
        Err(StoreError::PaymentFailed) => {
            println!("Payment declined, retrying...");
            session.checkout().await.context("retry failed")?
        }
        Err(e) => return Err(e).context("checkout failed"),
    };

    println!("{}", receipt.message());
    println!("Order id: {}", receipt.order_id);
    println!("Items remaining in cart: {}", session.cart().total_items());

    Ok(())
}
