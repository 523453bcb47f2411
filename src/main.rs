//! Pokedex - An interactive Pokédex CLI backed by a TTL-expiring response cache
//!
//! Browses the remote catalog with `map`/`explore`, catches and inspects
//! pokemon, and memoizes every page it renders.

mod api;
mod cache;
mod config;
mod error;
mod models;
mod pokedex;
mod repl;
mod tasks;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::PokeApiClient;
use cache::TimedCache;
use config::Config;
use repl::AppState;

/// Main entry point for the Pokédex CLI.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the TTL cache, which spawns its background sweep task
/// 4. Build the API client and session state
/// 5. Run the interactive loop until `exit`, end of input, or Ctrl+C
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting the Pokedex");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_ttl={}s, page_limit={}, api_base_url={}",
        config.cache_ttl_secs, config.page_limit, config.api_base_url
    );

    // Create the response cache and its sweep task
    let cache = TimedCache::new(config.cache_ttl()).context("creating the response cache")?;
    info!("Response cache initialized with TTL of {:?}", cache.ttl());

    let client = PokeApiClient::new().with_base_url(&config.api_base_url);
    let mut state = AppState::new(cache, client, &config);

    tokio::select! {
        result = repl::run(&mut state) => {
            result.context("running the command loop")?;
            info!("Session ended");
        }
        result = signal::ctrl_c() => {
            result.context("waiting for Ctrl+C")?;
            warn!("Received Ctrl+C, shutting down");
        }
    }

    state.shutdown().await;
    info!("Pokedex shutdown complete");

    Ok(())
}
