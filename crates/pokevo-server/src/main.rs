//! Pokevo evolution viewer entry point.
//!
//! Serves a browser page that shows the evolution line of a random
//! first-generation species. Each sequence samples species ids until one
//! belongs to generation I, then follows its evolution chain through the
//! public catalog.
//!
//! # Architecture
//!
//! ```text
//! browser --> Axum (pokevo-web) --> EvolutionSession <-- EvolutionFetcher --> PokeAPI (pokevo-catalog)
//! ```

mod config;
mod error;

use std::sync::Arc;

use pokevo_catalog::PokeApiCatalog;
use pokevo_core::EvolutionFetcher;
use pokevo_web::{AppState, start_server};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::ViewerConfig;

/// Application entry point.
///
/// Initializes logging, loads configuration from environment variables,
/// builds the catalog client, optionally starts the first sequence, and
/// serves the viewer until the process is terminated.
///
/// # Errors
///
/// Returns an error if configuration, client construction, or the server
/// fails.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("pokevo-server starting");

    let config = ViewerConfig::from_env()?;
    info!(
        host = config.server.host,
        port = config.server.port,
        catalog = config.catalog.base_url,
        max_attempts = ?config.fetch.max_attempts,
        timeout_ms = ?config.catalog.timeout.map(|t| t.as_millis()),
        "configuration loaded"
    );

    let catalog = PokeApiCatalog::new(&config.catalog)?;
    let fetcher = EvolutionFetcher::new(catalog, config.fetch);
    let state = Arc::new(AppState::new(fetcher, config.sprite_base_url)?);

    if config.fetch_on_start {
        let fetch_id = state.request_new_sequence().await;
        info!(%fetch_id, "initial fetch started");
    }

    start_server(&config.server, state).await?;

    Ok(())
}
