//! Web server entry point for the Pokedex lineage lookup.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from environment variables
//! 3. Build the HTTP source and lineage resolver
//! 4. Compile page templates and create the search session
//! 5. Serve until `Ctrl-C`

use std::sync::Arc;

use pokedex_resolver::{DexSource, HttpSource, LineageResolver};
use pokedex_web::{AppState, WebConfig, start_server};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration is invalid, the HTTP client or
/// templates cannot be built, or the server fails to bind.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("pokedex-web starting");

    // 2. Load configuration.
    let config = WebConfig::from_env()?;
    info!(
        api_base = %config.api_base,
        host = %config.server.host,
        port = config.server.port,
        request_timeout = ?config.source.request_timeout,
        "configuration loaded"
    );

    // 3. Build the resolver.
    let source = DexSource::Live(HttpSource::new(&config.source)?);
    let resolver = LineageResolver::new(source, &config.api_base)?;

    // 4. Build shared state.
    let state = Arc::new(AppState::new(resolver)?);

    // 5. Serve.
    start_server(&config.server, state).await?;

    Ok(())
}
