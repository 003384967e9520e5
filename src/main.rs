//! Community UI showcase server
//!
//! Mounts the community stylesheets into a Bootstrap host and serves a page
//! rendering every component.

use mimalloc::MiMalloc;

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::sync::Arc;

use anyhow::Context;
use community_ui::config::AppConfig;
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present) before reading RUST_LOG or config env vars
    let _ = dotenv();

    // Initialize tracing (M-LOG-STRUCTURED)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    info!(
        name: "community.config.loaded",
        port = config.server.port,
        static_url = %config.community.static_url,
        pwa_mode = config.community.pwa_mode,
        "Configuration loaded"
    );

    community_ui::server::start_server(Arc::new(config)).await
}
