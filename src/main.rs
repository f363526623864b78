use std::env;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use timecard_engine::api::{AppState, create_router};
use timecard_engine::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/default";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_dir = env::var("TIMECARD_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let bind_addr = env::var("TIMECARD_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    info!(config_dir = %config_dir, "Loading configuration");
    let config = ConfigLoader::load(&config_dir)
        .with_context(|| format!("loading configuration from {}", config_dir))?;
    let state = AppState::new(config).context("building application state")?;

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(bind_addr.as_str())
        .await
        .with_context(|| format!("binding {}", bind_addr))?;
    info!("Listening on {}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
