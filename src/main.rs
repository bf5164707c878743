use std::sync::Arc;

use anyhow::{Context, bail};
use rationbot_relay::{
    config::{API_KEY_VAR, Config},
    routes,
    state::AppState,
};
use tokio::signal;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load();
    if config.api_key.is_none() {
        bail!("{API_KEY_VAR} is not configured");
    }
    info!(?config, "configuration loaded");

    let state = Arc::new(AppState::from_config(&config));
    let app = routes::create_router(state);

    let address = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;

    info!("RationBot relay running at http://{address}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if signal::ctrl_c().await.is_ok() {
        info!("Received Ctrl+C, shutting down");
    }
}
