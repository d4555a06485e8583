use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use specter_engine::{GeminiClient, ScanEngine};
use specter_gateway::config::GatewayConfig;
use specter_gateway::router::build_router;
use specter_gateway::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "specter_gateway=info,tower_http=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Specter Gateway");

    let config = GatewayConfig::load()?;
    config.validate()?;

    let client = GeminiClient::new(
        config.model.api_key.clone(),
        config.model.model_name.clone(),
    );
    let client = match &config.model.base_url {
        Some(base_url) => client.with_base_url(base_url.clone()),
        None => client,
    };

    let engine = ScanEngine::new(Arc::new(client));
    let state = Arc::new(AppState::new(config.clone(), engine));

    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("Failed to install Ctrl+C handler");
    }
}
