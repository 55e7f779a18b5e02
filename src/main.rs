use dotenvy::dotenv;
use tracing::{info, warn};

use mergington_activities::web::{app_router, AppState};
use mergington_activities::ServerConfig;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load .env
    dotenv().ok();

    // 1. Start logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,mergington_activities=debug".into()),
        )
        .init();

    // 2. Build the app around a freshly seeded directory
    let config = ServerConfig::from_env();
    let state = AppState::seeded();
    let app = app_router(state, &config.static_dir);

    // 3. Bind, with one fallback port
    let addr = config.socket_addr()?;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config.fallback_addr()?;
            warn!("Could not bind {}: {}. Trying fallback {}", addr, e, fallback);
            tokio::net::TcpListener::bind(fallback).await?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("Server running on http://{}", bound_addr);
    info!("Open http://{}/ for the activity list", bound_addr);

    axum::serve(listener, app).await
}
