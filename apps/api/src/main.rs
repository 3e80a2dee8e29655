mod applications;
mod auth;
mod config;
mod errors;
mod jobs;
mod latency;
mod matching;
mod models;
mod profiles;
mod routes;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::auth::session::SessionGate;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Job Board API v{}", env!("CARGO_PKG_VERSION"));

    // Restore the last session, if one was snapshotted
    let sessions = SessionGate::load(config.session_snapshot_path.clone()).await;
    info!(
        "Session snapshot: {}",
        config.session_snapshot_path.display()
    );

    // Seed the in-memory store and build app state
    let state = AppState::seeded(config.clone(), sessions);
    info!(
        "In-memory store seeded: {} users, {} profiles, {} jobs (scorer: {}, simulated latency: {}ms)",
        state.users.list().await?.len(),
        state.profiles.list().await?.len(),
        state.jobs.list().await?.len(),
        state.scorer.backend(),
        config.simulated_latency_ms
    );

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
