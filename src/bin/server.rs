//! HomeValue Server - house price prediction API
//!
//! Loads the model artifact once (or starts in fallback mode when none is
//! present), then serves the JSON and form prediction endpoints.
//!
//! # Usage
//! ```sh
//! MODEL_PATH=ml_model/model/best_pipeline.json cargo run --bin server -- --port 5000
//! ```
//!
//! # Environment Variables
//! - `SERVER_HOST` / `SERVER_PORT` - Bind address (default: 127.0.0.1:5000)
//! - `MODEL_PATH` - Model artifact location
//! - `PERSISTENCE_ENABLED` / `DATABASE_URL` - Feature/prediction log
//! - `AUTH_ENABLED` / `JWT_SECRET_KEY` - Bearer token protection

use anyhow::{Context, Result};
use clap::Parser;
use homevalue::application::bootstrap::ServicesBootstrap;
use homevalue::config::Config;
use homevalue::interfaces::http::{AppState, AuthGuard, build_router};
use std::path::PathBuf;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about = "House price prediction server", long_about = None)]
struct Args {
    /// Overrides SERVER_HOST
    #[arg(long)]
    host: Option<String>,

    /// Overrides SERVER_PORT
    #[arg(short, long)]
    port: Option<u16>,

    /// Overrides MODEL_PATH
    #[arg(short, long)]
    model_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    let args = Args::parse();

    info!("HomeValue Server {} starting...", env!("CARGO_PKG_VERSION"));

    let mut config = Config::from_env()?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(path) = args.model_path {
        config.model.path = path;
    }
    info!(
        "Configuration loaded: bind={}, model={:?}, persistence={}, auth={}",
        config.server.bind_address(),
        config.model.path,
        config.persistence.enabled,
        config.auth.enabled
    );

    let services = ServicesBootstrap::init(&config).await?;
    let auth = AuthGuard::from_config(&config.auth)?;
    let app = build_router(AppState::new(services.prediction_service), auth);

    let address = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Shutdown complete.");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received. Draining connections...");
    }
}
