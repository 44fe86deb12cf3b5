//! Lost & Found API Server Binary
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin lostfound-api
//!
//! LOSTFOUND_HOST=127.0.0.1 LOSTFOUND_PORT=3000 cargo run --bin lostfound-api
//! ```
//!
//! # Environment Variables
//!
//! * `LOSTFOUND_HOST` - Server host (default: 0.0.0.0)
//! * `LOSTFOUND_PORT` - Server port (default: 8080)
//! * `LOSTFOUND_LOG_LEVEL` - trace, debug, info, warn, error (default: info)
//! * `LOSTFOUND_CORS_ALLOW_ANY` - Permissive CORS for browser clients (default: true)
//!
//! `RUST_LOG`, when set, overrides the configured log level.

use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use interface_api::{config::ApiConfig, create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = load_config();
    config.validate().context("invalid configuration")?;

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        "Starting lost & found API server"
    );

    let app = create_router(AppState::in_memory(config.clone()));

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("invalid listen address {}", config.server_addr()))?;

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!(%addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Environment configuration, or defaults when it cannot be read
fn load_config() -> ApiConfig {
    ApiConfig::from_env().unwrap_or_else(|err| {
        eprintln!("falling back to default configuration: {}", err);
        ApiConfig::default()
    })
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
