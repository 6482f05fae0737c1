//! Customer directory API server
//!
//! # Usage
//!
//! ```bash
//! # PostgreSQL store (default)
//! API_DATABASE_URL=postgres://localhost/customer cargo run --bin customer-api
//!
//! # In-memory store with one generated customer
//! API_CUSTOMER_STORE=memory API_SEED_DEMO_DATA=true cargo run --bin customer-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_DATABASE_URL` - PostgreSQL connection string (falls back to `DATABASE_URL`)
//! * `API_LOG_LEVEL` - Log level when `RUST_LOG` is unset (default: info)
//! * `API_CUSTOMER_STORE` - `postgres` or `memory` (default: postgres)
//! * `API_SEED_DEMO_DATA` - Register one generated customer at startup (default: false)
//! * `API_CORS__ALLOWED_ORIGINS` - Comma-separated origins (default: *)
//! * `API_CORS__ALLOWED_METHODS` - Comma-separated methods (default: GET,POST,PUT,DELETE)

use std::net::SocketAddr;

use anyhow::Context;
use interface_api::{bootstrap, config::ApiConfig, create_router};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().context("Failed to load configuration")?;

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        store = ?config.customer_store,
        "Starting customer directory API"
    );

    let service = bootstrap::build_service(&config)
        .await
        .context("Failed to initialise customer store")?;

    if config.seed_demo_data {
        bootstrap::seed_demo_customer(&service)
            .await
            .context("Failed to seed demo data")?;
    }

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("Invalid server address {}", config.server_addr()))?;

    let app = create_router(service, config);

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// `RUST_LOG` wins over the configured level
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
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
