// CodeRover control log server
// Decision: storage handle created here and injected into the router, closed on shutdown

use anyhow::{Context, Result};
use coderover_api::{serve, ServerConfig};
use coderover_storage::StorageBackend;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Missing .env is fine; real environment variables still apply
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "coderover_api=debug,coderover_storage=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("coderover-api starting...");

    let config = ServerConfig::from_env().context("Invalid server configuration")?;
    tracing::info!(
        static_dir = %config.static_dir.display(),
        "Server configured"
    );

    if config.cors_origins.is_empty() {
        tracing::info!("CORS not configured (same-origin requests only)");
    } else {
        tracing::info!(origins = ?config.cors_origins, "CORS origins configured");
    }

    // Initialize storage (creates the schema if missing, never drops it)
    let storage = StorageBackend::connect(&config.database_url)
        .await
        .context("Failed to open storage")?;

    if storage.is_dev_mode() {
        tracing::warn!("Using in-memory storage; controls are lost on restart");
    } else {
        tracing::info!(url = %config.database_url, "Connected to database");
    }

    serve(config, storage).await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
