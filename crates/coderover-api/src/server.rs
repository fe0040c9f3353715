// Router assembly and serve loop
//
// The storage handle is created by the caller and injected here; the server
// owns no global state.

use anyhow::{Context, Result};
use axum::http::{header, Method};
use axum::{extract::State, routing::get, Json, Router};
use coderover_storage::StorageBackend;
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api;
use crate::config::ServerConfig;
use crate::openapi::ApiDoc;
use crate::services::ControlService;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    storage: &'static str,
}

/// State for health endpoint
#[derive(Clone)]
struct HealthState {
    storage: &'static str,
}

async fn health(State(state): State<HealthState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        storage: state.storage,
    })
}

/// Build the full application router
pub fn build_router(config: &ServerConfig, storage: StorageBackend) -> Router {
    let health_state = HealthState {
        storage: storage.kind(),
    };

    let control_service = Arc::new(ControlService::new(storage));
    let controls_state = api::controls::AppState::new(control_service);
    let pages_state = api::pages::AppState::new(config.static_dir.clone());

    let app = Router::new()
        .route("/health", get(health).with_state(health_state))
        .merge(api::controls::routes(controls_state))
        .merge(api::pages::routes(pages_state));

    // Add Swagger UI
    let app =
        app.merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()));

    // Add CORS layer only if origins are configured
    let app = if !config.cors_origins.is_empty() {
        app.layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(config.cors_origins.clone()))
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN]),
        )
    } else {
        app
    };

    // Add tracing
    app.layer(TraceLayer::new_for_http())
}

/// Bind, serve until a shutdown signal arrives, then release storage
pub async fn serve(config: ServerConfig, storage: StorageBackend) -> Result<()> {
    let addr = config.bind_addr()?;
    let app = build_router(&config, storage.clone());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    tracing::info!("Listening on {}", addr);

    let result = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error");

    storage.close().await;
    tracing::info!("Storage closed");

    result
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
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
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    tracing::info!("Received shutdown signal");
}
