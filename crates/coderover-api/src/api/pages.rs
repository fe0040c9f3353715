// UI shell routes: the joystick page and its static assets
//
// Page content is opaque; it is read from the static directory and served
// verbatim.

use axum::{extract::State, response::Html, routing::get, Router};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::ServeDir;

use super::common::{ApiError, ErrorResponse};

/// File served at `/`, relative to the static directory
pub const INDEX_FILE: &str = "index.html";

/// App state for page routes
#[derive(Clone)]
pub struct AppState {
    pub static_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(static_dir: impl Into<PathBuf>) -> Self {
        Self {
            static_dir: Arc::new(static_dir.into()),
        }
    }
}

/// Create page routes and mount `/static`
pub fn routes(state: AppState) -> Router {
    let assets = ServeDir::new(state.static_dir.as_path());

    Router::new()
        .route("/", get(index))
        .nest_service("/static", assets)
        .with_state(state)
}

/// GET / - Joystick UI page
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "UI page", body = String, content_type = "text/html"),
        (status = 404, description = "Page template missing", body = ErrorResponse)
    ),
    tag = "ui"
)]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let path = state.static_dir.join(INDEX_FILE);

    match tokio::fs::read_to_string(&path).await {
        Ok(page) => Ok(Html(page)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "Page template not found");
            Err(ApiError::NotFound("page"))
        }
        Err(e) => Err(ApiError::Internal(format!(
            "failed to read {}: {}",
            path.display(),
            e
        ))),
    }
}
