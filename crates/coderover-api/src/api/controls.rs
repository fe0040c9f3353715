// Control log HTTP routes

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use super::common::{ApiError, ErrorResponse, StatusResponse};
use crate::services::ControlService;

/// Joystick position submitted by the UI.
/// Unknown fields (the UI also sends `honk`) are ignored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct ControlRequest {
    /// Horizontal axis, typically -1.0 to 1.0 (not enforced).
    #[schema(example = 0.5)]
    pub x: f64,
    /// Vertical axis, typically -1.0 to 1.0 (not enforced).
    #[schema(example = 0.75)]
    pub y: f64,
}

/// One row of the recent controls log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ControlLogEntry {
    pub x: f64,
    pub y: f64,
    /// Server-local time of insertion as `HH:MM:SS`. No date component.
    #[schema(example = "14:03:27")]
    pub time: String,
}

/// App state for control routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ControlService>,
}

impl AppState {
    pub fn new(service: Arc<ControlService>) -> Self {
        Self { service }
    }
}

/// Create control routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/control", post(receive_control))
        .route("/logs", get(list_logs))
        .with_state(state)
}

/// POST /control - Record a joystick position
#[utoipa::path(
    post,
    path = "/control",
    request_body = ControlRequest,
    responses(
        (status = 200, description = "Control recorded", body = StatusResponse),
        (status = 400, description = "Malformed JSON", body = ErrorResponse),
        (status = 415, description = "Missing JSON content type", body = ErrorResponse),
        (status = 422, description = "Missing or non-numeric x/y", body = ErrorResponse),
        (status = 500, description = "Storage unavailable", body = ErrorResponse)
    ),
    tag = "controls"
)]
pub async fn receive_control(
    State(state): State<AppState>,
    payload: Result<Json<ControlRequest>, JsonRejection>,
) -> Result<Json<StatusResponse>, ApiError> {
    let Json(req) = payload?;

    state
        .service
        .record(req)
        .await
        .map_err(ApiError::StorageUnavailable)?;

    Ok(Json(StatusResponse::ok()))
}

/// GET /logs - Last 50 controls, newest first
#[utoipa::path(
    get,
    path = "/logs",
    responses(
        (status = 200, description = "Recent controls", body = Vec<ControlLogEntry>),
        (status = 500, description = "Storage unavailable", body = ErrorResponse)
    ),
    tag = "controls"
)]
pub async fn list_logs(
    State(state): State<AppState>,
) -> Result<Json<Vec<ControlLogEntry>>, ApiError> {
    let entries = state
        .service
        .recent()
        .await
        .map_err(ApiError::StorageUnavailable)?;

    Ok(Json(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use coderover_storage::{Database, StorageBackend};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app(backend: StorageBackend) -> Router {
        routes(AppState::new(Arc::new(ControlService::new(backend))))
    }

    fn post_control(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/control")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_logs() -> Request<Body> {
        Request::builder().uri("/logs").body(Body::empty()).unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_logs_empty() {
        let response = app(StorageBackend::in_memory())
            .oneshot(get_logs())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_control_then_logs() {
        let app = app(StorageBackend::in_memory());

        let response = app
            .clone()
            .oneshot(post_control(r#"{"x": 1.5, "y": -2.0}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!({"status": "ok"}));

        let response = app.oneshot(get_logs()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let logs = json_body(response).await;
        let logs = logs.as_array().unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0]["x"], json!(1.5));
        assert_eq!(logs[0]["y"], json!(-2.0));

        let time = logs[0]["time"].as_str().unwrap();
        assert_eq!(time.len(), 8);
        assert_eq!(time.matches(':').count(), 2);
    }

    #[tokio::test]
    async fn test_control_accepts_extra_fields() {
        let app = app(StorageBackend::in_memory());

        let response = app
            .clone()
            .oneshot(post_control(r#"{"x": 0.2, "y": 0.4, "honk": 1}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let logs = json_body(app.oneshot(get_logs()).await.unwrap()).await;
        assert_eq!(logs.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_control_accepts_integers() {
        let response = app(StorageBackend::in_memory())
            .oneshot(post_control(r#"{"x": 1, "y": 0}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_invalid_controls_are_rejected_without_writes() {
        let app = app(StorageBackend::in_memory());

        for body in [
            r#"{"x": 1.0}"#,
            r#"{"y": 1.0}"#,
            r#"{"x": "left", "y": 1.0}"#,
            r#"{"x": 1.0, "y": null}"#,
        ] {
            let response = app.clone().oneshot(post_control(body)).await.unwrap();
            assert_eq!(
                response.status(),
                StatusCode::UNPROCESSABLE_ENTITY,
                "body {} should be rejected",
                body
            );
            let error = json_body(response).await;
            assert!(error["error"].is_string());
        }

        let logs = json_body(app.oneshot(get_logs()).await.unwrap()).await;
        assert_eq!(logs, json!([]));
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let response = app(StorageBackend::in_memory())
            .oneshot(post_control(r#"{"x": 1.0,"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_content_type_is_rejected() {
        let request = Request::builder()
            .method("POST")
            .uri("/control")
            .body(Body::from(r#"{"x": 1.0, "y": 1.0}"#))
            .unwrap();

        let response = app(StorageBackend::in_memory())
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn test_logs_cap_at_fifty_newest_first() {
        let app = app(StorageBackend::in_memory());

        for i in 0..51 {
            let body = format!(r#"{{"x": {}, "y": 0.0}}"#, i);
            let response = app.clone().oneshot(post_control(&body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let logs = json_body(app.oneshot(get_logs()).await.unwrap()).await;
        let logs = logs.as_array().unwrap();
        assert_eq!(logs.len(), 50);
        assert_eq!(logs[0]["x"], json!(50.0));
        assert_eq!(logs[49]["x"], json!(1.0));
        assert!(logs.iter().all(|entry| entry["x"] != json!(0.0)));
    }

    #[tokio::test]
    async fn test_storage_failure_is_server_error() {
        let db = Database::in_memory().await.unwrap();
        db.init().await.unwrap();
        let backend = StorageBackend::Sqlite(db);
        backend.close().await;

        let app = app(backend);

        let response = app
            .clone()
            .oneshot(post_control(r#"{"x": 1.0, "y": 1.0}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = app.oneshot(get_logs()).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(response).await,
            json!({"error": "storage unavailable"})
        );
    }
}
