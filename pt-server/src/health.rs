use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use serde_json::json;

/// GET /health - liveness marker for clients and deploy probes
pub async fn health_check() -> Response {
    let health = json!({
        "status": "OK",
        "message": "Server is running",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}
