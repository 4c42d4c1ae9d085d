use crate::api::error::{ApiErrorBody, ApiErrorResponse};
use crate::api::projects::projects::{
    create_project, delete_project, get_project, list_projects, update_project,
};
use crate::{AppState, health};

use pt_config::CorsConfig;

use axum::{
    Json, Router,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState, cors: &CorsConfig) -> Router {
    Router::new()
        // Project resource
        .route("/projects", get(list_projects).post(create_project))
        .route(
            "/projects/{id}",
            get(get_project).put(update_project).delete(delete_project),
        )
        // Health check endpoint
        .route("/health", get(health::health_check))
        // Unmatched routes get the generic not-found shape
        .fallback(fallback)
        // Add shared state
        .with_state(state)
        // CORS middleware restricted to the configured origin allow-list
        .layer(cors_layer(cors))
}

fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                log::warn!("Ignoring unparseable CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}

async fn fallback() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ApiErrorResponse {
            error: ApiErrorBody {
                code: "NOT_FOUND".into(),
                message: "Route not found".into(),
                field: None,
            },
        }),
    )
}
