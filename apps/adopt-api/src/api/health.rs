//! Readiness endpoint backed by a MongoDB ping.

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;

use crate::state::AppState;

/// Router exposing `/ready` (nested under /api)
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(ready_handler))
        .with_state(state)
}

/// Readiness check: 200 once the store answers, 503 otherwise
async fn ready_handler(State(state): State<AppState>) -> impl IntoResponse {
    let healthy = database::mongodb::check_health(&state.mongo_client).await;

    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let body = json!({
        "ready": healthy,
        "database": if healthy { "connected" } else { "disconnected" },
    });

    (status, Json(body))
}
