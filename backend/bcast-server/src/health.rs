use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::warn;
use serde_json::json;

/// GET /health - component status
pub async fn health(State(state): State<AppState>) -> Response {
    let active_recipients = match state.recipients.count_active().await {
        Ok(count) => Some(count),
        Err(e) => {
            warn!("Health check could not reach the database: {e}");
            None
        }
    };

    let health = json!({
        "status": if active_recipients.is_some() { "healthy" } else { "degraded" },
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "database": if active_recipients.is_some() { "operational" } else { "unavailable" },
        },
        "active_recipients": active_recipients,
        "active_dispatches": state.sessions.active_dispatches(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - the process answers
pub async fn liveness() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - 503 until the database answers
pub async fn readiness(State(state): State<AppState>) -> Response {
    match state.recipients.ping().await {
        Ok(()) => (StatusCode::OK, "Ready").into_response(),
        Err(e) => {
            warn!("Readiness check failed: {e}");
            (StatusCode::SERVICE_UNAVAILABLE, "Database unavailable").into_response()
        }
    }
}
