use crate::{AppState, update_router};

use bcast_auth::WEBHOOK_SECRET_HEADER;
use bcast_telegram::Update;

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use log::{error, warn};

/// POST {webhook_path} - Bot API update delivery.
///
/// Answers 200 for every update that parses, even when handling fails,
/// so the provider does not redeliver it.
pub async fn handle_update(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(update): Json<Update>,
) -> StatusCode {
    let provided = headers
        .get(WEBHOOK_SECRET_HEADER)
        .and_then(|value| value.to_str().ok());

    if let Err(e) = state.webhook_secret.verify(provided) {
        warn!("Rejected webhook call for update {}: {e}", update.update_id);
        return StatusCode::UNAUTHORIZED;
    }

    let update_id = update.update_id;
    if let Err(e) = update_router::route_update(&state, update).await {
        error!("Failed to handle update {update_id}: {e}");
    }

    StatusCode::OK
}
