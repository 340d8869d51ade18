use axum::{extract::State, Json};
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::queue::{HistoryRecord, QueueEntry};
use crate::server::AppState;
use crate::session::SessionUser;

use super::auth::SuccessResponse;

#[derive(Debug, Deserialize)]
pub struct JoinQueueRequest {
    /// Place id. Field name kept from the original mobile client.
    pub restaurant_id: Option<String>,
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    "restaurants".to_string()
}

/// `POST /api/join-queue` - join a place's queue, overwriting any current one.
pub async fn join_queue(
    State(state): State<AppState>,
    user: SessionUser,
    Json(req): Json<JoinQueueRequest>,
) -> Result<Json<QueueEntry>> {
    let place_id = req.restaurant_id.ok_or(AppError::PlaceNotFound)?;
    let entry = state.engine.join(&user.phone, &place_id, &req.category)?;
    Ok(Json(entry))
}

/// `GET /api/current-queue` - the user's live entry, or null.
pub async fn current_queue(
    State(state): State<AppState>,
    user: SessionUser,
) -> Json<Option<QueueEntry>> {
    Json(state.engine.current(&user.phone))
}

/// `POST /api/leave-queue` - leave, snapshotting the entry into history.
pub async fn leave_queue(
    State(state): State<AppState>,
    user: SessionUser,
) -> Json<SuccessResponse> {
    state.engine.leave(&user.phone);
    Json(SuccessResponse { success: true })
}

/// `POST /api/update-position` - one simulation tick for the caller.
pub async fn update_position(
    State(state): State<AppState>,
    user: SessionUser,
) -> Json<Option<QueueEntry>> {
    Json(state.engine.update_position(&user.phone))
}

/// `GET /api/history` - queues the user has left, in append order.
pub async fn history(
    State(state): State<AppState>,
    user: SessionUser,
) -> Json<Vec<HistoryRecord>> {
    Json(state.engine.history(&user.phone))
}
