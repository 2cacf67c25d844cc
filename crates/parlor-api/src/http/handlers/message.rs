//! Message HTTP handlers.
//!
//! Endpoints:
//! - POST /rooms/{id}/messages - Append a message to a room's log
//! - GET  /rooms/{id}/messages - Last 20 messages, ascending

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use parlor_types::message::{Message, PostMessageRequest};

use crate::http::error::AppError;
use crate::state::AppState;

/// POST /rooms/{id}/messages - Append a message.
///
/// Blocks until the serialized writer has committed (or rejected) this
/// specific request; the response carries the committed message with its
/// writer-assigned id and timestamp.
pub async fn post_message(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
    Json(body): Json<PostMessageRequest>,
) -> Result<(StatusCode, Json<Message>), AppError> {
    let msg = state
        .store
        .append_message(&room_id, &body.sender, &body.content)
        .await?;
    Ok((StatusCode::CREATED, Json(msg)))
}

/// GET /rooms/{id}/messages - Read the recent window of a room's log.
pub async fn get_messages(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> Result<Json<Vec<Message>>, AppError> {
    Ok(Json(state.store.recent_messages(&room_id)?))
}
