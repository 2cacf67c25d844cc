//! Room HTTP handlers.
//!
//! Endpoints:
//! - POST /rooms       - Create (or idempotently update) a room
//! - GET  /rooms       - List all rooms
//! - GET  /rooms/{id}  - Get a single room

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use parlor_types::room::{CreateRoomRequest, Room};

use crate::http::error::AppError;
use crate::state::AppState;

/// POST /rooms - Create a room, or update it if the name is already taken.
pub async fn create_room(
    State(state): State<AppState>,
    Json(body): Json<CreateRoomRequest>,
) -> Result<(StatusCode, Json<Room>), AppError> {
    let room = state
        .store
        .create_or_get_room(&body.name, body.description)?;
    Ok((StatusCode::CREATED, Json(room)))
}

/// GET /rooms - List all rooms.
pub async fn list_rooms(State(state): State<AppState>) -> Json<Vec<Room>> {
    Json(state.store.list_rooms())
}

/// GET /rooms/{id} - Get a room by identifier.
pub async fn get_room(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Room>, AppError> {
    Ok(Json(state.store.get_room(&id)?))
}
