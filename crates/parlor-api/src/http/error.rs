//! Application error type mapping store errors to HTTP status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use parlor_types::error::StoreError;

/// Application-level error that maps to HTTP responses.
///
/// Every adapter failure originates in the store, so this is a thin wrapper;
/// conversion happens via `From` so handlers can use `?`.
#[derive(Debug)]
pub struct AppError(pub StoreError);

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self.0 {
            StoreError::RoomNotFound(id) => (
                StatusCode::NOT_FOUND,
                "ROOM_NOT_FOUND",
                format!("Room '{id}' not found"),
            ),
            StoreError::InvalidInput(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            e @ StoreError::WriterClosed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                e.to_string(),
            ),
        };

        let body = json!({
            "errors": [{
                "code": code,
                "message": message,
            }]
        });

        (
            status,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            body.to_string(),
        )
            .into_response()
    }
}
