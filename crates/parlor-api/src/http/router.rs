//! Axum router configuration with middleware.
//!
//! Middleware: CORS (permissive, this server carries no credentials) and
//! request tracing.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/rooms",
            post(handlers::room::create_room).get(handlers::room::list_rooms),
        )
        .route("/rooms/{id}", get(handlers::room::get_room))
        .route(
            "/rooms/{id}/messages",
            post(handlers::message::post_message).get(handlers::message::get_messages),
        )
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
