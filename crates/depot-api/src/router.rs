//! Route definitions for the Depot HTTP API.

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, put};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    // Base64 inflates payloads by ~4/3; leave headroom over the decoded cap.
    let max_body = (state.config.storage.max_upload_size_bytes as usize / 3) * 4 + 1024;

    Router::new()
        .route("/status", get(handlers::health::status))
        .route("/stats", get(handlers::health::stats))
        .route(
            "/files",
            get(handlers::file::index).post(handlers::file::create),
        )
        .route("/files/{id}", get(handlers::file::show))
        .route("/files/{id}/publish", put(handlers::file::publish))
        .route("/files/{id}/unpublish", put(handlers::file::unpublish))
        .route("/files/{id}/data", get(handlers::file::data))
        .layer(DefaultBodyLimit::max(max_body))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
