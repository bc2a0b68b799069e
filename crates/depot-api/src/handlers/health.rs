//! Readiness and stats handlers.

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use depot_core::traits::cache::CacheProvider;
use depot_service::file::service::UsageStats;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /status
///
/// Reports whether the backing stores are reachable. Health probes are
/// best-effort: a probe error reads as "not ready", never as a request
/// failure.
pub async fn status(State(state): State<AppState>) -> Json<Value> {
    let database = state.db.health_check().await.unwrap_or(false);
    let cache = state.cache.health_check().await.unwrap_or(false);

    Json(json!({ "database": database, "cache": cache }))
}

/// GET /stats
pub async fn stats(State(state): State<AppState>) -> Result<Json<UsageStats>, ApiError> {
    let stats = state.file_service.stats().await?;
    Ok(Json(stats))
}
