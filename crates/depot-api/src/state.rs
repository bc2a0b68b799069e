//! Application state shared across all handlers and extractors.

use std::sync::Arc;

use depot_auth::SessionGate;
use depot_cache::CacheManager;
use depot_core::config::AppConfig;
use depot_database::DatabasePool;
use depot_service::{DownloadService, FileService, UploadService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All heavyweight
/// fields are `Arc`-wrapped for cheap cloning across tasks; handlers are
/// stateless and hold no locks across await points.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool (health checks).
    pub db: DatabasePool,
    /// Session-store manager (health checks).
    pub cache: Arc<CacheManager>,
    /// Session gate.
    pub session_gate: Arc<SessionGate>,
    /// Upload path.
    pub upload_service: Arc<UploadService>,
    /// Retrieval path.
    pub download_service: Arc<DownloadService>,
    /// Owner-scoped metadata operations.
    pub file_service: Arc<FileService>,
}
