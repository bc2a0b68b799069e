//! Depot server, a multi-tenant file storage service.
//!
//! Main entry point that wires the crates together and starts the HTTP
//! service. Derivative jobs are processed by the separate `depot-worker`
//! binary.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use depot_api::state::AppState;
use depot_auth::SessionGate;
use depot_cache::CacheManager;
use depot_core::config::AppConfig;
use depot_core::error::AppError;
use depot_core::traits::cache::CacheProvider;
use depot_core::traits::storage::StorageProvider;
use depot_database::DatabasePool;
use depot_database::repositories::{FileRepository, JobRepository};
use depot_entity::file::store::FileStore;
use depot_entity::job::queue::JobQueue;
use depot_service::{DownloadService, FileService, UploadService};
use depot_worker::PgJobQueue;

#[tokio::main]
async fn main() {
    let env = std::env::var("DEPOT_ENV").unwrap_or_else(|_| "development".to_string());
    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Depot v{}", env!("CARGO_PKG_VERSION"));

    let db = DatabasePool::connect_with_retry(&config.database).await?;
    depot_database::migration::run_migrations(db.pool()).await?;

    let cache = Arc::new(CacheManager::new(&config.cache).await?);

    let storage: Arc<dyn StorageProvider> =
        Arc::new(depot_storage::LocalStorageProvider::new(&config.storage.root_path).await?);

    let file_store: Arc<dyn FileStore> = Arc::new(FileRepository::new(db.pool().clone()));
    let job_repo = Arc::new(JobRepository::new(db.pool().clone()));
    let job_queue: Arc<dyn JobQueue> = Arc::new(PgJobQueue::new(
        job_repo,
        "depot-server".to_string(),
        config.worker.max_attempts,
    ));

    let session_gate = Arc::new(SessionGate::new(
        Arc::clone(&cache) as Arc<dyn CacheProvider>,
    ));

    let upload_service = Arc::new(UploadService::new(
        Arc::clone(&file_store),
        Arc::clone(&storage),
        Arc::clone(&job_queue),
        config.storage.clone(),
    ));
    let download_service = Arc::new(DownloadService::new(
        Arc::clone(&file_store),
        Arc::clone(&storage),
    ));
    let file_service = Arc::new(FileService::new(Arc::clone(&file_store)));

    let state = AppState {
        config: Arc::new(config.clone()),
        db: db.clone(),
        cache,
        session_gate,
        upload_service,
        download_service,
        file_service,
    };

    let app = depot_api::build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Depot server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    db.close().await;
    tracing::info!("Depot server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
