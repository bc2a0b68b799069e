//! Depot derivative worker: consumes thumbnail jobs from the shared
//! queue and writes fixed-width derivatives beside each original.
//!
//! Runs as one or more separate processes; every instance polls the same
//! jobs table, so capacity scales by simply starting more of them.

use std::sync::Arc;

use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, fmt};

use depot_core::config::AppConfig;
use depot_core::error::AppError;
use depot_core::traits::storage::StorageProvider;
use depot_database::DatabasePool;
use depot_database::repositories::{FileRepository, JobRepository};
use depot_entity::file::store::FileStore;
use depot_worker::executor::JobExecutor;
use depot_worker::jobs::ThumbnailJobHandler;
use depot_worker::{PgJobQueue, WorkerRunner};

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
        tracing::error!("Worker error: {e}");
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

/// Main worker run function.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Depot worker v{}", env!("CARGO_PKG_VERSION"));

    let db = DatabasePool::connect_with_retry(&config.database).await?;
    depot_database::migration::run_migrations(db.pool()).await?;

    let storage: Arc<dyn StorageProvider> =
        Arc::new(depot_storage::LocalStorageProvider::new(&config.storage.root_path).await?);

    let file_store: Arc<dyn FileStore> = Arc::new(FileRepository::new(db.pool().clone()));
    let job_repo = Arc::new(JobRepository::new(db.pool().clone()));

    let worker_id = format!("worker-{}", &uuid::Uuid::new_v4().to_string()[..8]);
    let queue = Arc::new(PgJobQueue::new(
        job_repo,
        worker_id.clone(),
        config.worker.max_attempts,
    ));

    let mut executor = JobExecutor::new();
    executor.register(Arc::new(ThumbnailJobHandler::new(
        Arc::clone(&file_store),
        Arc::clone(&storage),
    )));
    let executor = Arc::new(executor);

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received");
        let _ = shutdown_tx.send(true);
    });

    let runner = WorkerRunner::new(queue, executor, config.worker.clone(), worker_id);
    runner.run(shutdown_rx).await;

    db.close().await;
    tracing::info!("Depot worker shut down gracefully");
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
