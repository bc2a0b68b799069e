//! Postgres-backed job queue.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use depot_core::error::AppError;
use depot_core::result::AppResult;
use depot_core::types::JobId;
use depot_database::repositories::job::JobRepository;
use depot_entity::job::model::Job;
use depot_entity::job::payload::{THUMBNAIL_JOB_TYPE, ThumbnailJob};
use depot_entity::job::queue::JobQueue;

/// Job queue over the jobs table.
///
/// Delivery is at-least-once: the `SKIP LOCKED` claim hands each pending
/// job to exactly one live worker, but a redelivered transient failure or
/// an operator requeue can run the same payload again. Handlers must be
/// convergent under duplicate delivery.
#[derive(Debug, Clone)]
pub struct PgJobQueue {
    repo: Arc<JobRepository>,
    worker_id: String,
    max_attempts: i32,
}

impl PgJobQueue {
    /// Create a new job queue.
    pub fn new(repo: Arc<JobRepository>, worker_id: String, max_attempts: i32) -> Self {
        Self {
            repo,
            worker_id,
            max_attempts,
        }
    }

    /// Claim the next pending job, if any.
    pub async fn dequeue(&self) -> AppResult<Option<Job>> {
        let job = self.repo.claim_next(&self.worker_id).await?;
        if let Some(job) = &job {
            debug!(id = %job.id, job_type = %job.job_type, attempt = job.attempts, "Claimed job");
        }
        Ok(job)
    }

    /// Mark a job as completed successfully.
    pub async fn complete(&self, id: JobId) -> AppResult<()> {
        self.repo.complete(id).await?;
        debug!(%id, "Job completed");
        Ok(())
    }

    /// Mark a job as terminally failed.
    pub async fn fail(&self, id: JobId, error: &str) -> AppResult<()> {
        self.repo.fail(id, error).await?;
        debug!(%id, error, "Job failed");
        Ok(())
    }

    /// Hand a transiently-failed job back for redelivery.
    pub async fn requeue(&self, id: JobId, error: &str) -> AppResult<()> {
        self.repo.requeue(id, error).await?;
        debug!(%id, error, "Job requeued");
        Ok(())
    }
}

#[async_trait]
impl JobQueue for PgJobQueue {
    async fn enqueue_thumbnail(&self, job: ThumbnailJob) -> AppResult<JobId> {
        let payload = serde_json::to_value(job)?;
        let created = self
            .repo
            .create(THUMBNAIL_JOB_TYPE, &payload, self.max_attempts)
            .await
            .map_err(|e| AppError::database(format!("Failed to enqueue job: {e}")))?;

        debug!(id = %created.id, file_id = %job.file_id, "Enqueued thumbnail job");
        Ok(created.id)
    }
}
