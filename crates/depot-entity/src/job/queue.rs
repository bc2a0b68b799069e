//! Job queue producer contract.

use async_trait::async_trait;

use depot_core::result::AppResult;
use depot_core::types::JobId;

use super::payload::ThumbnailJob;

/// Contract for enqueuing derivative jobs.
///
/// The queue guarantees at-least-once delivery to the worker side and owns
/// its own retry/backoff policy; producers only hand work over.
#[async_trait]
pub trait JobQueue: Send + Sync + 'static {
    /// Enqueue a thumbnail generation job.
    async fn enqueue_thumbnail(&self, job: ThumbnailJob) -> AppResult<JobId>;
}
