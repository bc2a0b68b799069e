//! Job entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use depot_core::types::JobId;

use super::status::JobStatus;

/// A background job.
///
/// Delivery is at-least-once: a claimed job whose worker dies without
/// reporting stays `Running` until operationally requeued, and a job
/// reported as transiently failed goes back to `Pending` until its
/// attempts are exhausted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Job {
    /// Unique job identifier.
    pub id: JobId,
    /// Job type identifier (e.g., `"thumbnail_generation"`).
    pub job_type: String,
    /// Job-specific payload (JSON).
    pub payload: serde_json::Value,
    /// Current job status.
    pub status: JobStatus,
    /// Number of delivery attempts so far.
    pub attempts: i32,
    /// Maximum allowed delivery attempts.
    pub max_attempts: i32,
    /// Error message from the most recent failure.
    pub error_message: Option<String>,
    /// Worker that claimed the job.
    pub worker_id: Option<String>,
    /// When the job was created.
    pub created_at: DateTime<Utc>,
    /// When the job was last updated.
    pub updated_at: DateTime<Utc>,
    /// When the current attempt started.
    pub started_at: Option<DateTime<Utc>>,
    /// When the job completed.
    pub completed_at: Option<DateTime<Utc>>,
}

impl Job {
    /// Check if the job has delivery attempts remaining.
    pub fn can_retry(&self) -> bool {
        self.attempts < self.max_attempts
    }
}
