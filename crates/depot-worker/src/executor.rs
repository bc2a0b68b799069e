//! Job executor — dispatches jobs to registered handlers.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use depot_core::error::AppError;
use depot_entity::job::model::Job;

/// Trait for job handler implementations.
#[async_trait]
pub trait JobHandler: Send + Sync {
    /// The job type this handler processes.
    fn job_type(&self) -> &str;

    /// Execute the job.
    async fn execute(&self, job: &Job) -> Result<(), JobExecutionError>;
}

/// Error from job execution.
#[derive(Debug, thiserror::Error)]
pub enum JobExecutionError {
    /// Permanent failure, redelivery cannot succeed.
    #[error("Permanent job failure: {0}")]
    Permanent(String),

    /// Transient failure, the queue may redeliver.
    #[error("Transient job failure: {0}")]
    Transient(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(#[from] AppError),
}

/// Dispatches jobs to the appropriate handler based on job type.
pub struct JobExecutor {
    handlers: HashMap<String, Arc<dyn JobHandler>>,
}

impl JobExecutor {
    /// Create a new job executor.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a job handler.
    pub fn register(&mut self, handler: Arc<dyn JobHandler>) {
        let job_type = handler.job_type().to_string();
        info!(%job_type, "Registered job handler");
        self.handlers.insert(job_type, handler);
    }

    /// Execute a job by dispatching to the correct handler.
    pub async fn execute(&self, job: &Job) -> Result<(), JobExecutionError> {
        let handler = self.handlers.get(&job.job_type).ok_or_else(|| {
            JobExecutionError::Permanent(format!(
                "No handler registered for job type '{}'",
                job.job_type
            ))
        })?;

        handler.execute(job).await
    }

    /// Check if a handler is registered for a job type.
    pub fn has_handler(&self, job_type: &str) -> bool {
        self.handlers.contains_key(job_type)
    }
}

impl Default for JobExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use depot_core::types::JobId;
    use depot_entity::job::status::JobStatus;

    use super::*;

    fn job(job_type: &str) -> Job {
        let now = Utc::now();
        Job {
            id: JobId::new(),
            job_type: job_type.to_string(),
            payload: serde_json::json!({}),
            status: JobStatus::Running,
            attempts: 1,
            max_attempts: 3,
            error_message: None,
            worker_id: Some("test-worker".to_string()),
            created_at: now,
            updated_at: now,
            started_at: Some(now),
            completed_at: None,
        }
    }

    struct NoopHandler;

    #[async_trait]
    impl JobHandler for NoopHandler {
        fn job_type(&self) -> &str {
            "noop"
        }

        async fn execute(&self, _job: &Job) -> Result<(), JobExecutionError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_dispatch_to_registered_handler() {
        let mut executor = JobExecutor::new();
        executor.register(Arc::new(NoopHandler));

        assert!(executor.has_handler("noop"));
        executor.execute(&job("noop")).await.expect("dispatch");
    }

    #[tokio::test]
    async fn test_unknown_job_type_is_permanent() {
        let executor = JobExecutor::new();

        let err = executor.execute(&job("mystery")).await.expect_err("unknown");
        assert!(matches!(err, JobExecutionError::Permanent(_)));
    }
}
