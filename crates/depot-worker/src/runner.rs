//! Worker runner — main loop that polls for jobs and executes them.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time;
use tracing::{error, info, trace, warn};

use depot_core::config::WorkerConfig;

use crate::executor::{JobExecutionError, JobExecutor};
use crate::queue::PgJobQueue;

/// Polls the queue and executes claimed jobs with bounded concurrency.
///
/// The runner reports outcomes back to the queue; retry/backoff of
/// transient failures is the queue's policy (attempts vs. max_attempts),
/// not the handlers'.
pub struct WorkerRunner {
    queue: Arc<PgJobQueue>,
    executor: Arc<JobExecutor>,
    config: WorkerConfig,
    worker_id: String,
}

impl WorkerRunner {
    /// Create a new worker runner.
    pub fn new(
        queue: Arc<PgJobQueue>,
        executor: Arc<JobExecutor>,
        config: WorkerConfig,
        worker_id: String,
    ) -> Self {
        Self {
            queue,
            executor,
            config,
            worker_id,
        }
    }

    /// Run until the cancel signal flips, then drain in-flight jobs.
    pub async fn run(&self, mut cancel: watch::Receiver<bool>) {
        info!(
            worker_id = %self.worker_id,
            concurrency = self.config.concurrency,
            poll_interval = self.config.poll_interval_seconds,
            "Worker started"
        );

        let semaphore = Arc::new(tokio::sync::Semaphore::new(self.config.concurrency));
        let poll_interval = Duration::from_secs(self.config.poll_interval_seconds);

        loop {
            if *cancel.borrow() {
                break;
            }

            self.poll_and_execute(&semaphore).await;

            tokio::select! {
                _ = cancel.changed() => {
                    if *cancel.borrow() {
                        info!(worker_id = %self.worker_id, "Worker received shutdown signal");
                        break;
                    }
                }
                _ = time::sleep(poll_interval) => {}
            }
        }

        info!(worker_id = %self.worker_id, "Waiting for in-flight jobs to complete...");
        let max_permits = self.config.concurrency as u32;
        let _ = tokio::time::timeout(Duration::from_secs(30), semaphore.acquire_many(max_permits))
            .await;
        info!(worker_id = %self.worker_id, "Worker shut down");
    }

    /// Claim one job and execute it on a spawned task, if a slot is free.
    async fn poll_and_execute(&self, semaphore: &Arc<tokio::sync::Semaphore>) {
        let permit = match semaphore.clone().try_acquire_owned() {
            Ok(p) => p,
            Err(_) => {
                trace!("All worker slots occupied");
                return;
            }
        };

        match self.queue.dequeue().await {
            Ok(Some(job)) => {
                let queue = Arc::clone(&self.queue);
                let executor = Arc::clone(&self.executor);

                tokio::spawn(async move {
                    let _permit = permit;
                    let job_id = job.id;

                    info!(
                        %job_id,
                        job_type = %job.job_type,
                        attempt = job.attempts,
                        max_attempts = job.max_attempts,
                        "Processing job"
                    );

                    match executor.execute(&job).await {
                        Ok(()) => {
                            if let Err(e) = queue.complete(job_id).await {
                                error!(%job_id, error = %e, "Failed to mark job as completed");
                            }
                        }
                        Err(JobExecutionError::Transient(msg)) => {
                            warn!(%job_id, error = %msg, "Job failed (transient)");
                            let outcome = if job.can_retry() {
                                queue.requeue(job_id, &msg).await
                            } else {
                                queue.fail(job_id, &msg).await
                            };
                            if let Err(e) = outcome {
                                error!(%job_id, error = %e, "Failed to report job outcome");
                            }
                        }
                        Err(JobExecutionError::Permanent(msg)) => {
                            error!(%job_id, error = %msg, "Job failed permanently");
                            if let Err(e) = queue.fail(job_id, &msg).await {
                                error!(%job_id, error = %e, "Failed to mark job as failed");
                            }
                        }
                        Err(JobExecutionError::Internal(err)) => {
                            let msg = err.to_string();
                            error!(%job_id, error = %msg, "Job internal error");
                            if let Err(e) = queue.fail(job_id, &msg).await {
                                error!(%job_id, error = %e, "Failed to mark job as failed");
                            }
                        }
                    }
                });
            }
            Ok(None) => {
                drop(permit);
                trace!("No jobs available");
            }
            Err(e) => {
                drop(permit);
                error!(error = %e, "Failed to dequeue job");
            }
        }
    }
}
