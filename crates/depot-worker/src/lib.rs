//! # depot-worker
//!
//! Background derivative processing for Depot:
//! - the Postgres-backed job queue (producer and consumer sides)
//! - a job executor that dispatches jobs to the correct handler
//! - the thumbnail generation job handler
//! - a worker runner that polls for and executes queued jobs

pub mod executor;
pub mod jobs;
pub mod queue;
pub mod runner;

pub use queue::PgJobQueue;
pub use runner::WorkerRunner;
