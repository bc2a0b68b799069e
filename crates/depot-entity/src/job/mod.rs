//! Background job domain entities and the queue producer contract.

pub mod model;
pub mod payload;
pub mod queue;
pub mod status;

pub use model::Job;
pub use payload::{PartialThumbnailJob, THUMBNAIL_JOB_TYPE, ThumbnailJob};
pub use queue::JobQueue;
pub use status::JobStatus;
