//! Thumbnail generation job handler.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use depot_core::traits::storage::StorageProvider;
use depot_entity::file::store::FileStore;
use depot_entity::job::model::Job;
use depot_entity::job::payload::{PartialThumbnailJob, THUMBNAIL_JOB_TYPE};
use depot_storage::thumbnail::{THUMBNAIL_WIDTHS, resize, variant_path};

use crate::executor::{JobExecutionError, JobHandler};

/// Regenerates the fixed-width derivatives of an image record.
///
/// Each width is resized from the original bytes and written beside the
/// original under the `_<width>` suffix. The first failing width aborts
/// the remaining ones and fails the whole job; variants written before the
/// failure remain. Writes are idempotent overwrites and the resize is a
/// pure function of the original bytes, so duplicate or concurrent
/// delivery of the same job converges on the same blob-store state.
pub struct ThumbnailJobHandler {
    store: Arc<dyn FileStore>,
    storage: Arc<dyn StorageProvider>,
}

impl ThumbnailJobHandler {
    /// Creates a new thumbnail job handler.
    pub fn new(store: Arc<dyn FileStore>, storage: Arc<dyn StorageProvider>) -> Self {
        Self { store, storage }
    }
}

#[async_trait]
impl JobHandler for ThumbnailJobHandler {
    fn job_type(&self) -> &str {
        THUMBNAIL_JOB_TYPE
    }

    async fn execute(&self, job: &Job) -> Result<(), JobExecutionError> {
        let partial: PartialThumbnailJob = serde_json::from_value(job.payload.clone())
            .map_err(|e| JobExecutionError::Permanent(format!("Malformed payload: {e}")))?;
        let payload = partial
            .require()
            .map_err(|m| JobExecutionError::Permanent(m.to_string()))?;

        // Owner-scoped re-fetch: a vanished record or a forged id pair
        // fails the job the same way.
        let record = self
            .store
            .get_owned(payload.file_id, payload.user_id)
            .await
            .map_err(|e| JobExecutionError::Transient(e.to_string()))?
            .ok_or_else(|| JobExecutionError::Permanent("File not found".to_string()))?;

        let base_path = record
            .storage_path
            .as_deref()
            .ok_or_else(|| JobExecutionError::Permanent("Record has no content".to_string()))?;

        let original = self
            .storage
            .read_bytes(base_path)
            .await
            .map_err(|e| JobExecutionError::Transient(e.to_string()))?;

        for width in THUMBNAIL_WIDTHS {
            let source = original.clone();
            let thumbnail = tokio::task::spawn_blocking(move || resize(&source, width))
                .await
                .map_err(|e| {
                    JobExecutionError::Transient(format!("Resize task panicked: {e}"))
                })?
                .map_err(|e| JobExecutionError::Permanent(e.to_string()))?;

            self.storage
                .write(&variant_path(base_path, width), thumbnail)
                .await
                .map_err(|e| JobExecutionError::Transient(e.to_string()))?;

            debug!(file_id = %payload.file_id, width, "Wrote thumbnail variant");
        }

        info!(file_id = %payload.file_id, "Thumbnail generation completed");
        Ok(())
    }
}
