//! Upload path: validation, blob write, record insert, job enqueue.

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use bytes::Bytes;
use tracing::{info, warn};
use uuid::Uuid;

use depot_core::config::StorageConfig;
use depot_core::error::AppError;
use depot_core::result::AppResult;
use depot_core::traits::storage::StorageProvider;
use depot_core::types::{FileId, UserId};
use depot_entity::file::kind::RecordKind;
use depot_entity::file::model::{FileRecord, NewFileRecord};
use depot_entity::file::store::FileStore;
use depot_entity::job::payload::ThumbnailJob;
use depot_entity::job::queue::JobQueue;

/// A creation request, unvalidated. All fields arrive as the client sent
/// them; validation order is part of the contract (first failure wins).
#[derive(Debug, Clone, Default)]
pub struct UploadRequest {
    /// Display name.
    pub name: Option<String>,
    /// Record kind as a wire string.
    pub kind: Option<String>,
    /// Parent record id as a wire string; absent means root.
    pub parent_id: Option<String>,
    /// Initial visibility.
    pub is_public: bool,
    /// Base64-encoded content for non-folder kinds.
    pub data: Option<String>,
}

/// Handles record creation: folders directly, files and images via the
/// blob store with an optional derivative job.
///
/// The blob write and the metadata insert are not transactional: a crash
/// between them leaves an orphaned blob with no referencing record. There
/// is no reconciliation sweep; the address space is high-entropy enough
/// that orphans are inert.
#[derive(Clone)]
pub struct UploadService {
    store: Arc<dyn FileStore>,
    storage: Arc<dyn StorageProvider>,
    queue: Arc<dyn JobQueue>,
    config: StorageConfig,
}

impl std::fmt::Debug for UploadService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadService").finish()
    }
}

impl UploadService {
    /// Creates a new upload service.
    pub fn new(
        store: Arc<dyn FileStore>,
        storage: Arc<dyn StorageProvider>,
        queue: Arc<dyn JobQueue>,
        config: StorageConfig,
    ) -> Self {
        Self {
            store,
            storage,
            queue,
            config,
        }
    }

    /// Create a record for the resolved owner.
    ///
    /// Side-effect ordering for non-folder kinds is strict: blob write,
    /// then metadata insert, then job enqueue. Each step requires the
    /// previous one; none is rolled back on a later failure.
    pub async fn upload(&self, owner: UserId, request: UploadRequest) -> AppResult<FileRecord> {
        let name = request
            .name
            .filter(|n| !n.is_empty())
            .ok_or_else(|| AppError::validation("Missing name"))?;

        let kind = request
            .kind
            .as_deref()
            .and_then(RecordKind::parse)
            .ok_or_else(|| AppError::validation("Missing type"))?;

        let data = if kind.has_content() {
            Some(
                request
                    .data
                    .filter(|d| !d.is_empty())
                    .ok_or_else(|| AppError::validation("Missing data"))?,
            )
        } else {
            None
        };

        let parent_id = self.validate_parent(request.parent_id.as_deref()).await?;

        let storage_path = match data {
            Some(encoded) => Some(self.write_blob(&encoded).await?),
            None => None,
        };

        let record = self
            .store
            .create(NewFileRecord {
                owner_id: owner,
                name,
                kind,
                parent_id,
                is_public: request.is_public,
                storage_path,
            })
            .await?;

        info!(id = %record.id, kind = %record.kind, "Created record");

        if record.kind == RecordKind::Image {
            // The upload has already succeeded; a failed enqueue only means
            // no derivatives will ever be produced for this record.
            let job = ThumbnailJob {
                user_id: owner,
                file_id: record.id,
            };
            if let Err(e) = self.queue.enqueue_thumbnail(job).await {
                warn!(file_id = %record.id, error = %e, "Failed to enqueue thumbnail job");
            }
        }

        Ok(record)
    }

    /// Validate the parent reference before any bytes are written.
    ///
    /// Ordering is load-bearing: rejecting a bad parent here prevents
    /// orphaned blob writes.
    async fn validate_parent(&self, raw: Option<&str>) -> AppResult<Option<FileId>> {
        let Some(raw) = raw else {
            return Ok(None);
        };

        let parent_id = raw
            .parse::<FileId>()
            .map_err(|_| AppError::validation("Parent not found"))?;

        let parent = self
            .store
            .get(parent_id)
            .await?
            .ok_or_else(|| AppError::validation("Parent not found"))?;

        if parent.kind != RecordKind::Folder {
            return Err(AppError::validation("Parent is not a folder"));
        }

        Ok(Some(parent_id))
    }

    /// Decode the payload and write it under a fresh opaque address.
    async fn write_blob(&self, encoded: &str) -> AppResult<String> {
        let bytes = BASE64
            .decode(encoded)
            .map_err(|_| AppError::validation("Invalid data"))?;

        if bytes.len() as u64 > self.config.max_upload_size_bytes {
            return Err(AppError::validation(format!(
                "Payload exceeds maximum upload size of {} bytes",
                self.config.max_upload_size_bytes
            )));
        }

        // High-entropy addresses avoid collisions without coordination.
        let path = Uuid::new_v4().to_string();
        self.storage.write(&path, Bytes::from(bytes)).await?;
        Ok(path)
    }
}
