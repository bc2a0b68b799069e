//! Owner-scoped record operations: lookup, listing, visibility, stats.

use std::sync::Arc;

use serde::Serialize;

use depot_core::error::AppError;
use depot_core::result::AppResult;
use depot_core::types::{FileId, ListPage, UserId};
use depot_entity::file::kind::RecordKind;
use depot_entity::file::model::FileRecord;
use depot_entity::file::store::FileStore;

/// Aggregate record counts for the stats endpoint.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct UsageStats {
    /// Number of content-bearing records (files and images).
    pub files: i64,
    /// Number of folders.
    pub folders: i64,
}

/// Owner-scoped metadata operations.
#[derive(Clone)]
pub struct FileService {
    store: Arc<dyn FileStore>,
}

impl std::fmt::Debug for FileService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileService").finish()
    }
}

impl FileService {
    /// Creates a new file service.
    pub fn new(store: Arc<dyn FileStore>) -> Self {
        Self { store }
    }

    /// Fetch a record the user owns.
    ///
    /// Absent and foreign-owned records are both reported as `Not found`.
    pub async fn get_owned(&self, owner: UserId, id: FileId) -> AppResult<FileRecord> {
        self.store
            .get_owned(id, owner)
            .await?
            .ok_or_else(|| AppError::not_found("Not found"))
    }

    /// List one page of the user's records under a parent (root when
    /// `parent_id` is absent).
    ///
    /// The query always conjoins the owner, so a user never sees another
    /// user's children regardless of the `parent_id` value.
    pub async fn list_children(
        &self,
        owner: UserId,
        parent_id: Option<&str>,
        page: ListPage,
    ) -> AppResult<Vec<FileRecord>> {
        let parent_id = match parent_id {
            Some(raw) => Some(
                raw.parse::<FileId>()
                    .map_err(|_| AppError::validation("Parent not found"))?,
            ),
            None => None,
        };

        self.store.list_children(owner, parent_id, page).await
    }

    /// Set the public/private flag on an owned record.
    ///
    /// Idempotent: setting the already-current value is a no-op success.
    /// Returns the record reflecting the new value.
    pub async fn set_visibility(
        &self,
        owner: UserId,
        id: FileId,
        value: bool,
    ) -> AppResult<FileRecord> {
        let mut record = self.get_owned(owner, id).await?;
        self.store.set_public(id, value).await?;
        record.is_public = value;
        Ok(record)
    }

    /// Aggregate record counts across all owners.
    pub async fn stats(&self) -> AppResult<UsageStats> {
        let folders = self.store.count_by_kind(RecordKind::Folder).await?;
        let files = self.store.count_by_kind(RecordKind::File).await?
            + self.store.count_by_kind(RecordKind::Image).await?;
        Ok(UsageStats { files, folders })
    }
}
