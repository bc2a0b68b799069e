//! In-memory doubles for the store and queue contracts, shared by the
//! service tests.

use std::sync::Mutex;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::Utc;

use depot_core::error::AppError;
use depot_core::result::AppResult;
use depot_core::types::{FileId, JobId, ListPage, UserId};
use depot_entity::file::kind::RecordKind;
use depot_entity::file::model::{FileRecord, NewFileRecord};
use depot_entity::file::store::FileStore;
use depot_entity::job::payload::ThumbnailJob;
use depot_entity::job::queue::JobQueue;

/// Base64-encode a payload the way clients do.
pub fn encode(data: &[u8]) -> String {
    BASE64.encode(data)
}

/// An in-memory `FileStore` keeping records in insertion order.
#[derive(Debug, Default)]
pub struct MemoryFileStore {
    records: Mutex<Vec<FileRecord>>,
}

impl MemoryFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record directly, bypassing upload validation.
    pub fn insert_sync(
        &self,
        owner_id: UserId,
        name: &str,
        kind: RecordKind,
        parent_id: Option<FileId>,
        is_public: bool,
        storage_path: Option<String>,
    ) -> FileId {
        let record = FileRecord {
            id: FileId::new(),
            owner_id,
            name: name.to_string(),
            kind,
            parent_id,
            is_public,
            storage_path,
            created_at: Utc::now(),
        };
        let id = record.id;
        self.records.lock().expect("lock").push(record);
        id
    }

    /// Fetch a record without going through the async contract.
    pub fn get_sync(&self, id: FileId) -> Option<FileRecord> {
        self.records
            .lock()
            .expect("lock")
            .iter()
            .find(|r| r.id == id)
            .cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().expect("lock").is_empty()
    }
}

#[async_trait]
impl FileStore for MemoryFileStore {
    async fn create(&self, record: NewFileRecord) -> AppResult<FileRecord> {
        let record = FileRecord {
            id: FileId::new(),
            owner_id: record.owner_id,
            name: record.name,
            kind: record.kind,
            parent_id: record.parent_id,
            is_public: record.is_public,
            storage_path: record.storage_path,
            created_at: Utc::now(),
        };
        self.records.lock().expect("lock").push(record.clone());
        Ok(record)
    }

    async fn get(&self, id: FileId) -> AppResult<Option<FileRecord>> {
        Ok(self.get_sync(id))
    }

    async fn get_owned(&self, id: FileId, owner: UserId) -> AppResult<Option<FileRecord>> {
        Ok(self.get_sync(id).filter(|r| r.owner_id == owner))
    }

    async fn list_children(
        &self,
        owner: UserId,
        parent_id: Option<FileId>,
        page: ListPage,
    ) -> AppResult<Vec<FileRecord>> {
        Ok(self
            .records
            .lock()
            .expect("lock")
            .iter()
            .filter(|r| r.owner_id == owner && r.parent_id == parent_id)
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .cloned()
            .collect())
    }

    async fn set_public(&self, id: FileId, value: bool) -> AppResult<()> {
        if let Some(record) = self
            .records
            .lock()
            .expect("lock")
            .iter_mut()
            .find(|r| r.id == id)
        {
            record.is_public = value;
        }
        Ok(())
    }

    async fn count_by_kind(&self, kind: RecordKind) -> AppResult<i64> {
        Ok(self
            .records
            .lock()
            .expect("lock")
            .iter()
            .filter(|r| r.kind == kind)
            .count() as i64)
    }
}

/// A `JobQueue` that records every enqueued job.
#[derive(Debug, Default)]
pub struct RecordingJobQueue {
    jobs: Mutex<Vec<ThumbnailJob>>,
}

impl RecordingJobQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn jobs(&self) -> Vec<ThumbnailJob> {
        self.jobs.lock().expect("lock").clone()
    }
}

#[async_trait]
impl JobQueue for RecordingJobQueue {
    async fn enqueue_thumbnail(&self, job: ThumbnailJob) -> AppResult<JobId> {
        self.jobs.lock().expect("lock").push(job);
        Ok(JobId::new())
    }
}

/// A `JobQueue` whose enqueue always fails.
#[derive(Debug)]
pub struct FailingJobQueue;

#[async_trait]
impl JobQueue for FailingJobQueue {
    async fn enqueue_thumbnail(&self, _job: ThumbnailJob) -> AppResult<JobId> {
        Err(AppError::database("queue unavailable"))
    }
}
