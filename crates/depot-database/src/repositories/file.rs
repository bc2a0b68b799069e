//! File record repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use depot_core::error::{AppError, ErrorKind};
use depot_core::result::AppResult;
use depot_core::types::{FileId, ListPage, UserId};
use depot_entity::file::kind::RecordKind;
use depot_entity::file::model::{FileRecord, NewFileRecord};
use depot_entity::file::store::FileStore;

/// Repository for file record CRUD and hierarchy queries.
#[derive(Debug, Clone)]
pub struct FileRepository {
    pool: PgPool,
}

impl FileRepository {
    /// Create a new file repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FileStore for FileRepository {
    async fn create(&self, record: NewFileRecord) -> AppResult<FileRecord> {
        sqlx::query_as::<_, FileRecord>(
            "INSERT INTO files (id, owner_id, name, kind, parent_id, is_public, storage_path, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(FileId::new())
        .bind(record.owner_id)
        .bind(&record.name)
        .bind(record.kind)
        .bind(record.parent_id)
        .bind(record.is_public)
        .bind(&record.storage_path)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create file record", e))
    }

    async fn get(&self, id: FileId) -> AppResult<Option<FileRecord>> {
        sqlx::query_as::<_, FileRecord>("SELECT * FROM files WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find file record", e)
            })
    }

    async fn get_owned(&self, id: FileId, owner: UserId) -> AppResult<Option<FileRecord>> {
        sqlx::query_as::<_, FileRecord>("SELECT * FROM files WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find owned file record", e)
            })
    }

    async fn list_children(
        &self,
        owner: UserId,
        parent_id: Option<FileId>,
        page: ListPage,
    ) -> AppResult<Vec<FileRecord>> {
        sqlx::query_as::<_, FileRecord>(
            "SELECT * FROM files \
             WHERE owner_id = $1 AND parent_id IS NOT DISTINCT FROM $2 \
             ORDER BY created_at ASC, id ASC LIMIT $3 OFFSET $4",
        )
        .bind(owner)
        .bind(parent_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list children", e))
    }

    async fn set_public(&self, id: FileId, value: bool) -> AppResult<()> {
        sqlx::query("UPDATE files SET is_public = $2 WHERE id = $1")
            .bind(id)
            .bind(value)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update visibility", e)
            })?;
        Ok(())
    }

    async fn count_by_kind(&self, kind: RecordKind) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM files WHERE kind = $1")
            .bind(kind)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count records", e))
    }
}
