//! Retrieval path: visibility check, variant selection, byte streaming.

use std::sync::Arc;

use depot_core::error::AppError;
use depot_core::result::AppResult;
use depot_core::traits::storage::{ByteStream, StorageProvider};
use depot_core::types::{FileId, UserId};
use depot_entity::file::store::FileStore;
use depot_storage::thumbnail::{THUMBNAIL_WIDTHS, variant_path};

/// A resolved byte stream ready to be served.
pub struct Download {
    /// The content bytes.
    pub stream: ByteStream,
    /// Media type inferred from the record's display name.
    pub content_type: String,
}

impl std::fmt::Debug for Download {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Download")
            .field("content_type", &self.content_type)
            .finish()
    }
}

/// Serves record content to owners and, for public records, to anyone.
#[derive(Clone)]
pub struct DownloadService {
    store: Arc<dyn FileStore>,
    storage: Arc<dyn StorageProvider>,
}

impl std::fmt::Debug for DownloadService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DownloadService").finish()
    }
}

impl DownloadService {
    /// Creates a new download service.
    pub fn new(store: Arc<dyn FileStore>, storage: Arc<dyn StorageProvider>) -> Self {
        Self { store, storage }
    }

    /// Resolve a record's content for the given viewer.
    ///
    /// A private record read by anyone but its owner reports `Not found`,
    /// indistinguishable from an absent record, so unauthorized callers
    /// cannot probe which private records exist. A requested derivative
    /// that the worker has not produced yet reports `Not found` the same
    /// way; derivatives are eventually consistent and their absence is not
    /// an error state.
    pub async fn fetch(
        &self,
        file_id: FileId,
        viewer: Option<UserId>,
        size: Option<&str>,
    ) -> AppResult<Download> {
        let record = self
            .store
            .get(file_id)
            .await?
            .ok_or_else(|| AppError::not_found("Not found"))?;

        if record.is_folder() {
            return Err(AppError::validation("A folder doesn't have content"));
        }

        if !record.is_public && viewer != Some(record.owner_id) {
            return Err(AppError::not_found("Not found"));
        }

        let base_path = record
            .storage_path
            .as_deref()
            .ok_or_else(|| AppError::not_found("Not found"))?;

        let path = match size {
            Some(raw) => {
                let width = THUMBNAIL_WIDTHS
                    .into_iter()
                    .find(|w| w.to_string() == raw)
                    .ok_or_else(|| AppError::validation("Invalid size"))?;
                variant_path(base_path, width)
            }
            None => base_path.to_string(),
        };

        if !self.storage.exists(&path).await? {
            return Err(AppError::not_found("Not found"));
        }

        let stream = self.storage.read(&path).await?;
        let content_type = mime_guess::from_path(&record.name)
            .first_or_octet_stream()
            .to_string();

        Ok(Download {
            stream,
            content_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use depot_core::error::ErrorKind;
    use depot_entity::file::kind::RecordKind;
    use depot_storage::LocalStorageProvider;
    use futures::TryStreamExt;

    use crate::testing::MemoryFileStore;

    use super::*;

    struct Fixture {
        _dir: tempfile::TempDir,
        store: Arc<MemoryFileStore>,
        storage: Arc<LocalStorageProvider>,
        service: DownloadService,
    }

    async fn fixture() -> Fixture {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = Arc::new(
            LocalStorageProvider::new(dir.path().to_str().expect("utf-8"))
                .await
                .expect("storage"),
        );
        let store = Arc::new(MemoryFileStore::new());
        let service = DownloadService::new(store.clone(), storage.clone());
        Fixture {
            _dir: dir,
            store,
            storage,
            service,
        }
    }

    async fn collect(download: Download) -> Vec<u8> {
        let chunks: Vec<Bytes> = download.stream.try_collect().await.expect("collect");
        chunks.concat()
    }

    async fn seed_file(
        fx: &Fixture,
        owner: UserId,
        name: &str,
        kind: RecordKind,
        is_public: bool,
        content: &[u8],
    ) -> FileId {
        let path = uuid::Uuid::new_v4().to_string();
        fx.storage
            .write(&path, Bytes::copy_from_slice(content))
            .await
            .expect("write blob");
        fx.store.insert_sync(owner, name, kind, None, is_public, Some(path))
    }

    #[tokio::test]
    async fn test_owner_reads_private_file() {
        let fx = fixture().await;
        let owner = UserId::new();
        let id = seed_file(&fx, owner, "notes.txt", RecordKind::File, false, b"secret").await;

        let download = fx
            .service
            .fetch(id, Some(owner), None)
            .await
            .expect("owner read");
        assert_eq!(download.content_type, "text/plain");
        assert_eq!(collect(download).await, b"secret");
    }

    #[tokio::test]
    async fn test_private_file_is_invisible_to_others() {
        let fx = fixture().await;
        let owner = UserId::new();
        let id = seed_file(&fx, owner, "notes.txt", RecordKind::File, false, b"secret").await;

        for viewer in [None, Some(UserId::new())] {
            let err = fx
                .service
                .fetch(id, viewer, None)
                .await
                .expect_err("denied");
            assert_eq!(err.kind, ErrorKind::NotFound);
            assert_eq!(err.message, "Not found");
        }

        // The denial is byte-identical to a genuinely absent record.
        let absent = fx
            .service
            .fetch(FileId::new(), None, None)
            .await
            .expect_err("absent");
        assert_eq!(absent.kind, ErrorKind::NotFound);
        assert_eq!(absent.message, "Not found");
    }

    #[tokio::test]
    async fn test_public_file_readable_anonymously() {
        let fx = fixture().await;
        let owner = UserId::new();
        let id = seed_file(&fx, owner, "pic.png", RecordKind::Image, true, b"png-bytes").await;

        let download = fx.service.fetch(id, None, None).await.expect("anon read");
        assert_eq!(download.content_type, "image/png");
        assert_eq!(collect(download).await, b"png-bytes");
    }

    #[tokio::test]
    async fn test_folder_has_no_content() {
        let fx = fixture().await;
        let owner = UserId::new();
        let id = fx
            .store
            .insert_sync(owner, "docs", RecordKind::Folder, None, false, None);

        let err = fx
            .service
            .fetch(id, Some(owner), None)
            .await
            .expect_err("folder");
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.message, "A folder doesn't have content");
    }

    #[tokio::test]
    async fn test_unsupported_size_rejected() {
        let fx = fixture().await;
        let owner = UserId::new();
        let id = seed_file(&fx, owner, "pic.png", RecordKind::Image, true, b"png").await;

        for size in ["50", "abc", "5000", ""] {
            let err = fx
                .service
                .fetch(id, Some(owner), Some(size))
                .await
                .expect_err("bad size");
            assert_eq!(err.message, "Invalid size");
        }
    }

    #[tokio::test]
    async fn test_missing_derivative_reports_not_found() {
        let fx = fixture().await;
        let owner = UserId::new();
        let id = seed_file(&fx, owner, "pic.png", RecordKind::Image, true, b"png").await;

        // The worker has not produced any variants yet.
        let err = fx
            .service
            .fetch(id, Some(owner), Some("500"))
            .await
            .expect_err("no variant yet");
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_existing_derivative_is_served() {
        let fx = fixture().await;
        let owner = UserId::new();
        let id = seed_file(&fx, owner, "pic.png", RecordKind::Image, true, b"original").await;

        let base = fx
            .store
            .get_sync(id)
            .and_then(|r| r.storage_path)
            .expect("path");
        fx.storage
            .write(&variant_path(&base, 250), Bytes::from_static(b"small"))
            .await
            .expect("write variant");

        let download = fx
            .service
            .fetch(id, None, Some("250"))
            .await
            .expect("variant read");
        assert_eq!(collect(download).await, b"small");
    }

    #[tokio::test]
    async fn test_publish_round_trip_for_anonymous_readers() {
        let fx = fixture().await;
        let owner = UserId::new();
        let id = seed_file(&fx, owner, "pic.png", RecordKind::Image, false, b"bytes").await;
        let files = crate::file::service::FileService::new(fx.store.clone());

        // Private: anonymous read is denied as absent.
        let err = fx.service.fetch(id, None, None).await.expect_err("private");
        assert_eq!(err.kind, ErrorKind::NotFound);

        files.set_visibility(owner, id, true).await.expect("publish");
        let download = fx.service.fetch(id, None, None).await.expect("public");
        assert_eq!(download.content_type, "image/png");

        files
            .set_visibility(owner, id, false)
            .await
            .expect("unpublish");
        let err = fx
            .service
            .fetch(id, None, None)
            .await
            .expect_err("private again");
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_unknown_extension_defaults_to_octet_stream() {
        let fx = fixture().await;
        let owner = UserId::new();
        let id = seed_file(&fx, owner, "payload.zzqq", RecordKind::File, true, b"x").await;

        let download = fx.service.fetch(id, None, None).await.expect("read");
        assert_eq!(download.content_type, "application/octet-stream");
    }
}
