//! Local filesystem storage provider.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::StreamExt;
use tokio::fs;
use tokio_util::io::ReaderStream;
use tracing::debug;

use depot_core::error::{AppError, ErrorKind};
use depot_core::result::AppResult;
use depot_core::traits::storage::{ByteStream, StorageProvider};

/// Local filesystem storage provider.
#[derive(Debug, Clone)]
pub struct LocalStorageProvider {
    /// Root directory for all stored blobs.
    root: PathBuf,
}

impl LocalStorageProvider {
    /// Create a new local storage provider rooted at the given path.
    pub async fn new(root_path: &str) -> AppResult<Self> {
        let root = PathBuf::from(root_path);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create storage root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// Resolve an opaque address to an absolute path within the root.
    fn resolve(&self, path: &str) -> PathBuf {
        let clean = path.trim_start_matches('/');
        self.root.join(clean)
    }

    /// Ensure the parent directory of a path exists.
    async fn ensure_parent(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create parent directory: {}", parent.display()),
                    e,
                )
            })?;
        }
        Ok(())
    }
}

#[async_trait]
impl StorageProvider for LocalStorageProvider {
    fn provider_type(&self) -> &str {
        "local"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(self.root.exists() && self.root.is_dir())
    }

    async fn read(&self, path: &str) -> AppResult<ByteStream> {
        let full_path = self.resolve(path);
        let file = fs::File::open(&full_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("Blob not found: {path}"))
            } else {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to open blob: {path}"),
                    e,
                )
            }
        })?;

        let stream = ReaderStream::new(file);
        Ok(Box::pin(stream.map(|r| r.map(|b| b.into()))))
    }

    async fn read_bytes(&self, path: &str) -> AppResult<Bytes> {
        let full_path = self.resolve(path);
        let data = fs::read(&full_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("Blob not found: {path}"))
            } else {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read blob: {path}"),
                    e,
                )
            }
        })?;
        Ok(Bytes::from(data))
    }

    async fn write(&self, path: &str, data: Bytes) -> AppResult<()> {
        let full_path = self.resolve(path);
        self.ensure_parent(&full_path).await?;

        fs::write(&full_path, &data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write blob: {path}"),
                e,
            )
        })?;

        debug!(path, bytes = data.len(), "Wrote blob");
        Ok(())
    }

    async fn exists(&self, path: &str) -> AppResult<bool> {
        let full_path = self.resolve(path);
        Ok(full_path.exists())
    }
}

#[cfg(test)]
mod tests {
    use futures::TryStreamExt;

    use super::*;

    async fn provider() -> (tempfile::TempDir, LocalStorageProvider) {
        let dir = tempfile::tempdir().expect("tempdir");
        let provider = LocalStorageProvider::new(dir.path().to_str().expect("utf-8 path"))
            .await
            .expect("provider");
        (dir, provider)
    }

    #[tokio::test]
    async fn test_write_then_read() {
        let (_dir, storage) = provider().await;

        storage
            .write("blob-1", Bytes::from_static(b"hello"))
            .await
            .expect("write");

        assert!(storage.exists("blob-1").await.expect("exists"));
        assert_eq!(
            storage.read_bytes("blob-1").await.expect("read"),
            Bytes::from_static(b"hello")
        );
    }

    #[tokio::test]
    async fn test_read_missing_is_not_found() {
        let (_dir, storage) = provider().await;

        let err = storage.read_bytes("absent").await.expect_err("missing");
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert!(!storage.exists("absent").await.expect("exists"));
    }

    #[tokio::test]
    async fn test_streamed_read_matches_written_bytes() {
        let (_dir, storage) = provider().await;
        let payload = vec![7u8; 16 * 1024];

        storage
            .write("blob-2", Bytes::from(payload.clone()))
            .await
            .expect("write");

        let stream = storage.read("blob-2").await.expect("stream");
        let chunks: Vec<Bytes> = stream.try_collect().await.expect("collect");
        let collected: Vec<u8> = chunks.concat();
        assert_eq!(collected, payload);
    }

    #[tokio::test]
    async fn test_overwrite_is_idempotent() {
        let (_dir, storage) = provider().await;

        storage
            .write("blob-3", Bytes::from_static(b"first"))
            .await
            .expect("write");
        storage
            .write("blob-3", Bytes::from_static(b"second"))
            .await
            .expect("overwrite");

        assert_eq!(
            storage.read_bytes("blob-3").await.expect("read"),
            Bytes::from_static(b"second")
        );
    }
}
