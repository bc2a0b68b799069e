//! Blob-store contract for pluggable byte storage backends.

use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;

use crate::result::AppResult;

/// A byte stream type used for reading blob contents.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, std::io::Error>> + Send>>;

/// Trait for blob storage backends.
///
/// Addresses are opaque strings carrying no structural meaning to callers.
/// From the callers' perspective the store is append-only: originals are
/// written once under a fresh address, and only derivative suffixes of an
/// address are ever overwritten.
#[async_trait]
pub trait StorageProvider: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "local").
    fn provider_type(&self) -> &str;

    /// Check whether the provider is healthy and reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Read a blob and return its byte stream.
    async fn read(&self, path: &str) -> AppResult<ByteStream>;

    /// Read a blob into memory as a complete byte vector.
    async fn read_bytes(&self, path: &str) -> AppResult<Bytes>;

    /// Write bytes to a blob at the given address.
    async fn write(&self, path: &str, data: Bytes) -> AppResult<()>;

    /// Check whether a blob exists at the given address.
    async fn exists(&self, path: &str) -> AppResult<bool>;
}
