//! # depot-service
//!
//! Application services for Depot: the upload path, the retrieval path,
//! the visibility toggle, and listing. Services operate over the store
//! and queue contracts and never touch HTTP types.

pub mod file;

pub use file::download::{Download, DownloadService};
pub use file::service::FileService;
pub use file::upload::{UploadRequest, UploadService};

#[cfg(test)]
pub(crate) mod testing;
