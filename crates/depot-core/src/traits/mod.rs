//! Contracts for the external collaborators Depot builds on.
//!
//! The traits are defined here in `depot-core` and implemented by the
//! infrastructure crates (`depot-storage`, `depot-cache`).

pub mod cache;
pub mod storage;

pub use cache::CacheProvider;
pub use storage::{ByteStream, StorageProvider};
