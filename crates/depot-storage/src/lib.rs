//! # depot-storage
//!
//! Blob storage for Depot: the local filesystem implementation of the
//! [`depot_core::traits::StorageProvider`] contract, and the thumbnail
//! module holding the resize primitive and the derivative address
//! convention.

pub mod providers;
pub mod thumbnail;

pub use providers::local::LocalStorageProvider;
