//! Core type definitions used across the Depot workspace.

pub mod id;
pub mod pagination;

pub use id::*;
pub use pagination::ListPage;
