//! Built-in job handler implementations.

pub mod thumbnail;

pub use thumbnail::ThumbnailJobHandler;
