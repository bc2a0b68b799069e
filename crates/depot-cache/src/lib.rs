//! # depot-cache
//!
//! Session-store backends for Depot: a Redis provider for production and
//! an in-memory provider for development and tests, both implementing the
//! [`depot_core::traits::CacheProvider`] contract, plus centralized
//! cache-key builders.

pub mod keys;
pub mod memory;
pub mod provider;
pub mod redis;

pub use provider::CacheManager;
