//! # depot-api
//!
//! The Axum HTTP surface for Depot: router, handlers, extractors, DTOs,
//! and the `AppError` to HTTP response mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
