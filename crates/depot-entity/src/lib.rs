//! # depot-entity
//!
//! Domain entity models for Depot, plus the store contracts that name
//! them. Every entity struct represents a database table row or a domain
//! value object; entities derive `Debug`, `Clone`, `Serialize`,
//! `Deserialize`, and database entities additionally derive
//! `sqlx::FromRow`.

pub mod file;
pub mod job;
