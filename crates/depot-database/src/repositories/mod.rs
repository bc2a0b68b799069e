//! Concrete repository implementations over PostgreSQL.

pub mod file;
pub mod job;

pub use file::FileRepository;
pub use job::JobRepository;
