//! Metadata repository contract.

use async_trait::async_trait;

use depot_core::result::AppResult;
use depot_core::types::{FileId, ListPage, UserId};

use super::kind::RecordKind;
use super::model::{FileRecord, NewFileRecord};

/// Contract for the document store holding file/folder records.
///
/// The store is the sole authority for record existence and ownership;
/// no component caches record state across requests.
#[async_trait]
pub trait FileStore: Send + Sync + 'static {
    /// Persist a new record as a single atomic insert, assigning its id.
    async fn create(&self, record: NewFileRecord) -> AppResult<FileRecord>;

    /// Find a record by id alone.
    async fn get(&self, id: FileId) -> AppResult<Option<FileRecord>>;

    /// Owner-scoped lookup.
    ///
    /// Returns `None` both when the id does not exist and when the record
    /// belongs to another user. Callers must not distinguish the two cases
    /// in their responses; the merge prevents probing for the existence of
    /// private records.
    async fn get_owned(&self, id: FileId, owner: UserId) -> AppResult<Option<FileRecord>>;

    /// List an owner's records under a parent (or root), in insertion
    /// order, one fixed-size page at a time.
    async fn list_children(
        &self,
        owner: UserId,
        parent_id: Option<FileId>,
        page: ListPage,
    ) -> AppResult<Vec<FileRecord>>;

    /// Atomically update the `is_public` field of a record.
    ///
    /// The caller is responsible for re-reading or locally updating its
    /// in-memory copy of the record before responding.
    async fn set_public(&self, id: FileId, value: bool) -> AppResult<()>;

    /// Count records of a given kind across all owners.
    async fn count_by_kind(&self, kind: RecordKind) -> AppResult<i64>;
}
