//! File record entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use depot_core::types::{FileId, UserId};

use super::kind::RecordKind;

/// A file or folder record stored in Depot.
///
/// `parent_id` of `None` denotes the root of the owner's hierarchy. When
/// not root, it references a record with `kind == Folder`; this is enforced
/// at creation time only. `storage_path` is an opaque blob-store address,
/// present exactly when the record carries content, and is never exposed
/// to clients.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FileRecord {
    /// Unique record identifier, assigned by the repository at creation.
    pub id: FileId,
    /// The owning user. Ownership is exclusive and immutable.
    pub owner_id: UserId,
    /// Display name. Non-empty; no uniqueness constraint.
    pub name: String,
    /// The record kind. Immutable after creation.
    pub kind: RecordKind,
    /// Parent folder, or `None` for root.
    pub parent_id: Option<FileId>,
    /// Whether anonymous readers may retrieve the content.
    pub is_public: bool,
    /// Opaque blob-store address. `Some` exactly when `kind != Folder`.
    pub storage_path: Option<String>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

impl FileRecord {
    /// Whether this record is a folder.
    pub fn is_folder(&self) -> bool {
        self.kind == RecordKind::Folder
    }
}

/// Data required to create a new record. The repository assigns the id
/// and creation timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFileRecord {
    /// The owning user.
    pub owner_id: UserId,
    /// Display name.
    pub name: String,
    /// The record kind.
    pub kind: RecordKind,
    /// Parent folder, or `None` for root.
    pub parent_id: Option<FileId>,
    /// Initial visibility.
    pub is_public: bool,
    /// Blob-store address for non-folder kinds.
    pub storage_path: Option<String>,
}
