//! Response DTOs.

use serde::Serialize;

use depot_core::types::{FileId, UserId};
use depot_entity::file::kind::RecordKind;
use depot_entity::file::model::FileRecord;

/// Wire representation of a file record.
///
/// The blob-store address is deliberately not part of this shape; clients
/// address content only through the retrieval endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecordDto {
    /// Record id.
    pub id: FileId,
    /// Owning user.
    pub user_id: UserId,
    /// Display name.
    pub name: String,
    /// Record kind.
    #[serde(rename = "type")]
    pub kind: RecordKind,
    /// Whether anonymous readers may retrieve the content.
    pub is_public: bool,
    /// Parent record, `null` for root.
    pub parent_id: Option<FileId>,
}

impl From<FileRecord> for FileRecordDto {
    fn from(record: FileRecord) -> Self {
        Self {
            id: record.id,
            user_id: record.owner_id,
            name: record.name,
            kind: record.kind,
            is_public: record.is_public,
            parent_id: record.parent_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn test_storage_path_never_serialized() {
        let record = FileRecord {
            id: FileId::new(),
            owner_id: UserId::new(),
            name: "pic.png".to_string(),
            kind: RecordKind::Image,
            parent_id: None,
            is_public: false,
            storage_path: Some("opaque-address".to_string()),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(FileRecordDto::from(record)).expect("serialize");
        let text = json.to_string();
        assert!(!text.contains("opaque-address"));
        assert!(!text.contains("storage"));
        assert_eq!(json["type"], "image");
        assert_eq!(json["isPublic"], false);
        assert!(json["parentId"].is_null());
    }
}
