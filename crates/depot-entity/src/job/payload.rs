//! Typed job payload definitions.

use serde::{Deserialize, Serialize};

use depot_core::types::{FileId, UserId};

/// Job type identifier for thumbnail derivative generation.
pub const THUMBNAIL_JOB_TYPE: &str = "thumbnail_generation";

/// Payload of a thumbnail generation job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThumbnailJob {
    /// The user who owns the image record.
    pub user_id: UserId,
    /// The image record to derive thumbnails for.
    pub file_id: FileId,
}

/// Loosely-typed view of a thumbnail payload, used by the worker to
/// reject jobs whose required fields are absent instead of dropping them
/// as deserialization errors.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PartialThumbnailJob {
    /// The owning user, if present.
    #[serde(default)]
    pub user_id: Option<UserId>,
    /// The target record, if present.
    #[serde(default)]
    pub file_id: Option<FileId>,
}

impl PartialThumbnailJob {
    /// Promote to a complete payload, naming the first missing field.
    pub fn require(self) -> Result<ThumbnailJob, &'static str> {
        let file_id = self.file_id.ok_or("Missing fileId")?;
        let user_id = self.user_id.ok_or("Missing userId")?;
        Ok(ThumbnailJob { user_id, file_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_roundtrip() {
        let job = ThumbnailJob {
            user_id: UserId::new(),
            file_id: FileId::new(),
        };
        let value = serde_json::to_value(job).expect("serialize");
        let partial: PartialThumbnailJob = serde_json::from_value(value).expect("deserialize");
        assert_eq!(partial.require(), Ok(job));
    }

    #[test]
    fn test_missing_file_id_reported_first() {
        let partial: PartialThumbnailJob =
            serde_json::from_value(serde_json::json!({})).expect("deserialize");
        assert_eq!(partial.require(), Err("Missing fileId"));
    }

    #[test]
    fn test_missing_user_id() {
        let partial: PartialThumbnailJob =
            serde_json::from_value(serde_json::json!({ "file_id": uuid::Uuid::new_v4() }))
                .expect("deserialize");
        assert_eq!(partial.require(), Err("Missing userId"));
    }
}
