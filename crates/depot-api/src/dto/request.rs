//! Request DTOs.

use serde::Deserialize;

use depot_service::UploadRequest;

/// Body of `POST /files`.
///
/// Every field is optional at the wire level; the upload path validates
/// them in its fixed order so that the first missing field names the
/// failure. `parentId` and `page` stay strings here for the same reason:
/// their parsing is part of the service contract, not the transport's.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFileRequest {
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Record kind: `folder`, `file`, or `image`.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Parent record id; absent means root.
    #[serde(default)]
    pub parent_id: Option<String>,
    /// Initial visibility.
    #[serde(default)]
    pub is_public: bool,
    /// Base64-encoded content for non-folder kinds.
    #[serde(default)]
    pub data: Option<String>,
}

impl From<CreateFileRequest> for UploadRequest {
    fn from(req: CreateFileRequest) -> Self {
        Self {
            name: req.name,
            kind: req.kind,
            parent_id: req.parent_id,
            is_public: req.is_public,
            data: req.data,
        }
    }
}

/// Query parameters of `GET /files`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFilesQuery {
    /// Parent record id; absent means root.
    #[serde(default)]
    pub parent_id: Option<String>,
    /// Zero-based page index; non-numeric values mean page 0.
    #[serde(default)]
    pub page: Option<String>,
}

/// Query parameters of `GET /files/{id}/data`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RetrieveQuery {
    /// Requested derivative width; absent means the original bytes.
    #[serde(default)]
    pub size: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_accepts_wire_field_names() {
        let req: CreateFileRequest = serde_json::from_str(
            r#"{"name":"pic.png","type":"image","parentId":"abc","isPublic":true,"data":"aGk="}"#,
        )
        .expect("deserialize");

        assert_eq!(req.name.as_deref(), Some("pic.png"));
        assert_eq!(req.kind.as_deref(), Some("image"));
        assert_eq!(req.parent_id.as_deref(), Some("abc"));
        assert!(req.is_public);
        assert_eq!(req.data.as_deref(), Some("aGk="));
    }

    #[test]
    fn test_create_request_defaults() {
        let req: CreateFileRequest = serde_json::from_str("{}").expect("deserialize");
        assert!(req.name.is_none());
        assert!(req.kind.is_none());
        assert!(req.parent_id.is_none());
        assert!(!req.is_public);
        assert!(req.data.is_none());
    }
}
