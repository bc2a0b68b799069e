//! Record kind enumeration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of a stored record.
///
/// Immutable after creation. Folders carry no bytes; files and images are
/// backed by a blob, and images additionally get thumbnail derivatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "record_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// A container for other records. Never has blob content.
    Folder,
    /// An opaque byte blob.
    File,
    /// A byte blob that is eligible for thumbnail derivatives.
    Image,
}

impl RecordKind {
    /// Parse a kind from its wire representation.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "folder" => Some(Self::Folder),
            "file" => Some(Self::File),
            "image" => Some(Self::Image),
            _ => None,
        }
    }

    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Folder => "folder",
            Self::File => "file",
            Self::Image => "image",
        }
    }

    /// Whether records of this kind carry blob content.
    pub fn has_content(&self) -> bool {
        !matches!(self, Self::Folder)
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_kinds() {
        assert_eq!(RecordKind::parse("folder"), Some(RecordKind::Folder));
        assert_eq!(RecordKind::parse("file"), Some(RecordKind::File));
        assert_eq!(RecordKind::parse("image"), Some(RecordKind::Image));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(RecordKind::parse("Folder"), None);
        assert_eq!(RecordKind::parse("document"), None);
        assert_eq!(RecordKind::parse(""), None);
    }

    #[test]
    fn test_has_content() {
        assert!(!RecordKind::Folder.has_content());
        assert!(RecordKind::File.has_content());
        assert!(RecordKind::Image.has_content());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&RecordKind::Image).expect("serialize");
        assert_eq!(json, "\"image\"");
    }
}
