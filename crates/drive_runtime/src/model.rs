//! Registry records and the reactive drive state.

use std::fmt;

use chrono::{DateTime, Utc};
use platform_host::UploadDescriptor;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{error::DriveError, upload::UploadProgress};

/// `localStorage` key holding the persisted registry (a JSON array of [`FileItem`]).
pub const FILES_STORAGE_KEY: &str = "cloud-drive.files.v1";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
/// Identifier shared by files and folders.
pub struct ItemId(String);

impl ItemId {
    /// Wraps an existing identifier.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
/// File or folder payload. Only files carry size, content type, and data.
pub enum ItemKind {
    /// Uploaded file.
    File {
        /// Size in bytes as reported at upload.
        size: u64,
        /// Content type.
        #[serde(rename = "mimeType")]
        mime_type: String,
        /// `data:` URL with the full file content; empty when the record was stored without one.
        #[serde(default)]
        content: String,
    },
    /// Folder.
    Folder,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One registry record.
pub struct FileItem {
    /// Unique, immutable identifier.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// File or folder payload.
    #[serde(flatten)]
    pub kind: ItemKind,
    /// Creation time, persisted as an ISO-8601 string.
    pub created_at: DateTime<Utc>,
    /// Containing folder; `None` is root.
    #[serde(default)]
    pub parent_id: Option<ItemId>,
}

impl FileItem {
    /// Builds a new folder record with a fresh id.
    pub fn new_folder(name: &str, parent_id: Option<ItemId>) -> Self {
        Self {
            id: ItemId::generate(),
            name: name.to_string(),
            kind: ItemKind::Folder,
            created_at: platform_host::next_creation_time(),
            parent_id,
        }
    }

    /// Builds a new file record with a fresh id from upload metadata and encoded content.
    pub fn new_file(
        descriptor: &UploadDescriptor,
        content: String,
        parent_id: Option<ItemId>,
    ) -> Self {
        Self {
            id: ItemId::generate(),
            name: descriptor.name.clone(),
            kind: ItemKind::File {
                size: descriptor.size,
                mime_type: descriptor.mime_type.clone(),
                content,
            },
            created_at: platform_host::next_creation_time(),
            parent_id,
        }
    }

    /// Returns `true` for folders.
    pub fn is_folder(&self) -> bool {
        matches!(self.kind, ItemKind::Folder)
    }

    /// File size, `None` for folders.
    pub fn size(&self) -> Option<u64> {
        match &self.kind {
            ItemKind::File { size, .. } => Some(*size),
            ItemKind::Folder => None,
        }
    }

    /// Content type, `None` for folders.
    pub fn mime_type(&self) -> Option<&str> {
        match &self.kind {
            ItemKind::File { mime_type, .. } => Some(mime_type),
            ItemKind::Folder => None,
        }
    }

    /// Downloadable content; `None` for folders and for files stored without data.
    pub fn content(&self) -> Option<&str> {
        match &self.kind {
            ItemKind::File { content, .. } if !content.is_empty() => Some(content),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Failure family shown in the banner.
pub enum BannerKind {
    /// Boot-time storage failure.
    Initialization,
    /// File read failure during an upload batch.
    Upload,
    /// Client-side save failure.
    Download,
    /// Registry write failure.
    Persist,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// The single user-visible error message, dismissed manually.
pub struct Banner {
    /// Failure family.
    pub kind: BannerKind,
    /// Message text.
    pub message: String,
}

impl From<&DriveError> for Banner {
    fn from(error: &DriveError) -> Self {
        let kind = match error {
            DriveError::Initialization(_) => BannerKind::Initialization,
            DriveError::UploadRead { .. } => BannerKind::Upload,
            DriveError::Download { .. } => BannerKind::Download,
            DriveError::Persist(_) => BannerKind::Persist,
        };
        Self {
            kind,
            message: error.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of the last share action.
pub struct ShareNotice {
    /// Name of the shared item.
    pub item_name: String,
    /// Generated link.
    pub link: String,
    /// Whether the clipboard accepted the link. When `false` the UI shows the link itself.
    pub copied: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Reactive drive state owned by the runtime provider.
pub struct DriveState {
    /// Registry records in insertion order.
    pub items: Vec<FileItem>,
    /// Folder being viewed; `None` is root.
    pub cursor: Option<ItemId>,
    /// Live search filter.
    pub query: String,
    /// Progress of the running upload batch.
    pub upload: Option<UploadProgress>,
    /// Current error banner.
    pub banner: Option<Banner>,
    /// Current share notice.
    pub share_notice: Option<ShareNotice>,
    /// Whether boot hydration has finished.
    pub hydrated: bool,
}

impl DriveState {
    /// Returns `true` while an upload batch is running.
    pub fn is_uploading(&self) -> bool {
        self.upload.is_some()
    }

    /// Returns `true` once the registry has loaded and no batch is running.
    pub fn accepts_upload(&self) -> bool {
        self.hydrated && !self.is_uploading()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn fixed_time() -> DateTime<Utc> {
        platform_host::utc_from_unix_ms(1_700_000_000_000)
    }

    #[test]
    fn file_record_serializes_with_camel_case_fields() {
        let item = FileItem {
            id: ItemId::new("f1"),
            name: "a.txt".to_string(),
            kind: ItemKind::File {
                size: 3,
                mime_type: "text/plain".to_string(),
                content: "data:text/plain;base64,YWJj".to_string(),
            },
            created_at: fixed_time(),
            parent_id: Some(ItemId::new("d1")),
        };

        let value = serde_json::to_value(&item).expect("serialize");
        assert_eq!(
            value,
            json!({
                "id": "f1",
                "name": "a.txt",
                "type": "file",
                "size": 3,
                "mimeType": "text/plain",
                "content": "data:text/plain;base64,YWJj",
                "createdAt": "2023-11-14T22:13:20Z",
                "parentId": "d1"
            })
        );
    }

    #[test]
    fn root_folder_round_trips_with_null_parent() {
        let folder = FileItem {
            id: ItemId::new("d1"),
            name: "Docs".to_string(),
            kind: ItemKind::Folder,
            created_at: fixed_time(),
            parent_id: None,
        };
        let raw = serde_json::to_string(&folder).expect("serialize");
        assert!(raw.contains("\"parentId\":null"));
        assert!(!raw.contains("size"));

        let back: FileItem = serde_json::from_str(&raw).expect("deserialize");
        assert_eq!(back, folder);
    }

    #[test]
    fn records_written_by_other_clients_parse() {
        let raw = r#"{
            "id": "1700000000000",
            "name": "Photos",
            "type": "folder",
            "createdAt": "2024-03-01T10:00:00.000Z"
        }"#;
        let item: FileItem = serde_json::from_str(raw).expect("deserialize");
        assert!(item.is_folder());
        assert_eq!(item.parent_id, None);
        assert_eq!(item.size(), None);
        assert_eq!(item.content(), None);
    }

    #[test]
    fn generated_ids_are_distinct() {
        let first = FileItem::new_folder("a", None);
        let second = FileItem::new_folder("a", None);
        assert_ne!(first.id, second.id);
        assert!(second.created_at > first.created_at);
    }

    #[test]
    fn banner_kind_follows_error_family() {
        let banner = Banner::from(&DriveError::Persist("quota".to_string()));
        assert_eq!(banner.kind, BannerKind::Persist);
        assert!(banner.message.contains("quota"));
    }

    #[test]
    fn uploads_wait_for_hydration_and_for_the_running_batch() {
        let mut state = DriveState::default();
        assert!(!state.accepts_upload());

        state.hydrated = true;
        assert!(state.accepts_upload());

        state.upload = Some(UploadProgress::starting(2));
        assert!(!state.accepts_upload());
    }
}
