//! Reducer actions, side-effect intents, and transition logic for the drive.

use thiserror::Error;

use crate::{
    error::DriveError,
    model::{Banner, DriveState, FileItem, ItemId, ShareNotice},
    registry::{find_item, parent_cursor},
    share::share_link,
    upload::UploadProgress,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_drive`].
pub enum DriveAction {
    /// Replace the registry with the boot-time load result.
    Hydrate {
        /// Loaded records.
        items: Vec<FileItem>,
    },
    /// Ask the user for a new folder name.
    RequestNewFolder,
    /// Create a folder in the current folder. Blank names are ignored.
    CreateFolder {
        /// Folder name as entered.
        name: String,
    },
    /// Move the cursor. `None` is root. The target is not validated.
    Navigate {
        /// Target folder.
        folder: Option<ItemId>,
    },
    /// Move the cursor to the current folder's parent.
    NavigateUp,
    /// Replace the live search filter.
    SetQuery {
        /// Filter text.
        query: String,
    },
    /// Mark an upload batch as started.
    BeginUpload {
        /// Number of files in the batch.
        file_count: usize,
    },
    /// Publish upload progress.
    UploadProgressed {
        /// Latest progress snapshot.
        progress: UploadProgress,
    },
    /// Append a finished batch.
    UploadCompleted {
        /// New file records in upload order.
        items: Vec<FileItem>,
    },
    /// Abandon a failed batch.
    UploadFailed {
        /// Failure raised by the batch.
        error: DriveError,
    },
    /// Save a file's content through the host.
    RequestDownload {
        /// File to download.
        item_id: ItemId,
    },
    /// Generate a share link and copy it.
    RequestShare {
        /// Item to share.
        item_id: ItemId,
    },
    /// Record the outcome of a share copy.
    ShareLinkReady {
        /// Resulting notice.
        notice: ShareNotice,
    },
    /// Hide the share notice.
    DismissShareNotice,
    /// Ask the user to confirm deletion.
    RequestDelete {
        /// Item to delete.
        item_id: ItemId,
    },
    /// Remove one record. Children of a deleted folder are left in place.
    DeleteItem {
        /// Item to remove.
        item_id: ItemId,
    },
    /// Show an error banner.
    ReportError {
        /// Failure to show.
        error: DriveError,
    },
    /// Hide the error banner.
    DismissBanner,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_drive`] for the host layer to execute.
pub enum DriveEffect {
    /// Write the full registry to storage.
    PersistItems,
    /// Prompt for a folder name, then dispatch [`DriveAction::CreateFolder`].
    PromptFolderName,
    /// Confirm, then dispatch [`DriveAction::DeleteItem`].
    ConfirmDelete {
        /// Item awaiting confirmation.
        item_id: ItemId,
        /// Name shown in the confirmation.
        item_name: String,
        /// Whether the item is a folder.
        is_folder: bool,
    },
    /// Hand content to the host download surface.
    SaveDownload {
        /// Suggested file name.
        file_name: String,
        /// `data:` URL content.
        data_url: String,
    },
    /// Copy a share link to the clipboard.
    CopyShareLink {
        /// Shared item name.
        item_name: String,
        /// Link to copy.
        link: String,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that do not fit the current state.
pub enum ReducerError {
    /// The action references an id that is not in the registry.
    #[error("item not found: {0}")]
    ItemNotFound(ItemId),
    /// A batch was started while another one is running.
    #[error("an upload is already in progress")]
    UploadInProgress,
}

/// Applies a [`DriveAction`] to the drive state and collects resulting side effects.
///
/// Every registry mutation emits [`DriveEffect::PersistItems`], including mutations that leave
/// the registry empty.
///
/// # Errors
///
/// Returns [`ReducerError::ItemNotFound`] for download, share, or delete requests naming a
/// missing item, and [`ReducerError::UploadInProgress`] when a batch is already running.
pub fn reduce_drive(
    state: &mut DriveState,
    action: DriveAction,
) -> Result<Vec<DriveEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DriveAction::Hydrate { items } => {
            state.items = items;
            state.hydrated = true;
        }
        DriveAction::RequestNewFolder => effects.push(DriveEffect::PromptFolderName),
        DriveAction::CreateFolder { name } => {
            let name = name.trim();
            if !name.is_empty() {
                state
                    .items
                    .push(FileItem::new_folder(name, state.cursor.clone()));
                effects.push(DriveEffect::PersistItems);
            }
        }
        DriveAction::Navigate { folder } => state.cursor = folder,
        DriveAction::NavigateUp => {
            state.cursor = parent_cursor(&state.items, state.cursor.as_ref());
        }
        DriveAction::SetQuery { query } => state.query = query,
        DriveAction::BeginUpload { file_count } => {
            if state.is_uploading() {
                return Err(ReducerError::UploadInProgress);
            }
            state.upload = Some(UploadProgress::starting(file_count));
        }
        DriveAction::UploadProgressed { progress } => state.upload = Some(progress),
        DriveAction::UploadCompleted { items } => {
            state.upload = None;
            if !items.is_empty() {
                state.items.extend(items);
                effects.push(DriveEffect::PersistItems);
            }
        }
        DriveAction::UploadFailed { error } => {
            state.upload = None;
            state.banner = Some(Banner::from(&error));
        }
        DriveAction::RequestDownload { item_id } => {
            let item = find_item(&state.items, &item_id)
                .ok_or_else(|| ReducerError::ItemNotFound(item_id.clone()))?;
            if let Some(content) = item.content() {
                effects.push(DriveEffect::SaveDownload {
                    file_name: item.name.clone(),
                    data_url: content.to_string(),
                });
            }
        }
        DriveAction::RequestShare { item_id } => {
            let item = find_item(&state.items, &item_id)
                .ok_or_else(|| ReducerError::ItemNotFound(item_id.clone()))?;
            effects.push(DriveEffect::CopyShareLink {
                item_name: item.name.clone(),
                link: share_link(&item.id),
            });
        }
        DriveAction::ShareLinkReady { notice } => state.share_notice = Some(notice),
        DriveAction::DismissShareNotice => state.share_notice = None,
        DriveAction::RequestDelete { item_id } => {
            let item = find_item(&state.items, &item_id)
                .ok_or_else(|| ReducerError::ItemNotFound(item_id.clone()))?;
            effects.push(DriveEffect::ConfirmDelete {
                item_id: item.id.clone(),
                item_name: item.name.clone(),
                is_folder: item.is_folder(),
            });
        }
        DriveAction::DeleteItem { item_id } => {
            let index = state
                .items
                .iter()
                .position(|item| item.id == item_id)
                .ok_or(ReducerError::ItemNotFound(item_id))?;
            state.items.remove(index);
            effects.push(DriveEffect::PersistItems);
        }
        DriveAction::ReportError { error } => state.banner = Some(Banner::from(&error)),
        DriveAction::DismissBanner => state.banner = None,
    }
    Ok(effects)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        model::{BannerKind, ItemKind},
        registry::list_items,
    };

    fn create_folder(state: &mut DriveState, name: &str) -> ItemId {
        reduce_drive(
            state,
            DriveAction::CreateFolder {
                name: name.to_string(),
            },
        )
        .expect("create folder");
        state.items.last().expect("folder").id.clone()
    }

    fn text_file(name: &str, parent: Option<ItemId>) -> FileItem {
        FileItem {
            id: ItemId::generate(),
            name: name.to_string(),
            kind: ItemKind::File {
                size: 5,
                mime_type: "text/plain".to_string(),
                content: "data:text/plain;base64,aGVsbG8=".to_string(),
            },
            created_at: platform_host::next_creation_time(),
            parent_id: parent,
        }
    }

    #[test]
    fn create_folder_lands_in_current_folder_and_persists() {
        let mut state = DriveState::default();
        let outer = create_folder(&mut state, "Outer");
        reduce_drive(
            &mut state,
            DriveAction::Navigate {
                folder: Some(outer.clone()),
            },
        )
        .unwrap();

        let effects = reduce_drive(
            &mut state,
            DriveAction::CreateFolder {
                name: "  Inner ".to_string(),
            },
        )
        .unwrap();

        let inner = state.items.last().unwrap();
        assert_eq!(inner.name, "Inner");
        assert_eq!(inner.parent_id, Some(outer));
        assert!(inner.is_folder());
        assert_eq!(effects, vec![DriveEffect::PersistItems]);
    }

    #[test]
    fn blank_folder_name_is_a_silent_noop() {
        let mut state = DriveState::default();
        let effects = reduce_drive(
            &mut state,
            DriveAction::CreateFolder {
                name: "   ".to_string(),
            },
        )
        .unwrap();
        assert!(state.items.is_empty());
        assert!(effects.is_empty());
    }

    #[test]
    fn navigate_up_walks_to_parent_then_root() {
        let mut state = DriveState::default();
        let a = create_folder(&mut state, "A");
        reduce_drive(
            &mut state,
            DriveAction::Navigate {
                folder: Some(a.clone()),
            },
        )
        .unwrap();
        let b = create_folder(&mut state, "B");
        reduce_drive(&mut state, DriveAction::Navigate { folder: Some(b) }).unwrap();

        reduce_drive(&mut state, DriveAction::NavigateUp).unwrap();
        assert_eq!(state.cursor, Some(a));
        reduce_drive(&mut state, DriveAction::NavigateUp).unwrap();
        assert_eq!(state.cursor, None);
        reduce_drive(&mut state, DriveAction::NavigateUp).unwrap();
        assert_eq!(state.cursor, None);
    }

    #[test]
    fn navigate_up_from_unknown_folder_returns_to_root() {
        let mut state = DriveState::default();
        reduce_drive(
            &mut state,
            DriveAction::Navigate {
                folder: Some(ItemId::new("nowhere")),
            },
        )
        .unwrap();
        assert_eq!(state.cursor, Some(ItemId::new("nowhere")));
        reduce_drive(&mut state, DriveAction::NavigateUp).unwrap();
        assert_eq!(state.cursor, None);
    }

    #[test]
    fn completed_upload_appends_with_fresh_ids_and_clears_progress() {
        let mut state = DriveState::default();
        let folder = create_folder(&mut state, "Docs");
        let prior: Vec<ItemId> = state.items.iter().map(|item| item.id.clone()).collect();

        reduce_drive(&mut state, DriveAction::BeginUpload { file_count: 2 }).unwrap();
        assert!(state.is_uploading());
        let batch = vec![
            text_file("a.txt", Some(folder.clone())),
            text_file("b.txt", Some(folder.clone())),
        ];
        let effects =
            reduce_drive(&mut state, DriveAction::UploadCompleted { items: batch }).unwrap();

        assert!(!state.is_uploading());
        assert_eq!(effects, vec![DriveEffect::PersistItems]);
        let children = list_items(&state.items, Some(&folder), "");
        assert_eq!(children.len(), 2);
        assert!(children.iter().all(|child| !prior.contains(&child.id)));
        assert_ne!(children[0].id, children[1].id);
    }

    #[test]
    fn second_batch_is_rejected_while_one_runs() {
        let mut state = DriveState::default();
        reduce_drive(&mut state, DriveAction::BeginUpload { file_count: 1 }).unwrap();
        assert_eq!(
            reduce_drive(&mut state, DriveAction::BeginUpload { file_count: 3 }),
            Err(ReducerError::UploadInProgress)
        );
    }

    #[test]
    fn failed_upload_resets_progress_and_raises_banner() {
        let mut state = DriveState::default();
        reduce_drive(&mut state, DriveAction::BeginUpload { file_count: 2 }).unwrap();
        let effects = reduce_drive(
            &mut state,
            DriveAction::UploadFailed {
                error: DriveError::UploadRead {
                    name: "a.txt".to_string(),
                    reason: "gone".to_string(),
                },
            },
        )
        .unwrap();

        assert!(effects.is_empty());
        assert!(state.upload.is_none());
        assert!(state.items.is_empty());
        let banner = state.banner.clone().expect("banner");
        assert_eq!(banner.kind, BannerKind::Upload);
        reduce_drive(&mut state, DriveAction::DismissBanner).unwrap();
        assert_eq!(state.banner, None);
    }

    #[test]
    fn deleting_folder_leaves_children_dangling() {
        let mut state = DriveState::default();
        let folder = create_folder(&mut state, "Docs");
        state.items.push(text_file("inside.txt", Some(folder.clone())));

        let effects = reduce_drive(
            &mut state,
            DriveAction::DeleteItem {
                item_id: folder.clone(),
            },
        )
        .unwrap();

        assert_eq!(effects, vec![DriveEffect::PersistItems]);
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].parent_id, Some(folder.clone()));
        assert!(list_items(&state.items, None, "").is_empty());
        assert_eq!(list_items(&state.items, Some(&folder), "").len(), 1);
    }

    #[test]
    fn deleting_last_item_still_persists() {
        let mut state = DriveState::default();
        let only = create_folder(&mut state, "Solo");
        let effects =
            reduce_drive(&mut state, DriveAction::DeleteItem { item_id: only }).unwrap();
        assert!(state.items.is_empty());
        assert_eq!(effects, vec![DriveEffect::PersistItems]);
    }

    #[test]
    fn delete_request_asks_for_confirmation_first() {
        let mut state = DriveState::default();
        let folder = create_folder(&mut state, "Docs");
        let effects = reduce_drive(
            &mut state,
            DriveAction::RequestDelete {
                item_id: folder.clone(),
            },
        )
        .unwrap();

        assert_eq!(state.items.len(), 1);
        assert_eq!(
            effects,
            vec![DriveEffect::ConfirmDelete {
                item_id: folder,
                item_name: "Docs".to_string(),
                is_folder: true,
            }]
        );
    }

    #[test]
    fn unknown_ids_are_reported() {
        let mut state = DriveState::default();
        let missing = ItemId::new("missing");
        assert_eq!(
            reduce_drive(
                &mut state,
                DriveAction::DeleteItem {
                    item_id: missing.clone()
                }
            ),
            Err(ReducerError::ItemNotFound(missing.clone()))
        );
        assert_eq!(
            reduce_drive(
                &mut state,
                DriveAction::RequestShare {
                    item_id: missing.clone()
                }
            ),
            Err(ReducerError::ItemNotFound(missing))
        );
    }

    #[test]
    fn download_emits_content_for_files_and_nothing_for_folders() {
        let mut state = DriveState::default();
        let folder = create_folder(&mut state, "Docs");
        let file = text_file("hello.txt", None);
        let file_id = file.id.clone();
        state.items.push(file);

        let effects =
            reduce_drive(&mut state, DriveAction::RequestDownload { item_id: file_id }).unwrap();
        assert_eq!(
            effects,
            vec![DriveEffect::SaveDownload {
                file_name: "hello.txt".to_string(),
                data_url: "data:text/plain;base64,aGVsbG8=".to_string(),
            }]
        );

        let effects =
            reduce_drive(&mut state, DriveAction::RequestDownload { item_id: folder }).unwrap();
        assert!(effects.is_empty());
    }

    #[test]
    fn share_request_emits_stable_link() {
        let mut state = DriveState::default();
        let file = text_file("hello.txt", None);
        let file_id = file.id.clone();
        state.items.push(file);

        let first = reduce_drive(
            &mut state,
            DriveAction::RequestShare {
                item_id: file_id.clone(),
            },
        )
        .unwrap();
        let second = reduce_drive(
            &mut state,
            DriveAction::RequestShare {
                item_id: file_id.clone(),
            },
        )
        .unwrap();

        assert_eq!(first, second);
        assert_eq!(
            first,
            vec![DriveEffect::CopyShareLink {
                item_name: "hello.txt".to_string(),
                link: share_link(&file_id),
            }]
        );
    }

    #[test]
    fn hydrate_replaces_items_without_persisting() {
        let mut state = DriveState::default();
        let items = vec![text_file("a.txt", None)];
        let effects = reduce_drive(
            &mut state,
            DriveAction::Hydrate {
                items: items.clone(),
            },
        )
        .unwrap();
        assert!(effects.is_empty());
        assert!(state.hydrated);
        assert_eq!(state.items, items);
    }
}
