//! Reducer-effect execution for the drive host boundary.

use leptos::logging;
use platform_host::HostServices;

use crate::{
    error::DriveError,
    model::{FileItem, ShareNotice},
    persistence,
    reducer::{DriveAction, DriveEffect},
};

/// Message shown when asking for a new folder name.
pub const FOLDER_NAME_PROMPT: &str = "New folder name";

/// Builds the delete confirmation text.
///
/// Folder deletes warn that contents stay behind, since deletion does not cascade.
pub fn confirm_delete_message(item_name: &str, is_folder: bool) -> String {
    if is_folder {
        format!(
            "Delete folder \"{item_name}\"? Items inside it are kept but will no longer be visible."
        )
    } else {
        format!("Delete \"{item_name}\"?")
    }
}

/// Runs one effect against the host services, feeding follow-up actions to `dispatch`.
///
/// `items` is the registry snapshot written by [`DriveEffect::PersistItems`].
pub async fn execute_effect(
    services: &HostServices,
    items: &[FileItem],
    effect: DriveEffect,
    dispatch: &dyn Fn(DriveAction),
) {
    match effect {
        DriveEffect::PersistItems => {
            if let Err(error) = persistence::persist_items(services.store.as_ref(), items).await {
                logging::warn!("persist registry failed: {error}");
                dispatch(DriveAction::ReportError { error });
            }
        }
        DriveEffect::PromptFolderName => {
            if let Some(name) = services.dialogs.prompt(FOLDER_NAME_PROMPT).await {
                dispatch(DriveAction::CreateFolder { name });
            }
        }
        DriveEffect::ConfirmDelete {
            item_id,
            item_name,
            is_folder,
        } => {
            let message = confirm_delete_message(&item_name, is_folder);
            if services.dialogs.confirm(&message).await {
                dispatch(DriveAction::DeleteItem { item_id });
            }
        }
        DriveEffect::SaveDownload {
            file_name,
            data_url,
        } => {
            if let Err(reason) = services.downloads.save_data_url(&file_name, &data_url).await {
                dispatch(DriveAction::ReportError {
                    error: DriveError::Download {
                        name: file_name,
                        reason,
                    },
                });
            }
        }
        DriveEffect::CopyShareLink { item_name, link } => {
            let copied = match services.clipboard.write_text(&link).await {
                Ok(()) => true,
                Err(err) => {
                    logging::warn!("copy share link failed: {err}");
                    false
                }
            };
            dispatch(DriveAction::ShareLinkReady {
                notice: ShareNotice {
                    item_name,
                    link,
                    copied,
                },
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use futures::executor::block_on;
    use platform_host::{
        HeadlessHost, NoopClipboardService, NoopDialogService, NoopDownloadService,
        NoopRecordStore, SavedDownload,
    };
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        host::test_support::Recorder,
        model::{BannerKind, ItemId, FILES_STORAGE_KEY},
        reducer::reduce_drive,
        share::share_link,
    };

    fn run(services: &HostServices, recorder: &Recorder, effect: DriveEffect) {
        let items = recorder.state.borrow().items.clone();
        block_on(execute_effect(services, &items, effect, &|action| {
            recorder.dispatch(action)
        }));
    }

    #[test]
    fn prompt_answer_creates_folder_and_cancel_does_nothing() {
        let host = HeadlessHost::default();
        host.dialogs.push_prompt(Some("Reports"));
        host.dialogs.push_prompt(None);
        let services = host.services();
        let recorder = Recorder::default();

        run(&services, &recorder, DriveEffect::PromptFolderName);
        run(&services, &recorder, DriveEffect::PromptFolderName);

        let state = recorder.state.borrow();
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].name, "Reports");
        assert_eq!(host.dialogs.asked(), vec![FOLDER_NAME_PROMPT; 2]);
        assert_eq!(*recorder.effects.borrow(), vec![DriveEffect::PersistItems]);
    }

    #[test]
    fn declined_confirmation_keeps_item() {
        let host = HeadlessHost::default();
        host.dialogs.push_confirm(false);
        host.dialogs.push_confirm(true);
        let services = host.services();
        let recorder = Recorder::default();
        recorder.dispatch(DriveAction::CreateFolder {
            name: "Docs".to_string(),
        });
        let item_id = recorder.state.borrow().items[0].id.clone();
        let effect = DriveEffect::ConfirmDelete {
            item_id,
            item_name: "Docs".to_string(),
            is_folder: true,
        };

        run(&services, &recorder, effect.clone());
        assert_eq!(recorder.state.borrow().items.len(), 1);

        run(&services, &recorder, effect);
        assert!(recorder.state.borrow().items.is_empty());
        assert!(host.dialogs.asked()[0].contains("no longer be visible"));
    }

    #[test]
    fn persist_after_last_delete_writes_empty_array() {
        let host = HeadlessHost::default();
        let services = host.services();
        let recorder = Recorder::default();
        recorder.dispatch(DriveAction::CreateFolder {
            name: "Solo".to_string(),
        });
        run(&services, &recorder, DriveEffect::PersistItems);
        assert!(host
            .store
            .raw(FILES_STORAGE_KEY)
            .is_some_and(|raw| raw.contains("Solo")));

        let item_id = recorder.state.borrow().items[0].id.clone();
        recorder.dispatch(DriveAction::DeleteItem { item_id });
        run(&services, &recorder, DriveEffect::PersistItems);
        assert_eq!(host.store.raw(FILES_STORAGE_KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn persist_failure_raises_banner_and_keeps_memory_state() {
        let host = HeadlessHost::default();
        host.store.set_fail_writes(true);
        let services = host.services();
        let recorder = Recorder::default();
        recorder.dispatch(DriveAction::CreateFolder {
            name: "Docs".to_string(),
        });

        run(&services, &recorder, DriveEffect::PersistItems);

        let state = recorder.state.borrow();
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.banner.as_ref().map(|b| b.kind), Some(BannerKind::Persist));
    }

    #[test]
    fn download_hands_content_to_host() {
        let host = HeadlessHost::default();
        let services = host.services();
        let recorder = Recorder::default();

        run(
            &services,
            &recorder,
            DriveEffect::SaveDownload {
                file_name: "a.txt".to_string(),
                data_url: "data:text/plain;base64,YQ==".to_string(),
            },
        );

        assert_eq!(
            host.downloads.saved(),
            vec![SavedDownload {
                file_name: "a.txt".to_string(),
                data_url: "data:text/plain;base64,YQ==".to_string(),
            }]
        );
        assert!(recorder.actions.borrow().is_empty());
    }

    #[test]
    fn share_copies_link_or_falls_back_to_display() {
        let host = HeadlessHost::default();
        let services = host.services();
        let recorder = Recorder::default();
        let link = share_link(&ItemId::new("file-1"));
        let effect = DriveEffect::CopyShareLink {
            item_name: "a.txt".to_string(),
            link: link.clone(),
        };

        run(&services, &recorder, effect.clone());
        assert_eq!(host.clipboard.writes(), vec![link.clone()]);
        assert_eq!(
            recorder.state.borrow().share_notice,
            Some(ShareNotice {
                item_name: "a.txt".to_string(),
                link: link.clone(),
                copied: true,
            })
        );

        host.clipboard.deny();
        run(&services, &recorder, effect);
        let notice = recorder.state.borrow().share_notice.clone().expect("notice");
        assert!(!notice.copied);
        assert_eq!(notice.link, link);
    }

    #[test]
    fn unavailable_host_services_degrade_to_banners_and_noops() {
        let services = HostServices {
            store: Rc::new(NoopRecordStore),
            clipboard: Rc::new(NoopClipboardService),
            downloads: Rc::new(NoopDownloadService),
            dialogs: Rc::new(NoopDialogService),
            timer: Rc::new(platform_host::InstantTimerService::default()),
            host_strategy: platform_host::HostStrategy::Headless,
        };
        let recorder = Recorder::default();
        let mut seeded = crate::model::DriveState::default();
        reduce_drive(
            &mut seeded,
            DriveAction::CreateFolder {
                name: "Docs".to_string(),
            },
        )
        .expect("seed");
        let item_id = seeded.items[0].id.clone();
        *recorder.state.borrow_mut() = seeded;

        run(&services, &recorder, DriveEffect::PromptFolderName);
        run(
            &services,
            &recorder,
            DriveEffect::ConfirmDelete {
                item_id,
                item_name: "Docs".to_string(),
                is_folder: true,
            },
        );
        assert_eq!(recorder.state.borrow().items.len(), 1);

        run(
            &services,
            &recorder,
            DriveEffect::SaveDownload {
                file_name: "a.txt".to_string(),
                data_url: "data:,".to_string(),
            },
        );
        assert_eq!(
            recorder.state.borrow().banner.as_ref().map(|b| b.kind),
            Some(BannerKind::Download)
        );

        let dispatched = recorder.actions.borrow().len();
        run(&services, &recorder, DriveEffect::PersistItems);
        assert_eq!(recorder.actions.borrow().len(), dispatched);

        run(
            &services,
            &recorder,
            DriveEffect::CopyShareLink {
                item_name: "a.txt".to_string(),
                link: "https://drive.example/share/x".to_string(),
            },
        );
        assert_eq!(
            recorder
                .state
                .borrow()
                .share_notice
                .as_ref()
                .map(|notice| notice.copied),
            Some(false)
        );
    }
}
