//! Drive UI composition.
//!
//! Components read [`DriveRuntimeContext`] and only ever dispatch [`DriveAction`] values; host
//! work is reached through the effect queue or [`DriveRuntimeContext::upload`].

mod listing;
mod notices;
mod toolbar;

use leptos::*;
use system_ui::{Pane, PaneHeader, StatusBar, StatusBarItem};

pub use crate::runtime_context::{use_drive_runtime, DriveProvider, DriveRuntimeContext};

use self::{
    listing::ItemTable,
    notices::{DriveNotices, UploadStatus},
    toolbar::{DriveToolbar, FolderTrail},
};
use crate::{
    format::format_file_size,
    model::{DriveState, FileItem},
    reducer::DriveAction,
    registry::{list_items, usage_summary, UsageSummary},
    upload::UploadProgress,
};

const SIMULATION_DISCLAIMER: &str = "Files are kept in this browser's local storage. \
    Nothing is uploaded and share links are placeholders.";

/// Items visible in the current folder under the current filter, cloned for rendering.
pub(crate) fn visible_items(state: &DriveState) -> Vec<FileItem> {
    list_items(&state.items, state.cursor.as_ref(), &state.query)
        .into_iter()
        .cloned()
        .collect()
}

pub(crate) fn upload_status_text(progress: &UploadProgress) -> String {
    if progress.file_name.is_empty() {
        return format!("Preparing {} file(s)...", progress.file_count);
    }
    format!(
        "Uploading {} ({} of {}) {}%",
        progress.file_name,
        progress.file_index + 1,
        progress.file_count,
        progress.rounded_percent()
    )
}

pub(crate) fn usage_text(summary: UsageSummary) -> String {
    format!(
        "{} file(s), {} folder(s), {} stored",
        summary.files,
        summary.folders,
        format_file_size(summary.total_bytes)
    )
}

pub(crate) fn empty_listing_text(query: &str) -> String {
    if query.trim().is_empty() {
        "This folder is empty. Upload files or create a folder to get started.".to_string()
    } else {
        format!("No items match \"{query}\".")
    }
}

#[component]
/// Full drive surface: header, toolbar, location trail, notices, listing, and status bar.
pub fn DriveShell() -> impl IntoView {
    let runtime = use_drive_runtime();
    let state = runtime.state;

    let usage = create_memo(move |_| state.with(|state| usage_summary(&state.items)));
    let visible_count = create_memo(move |_| state.with(|state| visible_items(state).len()));

    view! {
        <Pane layout_class="drive-shell" aria_label="Drive">
            <PaneHeader title="Drive" meta=SIMULATION_DISCLAIMER>
                <span data-ui-slot="host">{runtime.host.get_value().host_strategy_name()}</span>
            </PaneHeader>
            <DriveToolbar />
            <FolderTrail />
            <UploadStatus />
            <DriveNotices />
            <Show
                when=move || state.with(|state| state.hydrated)
                fallback=|| view! { <p class="drive-loading">"Loading files..."</p> }
            >
                <ItemTable />
            </Show>
            <StatusBar>
                <StatusBarItem>
                    {move || format!("{} item(s) here", visible_count.get())}
                </StatusBarItem>
                <StatusBarItem>{move || usage_text(usage.get())}</StatusBarItem>
            </StatusBar>
        </Pane>
    }
}

pub(crate) fn dispatch_callback<T: 'static>(
    runtime: DriveRuntimeContext,
    action: impl Fn(T) -> DriveAction + 'static,
) -> Callback<T> {
    Callback::new(move |value| runtime.dispatch_action(action(value)))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        model::{ItemId, ItemKind},
        upload::UploadPhase,
    };

    fn item(id: &str, name: &str, parent: Option<&str>) -> FileItem {
        FileItem {
            id: ItemId::new(id),
            name: name.to_string(),
            kind: ItemKind::Folder,
            created_at: platform_host::utc_from_unix_ms(0),
            parent_id: parent.map(ItemId::new),
        }
    }

    #[test]
    fn visible_items_follow_cursor_and_query() {
        let state = DriveState {
            items: vec![
                item("a", "Alpha", None),
                item("b", "Beta", Some("a")),
                item("c", "alphabet", Some("a")),
            ],
            cursor: Some(ItemId::new("a")),
            query: "ALPHA".to_string(),
            ..DriveState::default()
        };
        let names: Vec<String> = visible_items(&state).into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["alphabet".to_string()]);
    }

    #[test]
    fn upload_status_names_current_file() {
        let progress = UploadProgress {
            file_index: 1,
            file_count: 3,
            file_name: "b.txt".to_string(),
            phase: UploadPhase::Processing,
            percent: 49.6,
        };
        assert_eq!(upload_status_text(&progress), "Uploading b.txt (2 of 3) 50%");
        assert_eq!(
            upload_status_text(&UploadProgress::starting(2)),
            "Preparing 2 file(s)..."
        );
    }

    #[test]
    fn usage_and_empty_copy() {
        let summary = UsageSummary {
            files: 2,
            folders: 1,
            total_bytes: 1536,
        };
        assert_eq!(usage_text(summary), "2 file(s), 1 folder(s), 1.5 KB stored");
        assert!(empty_listing_text("  ").starts_with("This folder is empty"));
        assert_eq!(empty_listing_text("pdf"), "No items match \"pdf\".");
    }
}
