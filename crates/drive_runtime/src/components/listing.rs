use leptos::*;
use system_ui::{Button, ButtonSize, ButtonVariant, Cluster, DataTable, EmptyState, Text, TextTone};

use super::{dispatch_callback, empty_listing_text, use_drive_runtime, visible_items};
use crate::{
    format::{format_created_at, format_file_size, FileCategory},
    model::FileItem,
    reducer::DriveAction,
};

const FOLDER_GLYPH: &str = "[dir]";

fn row_glyph(item: &FileItem) -> &'static str {
    match item.mime_type() {
        Some(mime_type) => FileCategory::from_mime(mime_type).glyph(),
        None => FOLDER_GLYPH,
    }
}

fn row_kind(item: &FileItem) -> String {
    match item.mime_type() {
        Some(mime_type) => mime_type.to_string(),
        None => "Folder".to_string(),
    }
}

#[component]
/// Listing of the current folder, or an empty state.
pub(super) fn ItemTable() -> impl IntoView {
    let runtime = use_drive_runtime();
    let state = runtime.state;
    let rows = create_memo(move |_| state.with(visible_items));
    let query = Signal::derive(move || state.with(|state| state.query.clone()));

    view! {
        <Show
            when=move || !rows.with(Vec::is_empty)
            fallback=move || {
                view! { <EmptyState>{move || empty_listing_text(&query.get())}</EmptyState> }
            }
        >
            <DataTable layout_class="drive-listing" aria_label="Files and folders">
                <thead>
                    <tr>
                        <th scope="col">"Name"</th>
                        <th scope="col">"Type"</th>
                        <th scope="col">"Size"</th>
                        <th scope="col">"Created"</th>
                        <th scope="col">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For each=move || rows.get() key=|item| item.id.clone() let:item>
                        <ItemRow item=item />
                    </For>
                </tbody>
            </DataTable>
        </Show>
    }
}

#[component]
fn ItemRow(item: FileItem) -> impl IntoView {
    let runtime = use_drive_runtime();
    let id = item.id.clone();
    let is_folder = item.is_folder();
    let kind_token = if is_folder { "folder" } else { "file" };
    let size = item
        .size()
        .map(format_file_size)
        .unwrap_or_else(|| "-".to_string());
    let created_iso = item.created_at.to_rfc3339();
    let created_text = format_created_at(&item.created_at);
    let glyph = row_glyph(&item);
    let kind_text = row_kind(&item);
    let item_name = item.name;

    let name_cell = if is_folder {
        let folder = id.clone();
        let title = format!("Open {item_name}");
        view! {
            <Button
                variant=ButtonVariant::Quiet
                size=ButtonSize::Sm
                title=title
                on_click=dispatch_callback(runtime, move |_| DriveAction::Navigate {
                    folder: Some(folder.clone()),
                })
            >
                {item_name.clone()}
            </Button>
        }
        .into_view()
    } else {
        view! { <Text>{item_name}</Text> }.into_view()
    };

    let file_actions = (!is_folder).then(|| {
        let download_id = id.clone();
        let share_id = id.clone();
        view! {
            <Button
                size=ButtonSize::Sm
                on_click=dispatch_callback(runtime, move |_| DriveAction::RequestDownload {
                    item_id: download_id.clone(),
                })
            >
                "Download"
            </Button>
            <Button
                size=ButtonSize::Sm
                on_click=dispatch_callback(runtime, move |_| DriveAction::RequestShare {
                    item_id: share_id.clone(),
                })
            >
                "Share"
            </Button>
        }
    });

    view! {
        <tr data-item-kind=kind_token>
            <td>
                <Cluster nowrap=true>
                    <Text tone=TextTone::Secondary ui_slot="glyph">{glyph}</Text>
                    {name_cell}
                </Cluster>
            </td>
            <td>{kind_text}</td>
            <td>{size}</td>
            <td>
                <time datetime=created_iso>{created_text}</time>
            </td>
            <td>
                <Cluster nowrap=true>
                    {file_actions}
                    <Button
                        variant=ButtonVariant::Danger
                        size=ButtonSize::Sm
                        on_click=dispatch_callback(runtime, move |_| DriveAction::RequestDelete {
                            item_id: id.clone(),
                        })
                    >
                        "Delete"
                    </Button>
                </Cluster>
            </td>
        </tr>
    }
}
