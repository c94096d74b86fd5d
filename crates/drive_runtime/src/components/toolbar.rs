use leptos::*;
use platform_host::UploadSource;
use platform_host_web::upload_sources_from_input;
use system_ui::{
    Button, ButtonSize, ButtonVariant, Cluster, FieldVariant, FilePicker, TextField, ToolBar,
    TrailNav,
};

use super::{dispatch_callback, use_drive_runtime};
use crate::{model::ItemId, reducer::DriveAction, registry::breadcrumbs};

#[component]
/// Upload, new-folder, and search controls.
pub(super) fn DriveToolbar() -> impl IntoView {
    let runtime = use_drive_runtime();
    let state = runtime.state;
    let uploading = Signal::derive(move || state.with(|state| state.is_uploading()));
    let upload_locked = Signal::derive(move || state.with(|state| !state.accepts_upload()));
    let loading = Signal::derive(move || state.with(|state| !state.hydrated));
    let query = Signal::derive(move || state.with(|state| state.query.clone()));

    let on_files_chosen = Callback::new(move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let sources = upload_sources_from_input(&input)
            .into_iter()
            .map(|source| Box::new(source) as Box<dyn UploadSource>)
            .collect::<Vec<_>>();
        runtime.upload(sources);
    });

    view! {
        <ToolBar aria_label="Drive actions">
            <FilePicker multiple=true disabled=upload_locked on_change=on_files_chosen>
                {move || if uploading.get() { "Uploading..." } else { "Upload files" }}
            </FilePicker>
            <Button
                disabled=loading
                on_click=dispatch_callback(runtime, |_| DriveAction::RequestNewFolder)
            >
                "New folder"
            </Button>
            <TextField
                variant=FieldVariant::Search
                input_type="search"
                placeholder="Search this folder"
                aria_label="Search this folder"
                value=query
                on_input=dispatch_callback(runtime, |ev: web_sys::Event| DriveAction::SetQuery {
                    query: event_target_value(&ev),
                })
            />
        </ToolBar>
    }
}

#[component]
/// Up control plus the clickable path from root to the current folder.
pub(super) fn FolderTrail() -> impl IntoView {
    let runtime = use_drive_runtime();
    let state = runtime.state;
    let at_root = Signal::derive(move || state.with(|state| state.cursor.is_none()));
    let trail = create_memo(move |_| {
        state.with(|state| {
            breadcrumbs(&state.items, state.cursor.as_ref())
                .into_iter()
                .map(|folder| (folder.id.clone(), folder.name.clone()))
                .collect::<Vec<_>>()
        })
    });
    let current = create_memo(move |_| state.with(|state| state.cursor.clone()));

    view! {
        <TrailNav layout_class="drive-trail">
            <Cluster>
                <Button
                    size=ButtonSize::Sm
                    aria_label="Up one folder"
                    disabled=at_root
                    on_click=dispatch_callback(runtime, |_| DriveAction::NavigateUp)
                >
                    "Up"
                </Button>
                <Button
                    variant=ButtonVariant::Quiet
                    size=ButtonSize::Sm
                    selected=at_root
                    on_click=dispatch_callback(runtime, |_| DriveAction::Navigate { folder: None })
                >
                    "My Drive"
                </Button>
                <For each=move || trail.get() key=|(id, _)| id.clone() let:crumb>
                    <TrailEntry id=crumb.0 name=crumb.1 current=current />
                </For>
            </Cluster>
        </TrailNav>
    }
}

#[component]
fn TrailEntry(id: ItemId, name: String, current: Memo<Option<ItemId>>) -> impl IntoView {
    let runtime = use_drive_runtime();
    let is_current = {
        let id = id.clone();
        Signal::derive(move || current.get().as_ref() == Some(&id))
    };
    view! {
        <span data-ui-slot="separator" aria-hidden="true">"/"</span>
        <Button
            variant=ButtonVariant::Quiet
            size=ButtonSize::Sm
            selected=is_current
            on_click=dispatch_callback(runtime, move |_| DriveAction::Navigate {
                folder: Some(id.clone()),
            })
        >
            {name}
        </Button>
    }
}
