use drive_runtime::{DriveProvider, DriveShell, ItemId};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use platform_host_web::build_host_services;

/// Reads the optional `folder_id` route segment as the drive's starting folder.
fn starting_folder(raw: Option<&String>) -> Option<ItemId> {
    raw.map(|raw| raw.trim())
        .filter(|raw| !raw.is_empty())
        .map(ItemId::new)
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Drive" />
        <Meta name="description" content="A browser-local file drive simulation." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DriveEntry />
                    <Route path="/folder/:folder_id" view=DriveEntry />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn DriveEntry() -> impl IntoView {
    let params = use_params_map();
    let initial_folder = params.with_untracked(|map| starting_folder(map.get("folder_id")));

    view! {
        <DriveProvider host_services=build_host_services() initial_folder=initial_folder>
            <DriveShell />
        </DriveProvider>
    }
}
