//! Host-side runtime helpers for executing reducer effects against injected browser services.
//!
//! Effect bodies are plain async functions over [`HostServices`] and a dispatch callback, so they
//! run under `futures::executor::block_on` with the headless adapters. The methods on
//! [`DriveHostContext`] only schedule them on the browser event loop.

mod boot;
mod effects;
mod upload_effects;

use leptos::{logging, spawn_local, SignalGetUntracked, SignalWithUntracked};
use platform_host::{HostServices, UploadSource};

pub use boot::hydrate_registry;
pub use effects::{confirm_delete_message, execute_effect, FOLDER_NAME_PROMPT};
pub use upload_effects::upload_files;

use crate::{
    model::{DriveState, ItemId},
    reducer::DriveEffect,
    runtime_context::DriveRuntimeContext,
};

#[derive(Clone)]
/// Host service bundle for drive runtime side effects.
pub struct DriveHostContext {
    services: HostServices,
}

impl DriveHostContext {
    /// Wraps an injected service bundle.
    pub fn new(services: HostServices) -> Self {
        Self { services }
    }

    /// Returns the injected service bundle.
    pub fn services(&self) -> &HostServices {
        &self.services
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.services.host_strategy.as_str()
    }

    /// Loads the persisted registry and hydrates the runtime, then applies the starting folder.
    pub fn install_boot_hydration(
        &self,
        runtime: DriveRuntimeContext,
        initial_folder: Option<ItemId>,
    ) {
        let services = self.services.clone();
        spawn_local(async move {
            hydrate_registry(&services, initial_folder, &|action| {
                runtime.dispatch_action(action)
            })
            .await;
        });
    }

    /// Executes a single [`DriveEffect`] emitted by the reducer.
    ///
    /// Persistence writes the registry as it stands when the effect is drained.
    pub fn run_drive_effect(&self, runtime: DriveRuntimeContext, effect: DriveEffect) {
        let services = self.services.clone();
        let items = runtime.state.get_untracked().items;
        spawn_local(async move {
            execute_effect(&services, &items, effect, &|action| {
                runtime.dispatch_action(action)
            })
            .await;
        });
    }

    /// Starts an upload batch into the current folder.
    ///
    /// Ignored before boot hydration finishes and while another batch is running.
    pub fn start_upload(&self, runtime: DriveRuntimeContext, sources: Vec<Box<dyn UploadSource>>) {
        if sources.is_empty() {
            return;
        }
        let (accepts, cursor) = runtime
            .state
            .with_untracked(|state| (state.accepts_upload(), state.cursor.clone()));
        if !accepts {
            logging::warn!("upload ignored: drive is loading or a batch is already running");
            return;
        }
        let services = self.services.clone();
        spawn_local(async move {
            upload_files(
                &services,
                &sources,
                cursor,
                &|| runtime.state.with_untracked(DriveState::accepts_upload),
                &|action| runtime.dispatch_action(action),
            )
            .await;
        });
    }
}
