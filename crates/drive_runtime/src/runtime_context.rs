//! Runtime provider and context wiring for the drive.
//!
//! This module owns the reducer container, the effect queue and boot hydration. UI composition
//! stays in [`crate::components`].
#![allow(clippy::clone_on_copy)]

use leptos::*;
use platform_host::{HostServices, UploadSource};

use crate::{
    effect_executor,
    host::DriveHostContext,
    model::{DriveState, ItemId},
    reducer::{reduce_drive, DriveAction, DriveEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading drive state and dispatching [`DriveAction`] values.
pub struct DriveRuntimeContext {
    /// Host service bundle for executing side effects.
    pub host: StoredValue<DriveHostContext>,
    /// Reactive drive state signal.
    pub state: RwSignal<DriveState>,
    /// Queue of effects emitted by the reducer and drained by the executor.
    pub effects: RwSignal<Vec<DriveEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DriveAction>,
}

impl DriveRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DriveAction) {
        self.dispatch.call(action);
    }

    /// Starts an upload batch into the folder currently being viewed.
    pub fn upload(&self, sources: Vec<Box<dyn UploadSource>>) {
        self.host.get_value().start_upload(*self, sources);
    }
}

#[component]
/// Provides [`DriveRuntimeContext`] to descendant components and boots persisted state.
pub fn DriveProvider(
    /// Injected browser or headless host bundle assembled by the entry layer.
    host_services: HostServices,
    /// Folder to open once the registry has loaded.
    #[prop(default = None)]
    initial_folder: Option<ItemId>,
    children: Children,
) -> impl IntoView {
    let host = store_value(DriveHostContext::new(host_services));
    let state = create_rw_signal(DriveState::default());
    let effects = create_rw_signal(Vec::<DriveEffect>::new());

    let dispatch = Callback::new(move |action: DriveAction| {
        let mut drive = state.get_untracked();
        let previous = drive.clone();

        match reduce_drive(&mut drive, action) {
            Ok(new_effects) => {
                if drive != previous {
                    state.set(drive);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("drive reducer error: {err}"),
        }
    });

    let runtime = DriveRuntimeContext {
        host,
        state,
        effects,
        dispatch,
    };

    provide_context(runtime.clone());

    logging::log!("drive runtime using {} host", host.get_value().host_strategy_name());
    effect_executor::install(runtime);
    host.get_value()
        .install_boot_hydration(runtime, initial_folder);

    children().into_view()
}

/// Returns the current [`DriveRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DriveProvider`].
pub fn use_drive_runtime() -> DriveRuntimeContext {
    use_context::<DriveRuntimeContext>().expect("DriveRuntimeContext not provided")
}
